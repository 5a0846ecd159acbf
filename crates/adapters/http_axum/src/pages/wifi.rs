//! Wi-Fi provisioning page and the `/configure` and `/clear` forms.
//!
//! Both forms end with a restart (driven by the event bus), so they answer
//! with a notice page instead of redirecting back.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};
use alarmhub_domain::credentials::WifiCredentials;

use super::{NoticeTemplate, PageError};
use crate::state::AppState;

/// Bare provisioning page, nothing pre-filled.
#[derive(Template)]
#[template(path = "wifi.html")]
pub struct WifiTemplate;

impl IntoResponse for WifiTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Form data posted to `/configure`.
///
/// Missing fields default to empty so they fail domain validation with a
/// readable message rather than an extractor rejection.
#[derive(Deserialize)]
pub struct ConfigureForm {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: String,
}

/// `GET /wifi`
pub async fn index() -> WifiTemplate {
    WifiTemplate
}

/// `POST /configure`: store credentials, then restart.
pub async fn configure<AR, CR, EP>(
    State(state): State<AppState<AR, CR, EP>>,
    Form(form): Form<ConfigureForm>,
) -> Result<NoticeTemplate, PageError>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let credentials = WifiCredentials::new(form.ssid, form.password)?;
    let saved = state.credentials_service.configure(credentials).await?;

    Ok(NoticeTemplate::new(
        "Configurazione salvata",
        format!(
            "Il dispositivo si riavvia e si collega alla rete \"{}\".",
            saved.ssid
        ),
    ))
}

/// `POST /clear`: erase credentials, then restart.
pub async fn clear<AR, CR, EP>(
    State(state): State<AppState<AR, CR, EP>>,
) -> Result<NoticeTemplate, PageError>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    state.credentials_service.clear().await?;

    Ok(NoticeTemplate::new(
        "Dati eliminati",
        "Le credenziali WiFi sono state eliminate. Il dispositivo si riavvia.",
    ))
}
