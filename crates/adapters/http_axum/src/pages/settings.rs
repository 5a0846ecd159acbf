//! Configuration page: Wi-Fi credentials and alarm on one page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};
use alarmhub_domain::alarm::AlarmDisplay;

use super::PageError;
use crate::state::AppState;

/// Configuration page template.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    alarm_time: AlarmDisplay,
    ssid: String,
    password: String,
}

impl IntoResponse for SettingsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: configuration page with the stored values filled in.
pub async fn index<AR, CR, EP>(
    State(state): State<AppState<AR, CR, EP>>,
) -> Result<SettingsTemplate, PageError>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let alarm = state.alarm_service.current_alarm().await?;
    let (ssid, password) = state
        .credentials_service
        .current_credentials()
        .await?
        .map(|creds| (creds.ssid, creds.password))
        .unwrap_or_default();

    Ok(SettingsTemplate {
        alarm_time: AlarmDisplay(alarm),
        ssid,
        password,
    })
}
