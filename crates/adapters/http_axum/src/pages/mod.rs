//! Server-side rendered settings pages and the credential form handlers.

#[allow(clippy::missing_errors_doc)]
pub mod alarm;
#[allow(clippy::missing_errors_doc)]
pub mod settings;
#[allow(clippy::missing_errors_doc)]
pub mod wifi;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};
use alarmhub_domain::error::AlarmHubError;

use crate::state::AppState;

/// Build the page sub-router.
pub fn routes<AR, CR, EP>() -> Router<AppState<AR, CR, EP>>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(settings::index::<AR, CR, EP>))
        .route("/alarm", get(alarm::index::<AR, CR, EP>))
        .route("/wifi", get(wifi::index))
        .route("/configure", post(wifi::configure::<AR, CR, EP>))
        .route("/clear", post(wifi::clear::<AR, CR, EP>))
}

/// Single-message page used for form outcomes and errors.
#[derive(Template)]
#[template(path = "notice.html")]
pub struct NoticeTemplate {
    title: &'static str,
    message: String,
}

impl NoticeTemplate {
    #[must_use]
    pub fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

impl IntoResponse for NoticeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Maps [`AlarmHubError`] to an HTML notice page.
pub struct PageError(AlarmHubError);

impl From<AlarmHubError> for PageError {
    fn from(err: AlarmHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self.0 {
            AlarmHubError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                NoticeTemplate::new("Dati non validi", err.to_string()),
            )
                .into_response(),
            AlarmHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    NoticeTemplate::new("Errore", "Errore interno del dispositivo."),
                )
                    .into_response()
            }
        }
    }
}
