//! Alarm-only page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};
use alarmhub_domain::alarm::AlarmDisplay;

use super::PageError;
use crate::state::AppState;

/// Alarm page template.
#[derive(Template)]
#[template(path = "alarm.html")]
pub struct AlarmTemplate {
    alarm_time: AlarmDisplay,
}

impl IntoResponse for AlarmTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /alarm`
pub async fn index<AR, CR, EP>(
    State(state): State<AppState<AR, CR, EP>>,
) -> Result<AlarmTemplate, PageError>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let alarm = state.alarm_service.current_alarm().await?;
    Ok(AlarmTemplate {
        alarm_time: AlarmDisplay(alarm),
    })
}
