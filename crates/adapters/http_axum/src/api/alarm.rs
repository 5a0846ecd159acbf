//! `GET /get_alarm` and `GET /set_alarm`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};
use alarmhub_domain::alarm::{AlarmDisplay, AlarmTime};
use alarmhub_domain::error::{AlarmHubError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `/set_alarm`.
///
/// Both parts are kept as text so that anything unparsable ends up as the
/// `invalid` reply instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SetAlarmQuery {
    pub hour: Option<String>,
    pub minute: Option<String>,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    /// `HH:MM`, or `--:--` when unset.
    Ok(AlarmDisplay),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(display) => display.to_string().into_response(),
        }
    }
}

/// Possible responses from the set endpoint.
pub enum SetResponse {
    /// The stored alarm, `HH:MM`.
    Ok(AlarmTime),
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(alarm) => alarm.to_string().into_response(),
        }
    }
}

/// `GET /get_alarm`
pub async fn get<AR, CR, EP>(
    State(state): State<AppState<AR, CR, EP>>,
) -> Result<GetResponse, ApiError>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let alarm = state.alarm_service.current_alarm().await?;
    Ok(GetResponse::Ok(AlarmDisplay(alarm)))
}

/// `GET /set_alarm?hour=HH&minute=MM`
pub async fn set<AR, CR, EP>(
    State(state): State<AppState<AR, CR, EP>>,
    query: Result<Query<SetAlarmQuery>, QueryRejection>,
) -> Result<SetResponse, ApiError>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let alarm = parse_query(query)?;
    let saved = state.alarm_service.set_alarm(alarm).await?;
    Ok(SetResponse::Ok(saved))
}

fn parse_query(
    query: Result<Query<SetAlarmQuery>, QueryRejection>,
) -> Result<AlarmTime, AlarmHubError> {
    let Ok(Query(SetAlarmQuery { hour, minute })) = query else {
        return Err(ValidationError::MalformedTime(String::new()).into());
    };
    match (hour, minute) {
        (Some(hour), Some(minute)) => AlarmTime::from_parts(&hour, &minute),
        (hour, minute) => Err(ValidationError::MalformedTime(format!(
            "{}:{}",
            hour.unwrap_or_default(),
            minute.unwrap_or_default()
        ))
        .into()),
    }
}
