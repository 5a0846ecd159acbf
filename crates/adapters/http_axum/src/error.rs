//! HTTP error response mapping for the plain-text endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use alarmhub_domain::error::AlarmHubError;

/// Body returned by `/set_alarm` when the submitted time is rejected.
///
/// The page compares the response text against this exact token.
pub const INVALID: &str = "invalid";

/// Maps [`AlarmHubError`] to a plain-text HTTP response.
#[derive(Debug)]
pub struct ApiError(AlarmHubError);

impl From<AlarmHubError> for ApiError {
    fn from(err: AlarmHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            AlarmHubError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, INVALID).into_response()
            }
            AlarmHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
