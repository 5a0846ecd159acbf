//! Plain-text endpoints called by the pages' inline scripts.

#[allow(clippy::missing_errors_doc)]
pub mod alarm;

use axum::Router;
use axum::routing::get;

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};

use crate::state::AppState;

/// Build the alarm endpoint sub-router.
///
/// Mounted at the root: the paths are part of the page contract.
pub fn routes<AR, CR, EP>() -> Router<AppState<AR, CR, EP>>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/get_alarm", get(alarm::get::<AR, CR, EP>))
        .route("/set_alarm", get(alarm::set::<AR, CR, EP>))
}
