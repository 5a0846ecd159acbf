//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the plain-text alarm endpoints and the pages at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AR, CR, EP>(state: AppState<AR, CR, EP>) -> Router
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .merge(crate::pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
