//! Shared application state for axum handlers.

use std::sync::Arc;

use alarmhub_app::ports::{AlarmRepository, CredentialsRepository, EventPublisher};
use alarmhub_app::services::alarm_service::AlarmService;
use alarmhub_app::services::credentials_service::CredentialsService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types and the event publisher to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<AR, CR, EP> {
    /// Alarm time service.
    pub alarm_service: Arc<AlarmService<AR, EP>>,
    /// Wi-Fi credentials service.
    pub credentials_service: Arc<CredentialsService<CR, EP>>,
}

impl<AR, CR, EP> Clone for AppState<AR, CR, EP> {
    fn clone(&self) -> Self {
        Self {
            alarm_service: Arc::clone(&self.alarm_service),
            credentials_service: Arc::clone(&self.credentials_service),
        }
    }
}

impl<AR, CR, EP> AppState<AR, CR, EP>
where
    AR: AlarmRepository + Send + Sync + 'static,
    CR: CredentialsRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        alarm_service: AlarmService<AR, EP>,
        credentials_service: CredentialsService<CR, EP>,
    ) -> Self {
        Self {
            alarm_service: Arc::new(alarm_service),
            credentials_service: Arc::new(credentials_service),
        }
    }
}
