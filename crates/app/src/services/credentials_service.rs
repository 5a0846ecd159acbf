//! Credentials service: use-cases for provisioning Wi-Fi credentials.

use alarmhub_domain::credentials::WifiCredentials;
use alarmhub_domain::error::AlarmHubError;
use alarmhub_domain::event::{Event, EventKind};

use crate::ports::{CredentialsRepository, EventPublisher};

/// Application service for the stored Wi-Fi credentials.
///
/// Saving or clearing publishes an event that requires a restart; see
/// [`crate::restart`].
pub struct CredentialsService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: CredentialsRepository, P: EventPublisher> CredentialsService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// The stored credentials, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn current_credentials(&self) -> Result<Option<WifiCredentials>, AlarmHubError> {
        self.repo.get().await
    }

    /// Validate and store new credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmHubError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, credentials), fields(ssid = %credentials.ssid))]
    pub async fn configure(
        &self,
        credentials: WifiCredentials,
    ) -> Result<WifiCredentials, AlarmHubError> {
        credentials.validate()?;
        let saved = self.repo.save(credentials).await?;
        self.publisher
            .publish(Event::new(EventKind::CredentialsSaved {
                ssid: saved.ssid.clone(),
            }))
            .await?;
        tracing::info!("wifi credentials saved");
        Ok(saved)
    }

    /// Erase the stored credentials.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), AlarmHubError> {
        self.repo.clear().await?;
        self.publisher
            .publish(Event::new(EventKind::CredentialsCleared))
            .await?;
        tracing::info!("wifi credentials cleared");
        Ok(())
    }
}
