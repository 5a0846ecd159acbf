//! Alarm service: use-cases for reading and setting the alarm time.

use alarmhub_domain::alarm::AlarmTime;
use alarmhub_domain::error::AlarmHubError;
use alarmhub_domain::event::{Event, EventKind};

use crate::ports::{AlarmRepository, EventPublisher};

/// Application service for the alarm setting.
pub struct AlarmService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: AlarmRepository, P: EventPublisher> AlarmService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// The stored alarm, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn current_alarm(&self) -> Result<Option<AlarmTime>, AlarmHubError> {
        self.repo.get().await
    }

    /// Store a new alarm time and announce it.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository, or a publish error.
    #[tracing::instrument(skip(self, alarm), fields(alarm = %alarm))]
    pub async fn set_alarm(&self, alarm: AlarmTime) -> Result<AlarmTime, AlarmHubError> {
        let saved = self.repo.save(alarm).await?;
        self.publisher
            .publish(Event::new(EventKind::AlarmSet(saved)))
            .await?;
        tracing::info!("alarm updated");
        Ok(saved)
    }
}
