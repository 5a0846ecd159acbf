//! Failures of the settings database.

use alarmhub_domain::error::AlarmHubError;

/// What went wrong while reading or writing settings.
///
/// The message names the failing step; the sqlx cause stays reachable
/// through [`std::error::Error::source`] for logging.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Opening the file or running a settings query failed.
    #[error("settings query failed")]
    Query(#[from] sqlx::Error),

    /// The settings schema could not be applied.
    #[error("settings schema could not be applied")]
    Schema(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for AlarmHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
