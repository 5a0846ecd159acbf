//! Storage port: repository traits for persisted settings.
//!
//! Each setting is a singleton: there is at most one alarm and one set of
//! credentials, so the repositories have no identifiers.

use std::future::Future;

use alarmhub_domain::alarm::AlarmTime;
use alarmhub_domain::credentials::WifiCredentials;
use alarmhub_domain::error::AlarmHubError;

/// Repository for the configured [`AlarmTime`].
pub trait AlarmRepository {
    /// Load the stored alarm, `None` when it was never set.
    fn get(&self) -> impl Future<Output = Result<Option<AlarmTime>, AlarmHubError>> + Send;

    /// Store the alarm, replacing any previous one.
    fn save(
        &self,
        alarm: AlarmTime,
    ) -> impl Future<Output = Result<AlarmTime, AlarmHubError>> + Send;
}

/// Repository for the stored [`WifiCredentials`].
pub trait CredentialsRepository {
    /// Load the stored credentials, `None` when absent.
    fn get(&self) -> impl Future<Output = Result<Option<WifiCredentials>, AlarmHubError>> + Send;

    /// Store credentials, replacing any previous ones.
    fn save(
        &self,
        credentials: WifiCredentials,
    ) -> impl Future<Output = Result<WifiCredentials, AlarmHubError>> + Send;

    /// Erase the stored credentials. Erasing nothing is not an error.
    fn clear(&self) -> impl Future<Output = Result<(), AlarmHubError>> + Send;
}
