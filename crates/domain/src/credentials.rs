//! Wi-Fi credentials: the station network the device joins after a restart.

use std::fmt;

use crate::error::{AlarmHubError, ValidationError};

/// Longest SSID allowed by 802.11, in bytes.
pub const MAX_SSID_LEN: usize = 32;

/// Longest WPA passphrase (or raw PSK in hex), in bytes.
pub const MAX_PASSWORD_LEN: usize = 64;

/// Network name and passphrase.
///
/// An empty password is allowed and denotes an open network.
#[derive(Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
}

impl WifiCredentials {
    /// Build credentials and check their invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmHubError::Validation`] when the ssid is empty or too
    /// long, or when the password is too long.
    pub fn new(
        ssid: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AlarmHubError> {
        let credentials = Self {
            ssid: ssid.into(),
            password: password.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmHubError::Validation`] when any invariant fails.
    pub fn validate(&self) -> Result<(), AlarmHubError> {
        if self.ssid.is_empty() {
            return Err(ValidationError::EmptySsid.into());
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(ValidationError::SsidTooLong(self.ssid.len()).into());
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooLong(self.password.len()).into());
        }
        Ok(())
    }
}

impl fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}
