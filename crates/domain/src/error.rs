//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AlarmHubError`] via `#[from]`.

/// Top-level error shared by the domain, application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum AlarmHubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Hour outside `0..=23`.
    #[error("hour {0} is out of range (0-23)")]
    HourOutOfRange(u32),

    /// Minute outside `0..=59`.
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u32),

    /// The input could not be read as a time.
    #[error("malformed time {0:?}")]
    MalformedTime(String),

    /// The SSID is empty.
    #[error("ssid must not be empty")]
    EmptySsid,

    /// The SSID exceeds the 802.11 limit.
    #[error("ssid is {0} bytes long, at most 32 are allowed")]
    SsidTooLong(usize),

    /// The passphrase exceeds the WPA limit.
    #[error("password is {0} bytes long, at most 64 are allowed")]
    PasswordTooLong(usize),
}
