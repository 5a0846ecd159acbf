//! Event: an immutable record of a settings change.

use crate::alarm::AlarmTime;
use crate::time::{Timestamp, now};

/// What changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A new alarm time was stored.
    AlarmSet(AlarmTime),
    /// New Wi-Fi credentials were stored.
    CredentialsSaved { ssid: String },
    /// Stored Wi-Fi credentials were erased.
    CredentialsCleared,
}

impl EventKind {
    /// Whether the device has to restart to apply this change.
    ///
    /// The network stack only reads credentials at boot.
    #[must_use]
    pub fn requires_restart(&self) -> bool {
        matches!(self, Self::CredentialsSaved { .. } | Self::CredentialsCleared)
    }
}

/// A settings change and when it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            timestamp: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_restart_for_credential_changes() {
        assert!(
            EventKind::CredentialsSaved {
                ssid: "home".to_string()
            }
            .requires_restart()
        );
        assert!(EventKind::CredentialsCleared.requires_restart());
    }

    #[test]
    fn should_not_require_restart_for_alarm_changes() {
        let kind = EventKind::AlarmSet(AlarmTime::new(6, 45).unwrap());
        assert!(!kind.requires_restart());
    }

    #[test]
    fn should_stamp_event_with_current_time() {
        let before = now();
        let event = Event::new(EventKind::CredentialsCleared);
        assert!(event.timestamp >= before);
    }
}
