//! Clock access for event stamps and `updated_at` columns.

use chrono::{DateTime, SecondsFormat, Utc};

/// When something happened, always in UTC.
pub type Timestamp = DateTime<Utc>;

#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Current time as stored in `updated_at`: RFC 3339, whole seconds, `Z`.
#[must_use]
pub fn now_rfc3339() -> String {
    now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
