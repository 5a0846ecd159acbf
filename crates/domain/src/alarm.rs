//! Alarm time: a validated `HH:MM` pair and its "unset" sentinel.

use std::fmt;
use std::str::FromStr;

use crate::error::{AlarmHubError, ValidationError};

/// Text shown in place of an alarm time when none is configured.
pub const UNSET: &str = "--:--";

/// Wall-clock time at which the alarm rings.
///
/// Always satisfies `hour <= 23` and `minute <= 59`; the only way to build
/// one is through [`AlarmTime::new`] or one of the parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlarmTime {
    hour: u8,
    minute: u8,
}

impl AlarmTime {
    /// Build an alarm time after checking ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmHubError::Validation`] when `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, AlarmHubError> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or(ValidationError::HourOutOfRange(hour))?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m <= 59)
            .ok_or(ValidationError::MinuteOutOfRange(minute))?;
        Ok(Self { hour, minute })
    }

    /// Build an alarm time from the decimal strings submitted by the page.
    ///
    /// Each part must be one or two ASCII digits (`7` and `07` are both
    /// accepted).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedTime`] for anything that is not
    /// a short decimal number, and the range errors of [`AlarmTime::new`].
    pub fn from_parts(hour: &str, minute: &str) -> Result<Self, AlarmHubError> {
        Self::new(parse_component(hour)?, parse_component(minute)?)
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

fn parse_component(value: &str) -> Result<u32, ValidationError> {
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::MalformedTime(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| ValidationError::MalformedTime(value.to_string()))
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for AlarmTime {
    type Err = AlarmHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| ValidationError::MalformedTime(s.to_string()))?;
        Self::from_parts(hour, minute)
    }
}

/// Renders an optional alarm as `HH:MM`, or [`UNSET`] when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmDisplay(pub Option<AlarmTime>);

impl From<Option<AlarmTime>> for AlarmDisplay {
    fn from(value: Option<AlarmTime>) -> Self {
        Self(value)
    }
}

impl fmt::Display for AlarmDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(time) => time.fmt(f),
            None => f.write_str(UNSET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_alarm_when_in_range() {
        let alarm = AlarmTime::new(23, 59).unwrap();
        assert_eq!(alarm.hour(), 23);
        assert_eq!(alarm.minute(), 59);
    }

    #[test]
    fn should_reject_hour_when_above_23() {
        let result = AlarmTime::new(24, 0);
        assert!(matches!(
            result,
            Err(AlarmHubError::Validation(ValidationError::HourOutOfRange(24)))
        ));
    }

    #[test]
    fn should_reject_minute_when_above_59() {
        let result = AlarmTime::new(0, 60);
        assert!(matches!(
            result,
            Err(AlarmHubError::Validation(ValidationError::MinuteOutOfRange(
                60
            )))
        ));
    }

    #[test]
    fn should_reject_huge_hour_without_truncating() {
        let result = AlarmTime::new(256 + 7, 0);
        assert!(matches!(
            result,
            Err(AlarmHubError::Validation(ValidationError::HourOutOfRange(
                263
            )))
        ));
    }

    #[test]
    fn should_zero_pad_when_displayed() {
        let alarm = AlarmTime::new(7, 5).unwrap();
        assert_eq!(alarm.to_string(), "07:05");
    }

    #[test]
    fn should_accept_single_and_double_digit_parts() {
        assert_eq!(
            AlarmTime::from_parts("7", "30").unwrap(),
            AlarmTime::from_parts("07", "30").unwrap()
        );
    }

    #[test]
    fn should_reject_parts_when_not_decimal() {
        for (hour, minute) in [("", "00"), ("ab", "00"), ("07", "-1"), (" 7", "00"), ("007", "00")] {
            let result = AlarmTime::from_parts(hour, minute);
            assert!(
                matches!(
                    result,
                    Err(AlarmHubError::Validation(ValidationError::MalformedTime(_)))
                ),
                "{hour:?}:{minute:?} should be malformed"
            );
        }
    }

    #[test]
    fn should_parse_hh_mm() {
        let alarm: AlarmTime = "13:05".parse().unwrap();
        assert_eq!(alarm, AlarmTime::new(13, 5).unwrap());
    }

    #[test]
    fn should_not_parse_the_unset_sentinel() {
        assert!(UNSET.parse::<AlarmTime>().is_err());
    }

    #[test]
    fn should_not_parse_without_separator() {
        assert!("1305".parse::<AlarmTime>().is_err());
    }

    #[test]
    fn should_display_sentinel_when_unset() {
        assert_eq!(AlarmDisplay(None).to_string(), "--:--");
    }

    #[test]
    fn should_display_time_when_set() {
        let display = AlarmDisplay::from(Some(AlarmTime::new(0, 0).unwrap()));
        assert_eq!(display.to_string(), "00:00");
    }
}
