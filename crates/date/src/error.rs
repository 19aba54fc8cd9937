//! Error types for the shamsi-date crate.

use chrono::NaiveDateTime;
use shamsi_calendar::CalendarError;

/// Error type for all fallible operations in the shamsi-date crate.
///
/// Variants fall into three classes: range errors (a value or result
/// outside the supported bounds), format errors (text that matches no
/// recognised grammar, or an unusable pattern) and invalid conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Wraps a range failure reported by the calendar oracle.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when an encoded year-month value is outside 101..=937812.
    #[error("encoded year-month {value} is out of range (must be 101..=937812)")]
    ValueOutOfRange {
        /// The rejected encoded value.
        value: i64,
    },

    /// Returned when a tick count is outside the host range.
    #[error("ticks {ticks} are out of range (must be 0..={max})")]
    TicksOutOfRange {
        /// The rejected tick count.
        ticks: i64,
        /// Largest valid tick count.
        max: i64,
    },

    /// Returned when an instant is outside the supported range.
    #[error("instant {instant} is outside the supported range")]
    InstantOutOfRange {
        /// The rejected instant.
        instant: NaiveDateTime,
    },

    /// Returned when a time-of-day component is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        /// Hour component.
        hour: u32,
        /// Minute component.
        minute: u32,
        /// Second component.
        second: u32,
        /// Millisecond component.
        millisecond: u32,
    },

    /// Returned when an arithmetic result leaves the supported range.
    #[error("{operation} overflowed the supported range")]
    ArithmeticOutOfRange {
        /// The operation that overflowed.
        operation: &'static str,
    },

    /// Returned when text cannot be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Returned when a format pattern is malformed or unknown.
    #[error("invalid format pattern {pattern:?}: {reason}")]
    InvalidFormat {
        /// The rejected pattern.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// Returned when a value cannot be represented in the target type.
    #[error("cannot convert {value} to {target}")]
    InvalidConversion {
        /// Name of the target type.
        target: &'static str,
        /// The value that did not fit.
        value: i64,
    },
}

impl DateError {
    /// Returns `true` for errors caused by a value outside its bounds.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            DateError::Calendar(_)
                | DateError::ValueOutOfRange { .. }
                | DateError::TicksOutOfRange { .. }
                | DateError::InstantOutOfRange { .. }
                | DateError::InvalidTime { .. }
                | DateError::ArithmeticOutOfRange { .. }
        )
    }

    /// Returns `true` for errors caused by unparseable text or a bad pattern.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            DateError::Parse { .. } | DateError::InvalidFormat { .. }
        )
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        DateError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_format(pattern: &str, reason: impl Into<String>) -> Self {
        DateError::InvalidFormat {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_value_out_of_range() {
        let err = DateError::ValueOutOfRange { value: 937813 };
        assert_eq!(
            err.to_string(),
            "encoded year-month 937813 is out of range (must be 101..=937812)"
        );
        assert!(err.is_range_error());
        assert!(!err.is_format_error());
    }

    #[test]
    fn error_parse() {
        let err = DateError::parse("abc", "no date found");
        assert_eq!(err.to_string(), "cannot parse \"abc\": no date found");
        assert!(err.is_format_error());
    }

    #[test]
    fn error_invalid_time() {
        let err = DateError::InvalidTime {
            hour: 24,
            minute: 0,
            second: 0,
            millisecond: 0,
        };
        assert_eq!(err.to_string(), "invalid time: 24:00:00.000");
    }

    #[test]
    fn calendar_error_is_transparent() {
        let err = DateError::from(CalendarError::InvalidMonth { month: 13 });
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
        assert!(err.is_range_error());
    }

    #[test]
    fn conversion_is_neither_range_nor_format() {
        let err = DateError::InvalidConversion {
            target: "i16",
            value: 937812,
        };
        assert_eq!(err.to_string(), "cannot convert 937812 to i16");
        assert!(!err.is_range_error());
        assert!(!err.is_format_error());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
    }
}
