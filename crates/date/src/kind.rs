//! Kind tag carried alongside an instant.

use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

/// Whether an instant is local time, UTC, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateTimeKind {
    /// No time zone information.
    #[default]
    Unspecified,
    /// Coordinated Universal Time.
    Utc,
    /// The system's local time zone.
    Local,
}

impl DateTimeKind {
    /// Two-bit code used in the binary encoding.
    pub(crate) fn code(self) -> i64 {
        match self {
            DateTimeKind::Unspecified => 0,
            DateTimeKind::Utc => 1,
            DateTimeKind::Local => 2,
        }
    }

    pub(crate) fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(DateTimeKind::Unspecified),
            1 => Some(DateTimeKind::Utc),
            2 => Some(DateTimeKind::Local),
            _ => None,
        }
    }
}

impl fmt::Display for DateTimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateTimeKind::Unspecified => "unspecified",
            DateTimeKind::Utc => "utc",
            DateTimeKind::Local => "local",
        })
    }
}

impl FromStr for DateTimeKind {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unspecified" => Ok(DateTimeKind::Unspecified),
            "utc" => Ok(DateTimeKind::Utc),
            "local" => Ok(DateTimeKind::Local),
            other => Err(DateError::parse(other, "unknown date-time kind")),
        }
    }
}
