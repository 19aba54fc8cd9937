//! # shamsi-date
//!
//! Persian (Solar Hijri) year-month and date-time value types, with the
//! format and parse engine behind them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year * 100 + month"] -->|"YearMonth::from_value()"| B["YearMonth"]
//!     B -->|".format(\"yyyy/mm\")"| C["String"]
//!     C -->|"YearMonth::parse()"| B
//!     D["chrono::NaiveDateTime"] -->|"From"| E["PersianDateTime"]
//!     E -->|".format(\"F\")"| C
//!     C -->|"parse() / parse_exact()"| E
//!     E -->|".to_binary()"| F["i64"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use shamsi_date::{PersianDateTime, YearMonth};
//!
//! let month = YearMonth::new(1400, 1)?;
//! assert_eq!(month.format("yyyy/mm"), "1400/01");
//! assert_eq!(month.add_months(12)?, YearMonth::new(1401, 1)?);
//!
//! let dt = PersianDateTime::with_time(1403, 6, 31, 8, 30, 0)?;
//! assert_eq!(dt.add_months(1)?.format("d")?, "1403/07/30");
//! let back = PersianDateTime::parse_exact(&dt.format("F")?, "F")?;
//! assert_eq!(back, dt);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year_month` | `YearMonth` value, arithmetic, run-length formatting |
//! | `range` | Lazy month sequences |
//! | `datetime` | `PersianDateTime` value, arithmetic, conversions |
//! | `kind` | `DateTimeKind` tag |
//! | `format` | Named codes, custom patterns, exact and lenient parsers |
//! | `ticks` | 100 ns tick arithmetic |
//! | `error` | Error types |

mod datetime;
mod error;
mod format;
mod kind;
mod range;
mod ticks;
mod year_month;

pub use datetime::PersianDateTime;
pub use error::DateError;
pub use format::{normalize_digits, normalize_input};
pub use kind::DateTimeKind;
pub use range::MonthRange;
pub use ticks::{
    MAX_TICKS, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND,
};
pub use year_month::YearMonth;

pub use shamsi_calendar::{MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR, PersianCulture};
