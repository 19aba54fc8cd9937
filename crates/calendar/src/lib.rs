//! # shamsi-calendar
//!
//! Persian (Solar Hijri) calendar arithmetic and culture tables.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"fixed_from_persian()"| B["Rata Die"]
//!     B -->|"persian_from_fixed()"| A
//!     B <-->|"num_days_from_ce"| C["chrono::NaiveDate"]
//!     A -->|"PersianDate::new()"| D["PersianDate"]
//!     D -->|".to_gregorian()"| C
//!     E["PersianCulture::get()"] -->|"month_name() / day_name()"| F["&'static str"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use shamsi_calendar::{PersianCulture, PersianDate, is_leap_year};
//!
//! let nowruz = PersianDate::new(1403, 1, 1).unwrap();
//! assert_eq!(nowruz.to_gregorian().to_string(), "2024-03-20");
//! assert!(is_leap_year(1403));
//!
//! let culture = PersianCulture::get();
//! assert_eq!(culture.month_name(1), "فروردین");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `persian` | Leap-year rule, month lengths, fixed-day conversions |
//! | `date` | Validated Persian date and Gregorian conversion |
//! | `culture` | Month/day names, designators, separators |
//! | `error` | Error types |

mod culture;
mod date;
mod error;
mod persian;

pub use culture::PersianCulture;
pub use date::{PersianDate, from_gregorian, max_gregorian, min_gregorian, to_gregorian};
pub use error::CalendarError;
pub use persian::{
    MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR, check_date, check_month, check_year, days_in_month,
    days_in_year, fixed_from_persian, is_leap_year, month_day_from_ordinal, persian_from_fixed,
};
