//! Validated Persian calendar date and its Gregorian conversions.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::persian::{
    self, check_date, day_of_year, days_in_month, fixed_from_persian, persian_from_fixed,
};

/// A date in the Persian calendar.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PersianDate {
    /// The first supported date, 1/01/01.
    pub const MIN: Self = Self {
        year: persian::MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// The last supported date, 9378/10/10 (Gregorian 9999-12-31).
    pub const MAX: Self = Self {
        year: persian::MAX_YEAR,
        month: 10,
        day: 10,
    };

    /// Creates a new `PersianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any component is out of range, or if the
    /// date lies after [`PersianDate::MAX`].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_date(year, month, day)?;
        let date = Self { year, month, day };
        if date > Self::MAX {
            return Err(CalendarError::DateOutOfRange {
                date: gregorian_from_fixed(date.fixed()),
                min: min_gregorian(),
                max: max_gregorian(),
            });
        }
        Ok(date)
    }

    /// Converts a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] for dates before Persian
    /// 1/01/01 or after 9999-12-31.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let (min, max) = (min_gregorian(), max_gregorian());
        if date < min || date > max {
            return Err(CalendarError::DateOutOfRange { date, min, max });
        }
        let (year, month, day) = persian_from_fixed(i64::from(date.num_days_from_ce()))?;
        Ok(Self { year, month, day })
    }

    /// The equivalent proleptic Gregorian date.
    pub fn to_gregorian(self) -> NaiveDate {
        gregorian_from_fixed(self.fixed())
    }

    /// Rata Die fixed day number of this date.
    pub fn fixed(self) -> i64 {
        fixed_from_persian(self.year, self.month, self.day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of year (1..=366).
    pub fn day_of_year(self) -> u16 {
        day_of_year(self.month, self.day)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        // Month is validated at construction.
        days_in_month(self.year, self.month).unwrap_or(29)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.to_gregorian().weekday()
    }
}

/// Gregorian date of Persian 1/01/01.
pub fn min_gregorian() -> NaiveDate {
    gregorian_from_fixed(fixed_from_persian(persian::MIN_YEAR, 1, 1))
}

/// Last Gregorian date the calendar supports, 9999-12-31.
pub fn max_gregorian() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Converts a Persian date to Gregorian.
///
/// # Errors
///
/// Returns [`CalendarError`] if the Persian date is invalid or outside the
/// supported range.
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<NaiveDate, CalendarError> {
    PersianDate::new(year, month, day).map(PersianDate::to_gregorian)
}

/// Converts a Gregorian date to a Persian `(year, month, day)` triple.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] outside the supported range.
pub fn from_gregorian(date: NaiveDate) -> Result<PersianDate, CalendarError> {
    PersianDate::from_gregorian(date)
}

fn gregorian_from_fixed(fixed: i64) -> NaiveDate {
    // Every fixed day reachable from a validated PersianDate fits chrono's range.
    i32::try_from(fixed)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .unwrap_or(NaiveDate::MAX)
}
