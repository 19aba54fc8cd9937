//! Leap-year rule and day-count arithmetic for the Persian calendar.
//!
//! The day counts come from the 33-year arithmetic rule with its correction
//! table in [`calendrical_calculations::persian`]. Dates are converted to
//! and from Rata Die fixed day numbers, where day 1 is 0001-01-01 in the
//! proleptic Gregorian calendar (the same numbering as
//! [`chrono::Datelike::num_days_from_ce`]).

use calendrical_calculations::persian;
use calendrical_calculations::rata_die::RataDie;

use crate::error::CalendarError;

/// First supported Persian year.
pub const MIN_YEAR: i32 = 1;

/// Last supported Persian year (9999-12-31 falls in 9378).
pub const MAX_YEAR: i32 = 9378;

/// First month of the year.
pub const MIN_MONTH: u8 = 1;

/// Last month of the year.
pub const MAX_MONTH: u8 = 12;

/// Day of year on which each month starts (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 63, 94, 125, 156, 187, 217, 247, 277, 307, 337];

/// Returns `true` if `year` has 366 days.
///
/// Uses the 33-year arithmetic rule, adjusted by a correction table that
/// keeps it in step with the astronomical calendar through 3000 AP.
pub fn is_leap_year(year: i32) -> bool {
    persian::is_leap_year(year)
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Validates that `year` is in `MIN_YEAR..=MAX_YEAR`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] otherwise.
pub fn check_year(year: i64) -> Result<i32, CalendarError> {
    if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        Ok(year as i32)
    } else {
        Err(CalendarError::InvalidYear { year })
    }
}

/// Validates that `month` is in `1..=12`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] otherwise.
pub fn check_month(month: i64) -> Result<u8, CalendarError> {
    if (i64::from(MIN_MONTH)..=i64::from(MAX_MONTH)).contains(&month) {
        Ok(month as u8)
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Number of days in `month` of `year`.
///
/// Months 1-6 have 31 days, 7-11 have 30, and the last month has 30 days
/// in a leap year and 29 otherwise.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if is_leap_year(year) => Ok(30),
        12 => Ok(29),
        _ => Err(CalendarError::InvalidMonth {
            month: i64::from(month),
        }),
    }
}

/// Validates a full `(year, month, day)` triple.
///
/// # Errors
///
/// Returns the first of [`CalendarError::InvalidYear`],
/// [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`] that
/// applies.
pub fn check_date(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    check_year(i64::from(year))?;
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(())
}

/// Fixed day number of a Persian date.
///
/// The inputs are not validated; pass them through [`check_date`] first
/// when they come from outside the crate.
pub fn fixed_from_persian(year: i32, month: u8, day: u8) -> i64 {
    persian::fixed_from_fast_persian(year, month, day).to_i64_date()
}

/// Fixed day number of the first supported date, 1/01/01.
pub(crate) fn min_fixed() -> i64 {
    fixed_from_persian(MIN_YEAR, 1, 1)
}

/// Fixed day number of the last supported date, 9378/10/10.
pub(crate) fn max_fixed() -> i64 {
    fixed_from_persian(MAX_YEAR, 10, 10)
}

/// Persian `(year, month, day)` of a fixed day number.
///
/// # Errors
///
/// Returns [`CalendarError::FixedOutOfRange`] for day numbers outside
/// 1/01/01..=9378/10/10.
pub fn persian_from_fixed(fixed: i64) -> Result<(i32, u8, u8), CalendarError> {
    let (min, max) = (min_fixed(), max_fixed());
    if !(min..=max).contains(&fixed) {
        return Err(CalendarError::FixedOutOfRange { fixed, min, max });
    }
    persian::fast_persian_from_fixed(RataDie::new(fixed))
        .map_err(|_| CalendarError::FixedOutOfRange { fixed, min, max })
}

/// Converts a 1-based day of year into `(month, day)`.
///
/// `doy` is assumed to be in 1..=366.
pub(crate) fn month_day_from_doy(doy: u16) -> (u8, u8) {
    let month = if doy <= 186 {
        doy.div_ceil(31)
    } else {
        (doy - 6).div_ceil(30)
    } as u8;
    let day = (doy - MONTH_START_DOY[month as usize] + 1) as u8;
    (month, day)
}

/// Converts a day of `year` (1..=365 or 366) into `(month, day)`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for an unsupported year, or
/// [`CalendarError::InvalidDayOfYear`] if `doy` exceeds the year's length.
pub fn month_day_from_ordinal(year: i32, doy: u16) -> Result<(u8, u8), CalendarError> {
    check_year(i64::from(year))?;
    let max = days_in_year(year);
    if !(1..=max).contains(&doy) {
        return Err(CalendarError::InvalidDayOfYear { year, doy, max });
    }
    Ok(month_day_from_doy(doy))
}

/// Day of year (1..=366) of `month`/`day`, for a validated month.
pub(crate) fn day_of_year(month: u8, day: u8) -> u16 {
    MONTH_START_DOY[month as usize] + u16::from(day) - 1
}
