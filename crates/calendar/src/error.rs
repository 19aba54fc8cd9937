//! Error types for the shamsi-calendar crate.

/// Error type for all fallible operations in the shamsi-calendar crate.
///
/// Every variant is a range failure: a year, month or day outside the
/// Persian calendar, or a Gregorian date the calendar cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a Persian year is outside 1..=9378.
    #[error("invalid year: {year} (must be 1..=9378)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i64,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a day number exceeds the length of the month.
    #[error("invalid day: {day} for {year}/{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// Number of days in that month.
        max_day: u8,
    },

    /// Returned when a day-of-year number exceeds the year's length.
    #[error("invalid day of year: {doy} for {year} (max {max})")]
    InvalidDayOfYear {
        /// The year.
        year: i32,
        /// The rejected day of year.
        doy: u16,
        /// Number of days in that year.
        max: u16,
    },

    /// Returned when a fixed day number falls outside the supported range.
    #[error("fixed day {fixed} is outside the supported range {min}..={max}")]
    FixedOutOfRange {
        /// The rejected fixed day number.
        fixed: i64,
        /// Fixed day number of 1/01/01.
        min: i64,
        /// Fixed day number of 9378/10/10.
        max: i64,
    },

    /// Returned when a Gregorian date falls outside the supported range.
    #[error("date {date} is outside the supported range {min}..={max}")]
    DateOutOfRange {
        /// The rejected Gregorian date.
        date: chrono::NaiveDate,
        /// First supported Gregorian date.
        min: chrono::NaiveDate,
        /// Last supported Gregorian date.
        max: chrono::NaiveDate,
    },
}
