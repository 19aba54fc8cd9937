//! Persian year-month value encoded as `year * 100 + month`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shamsi_calendar::{
    MAX_YEAR, MIN_YEAR, PersianCulture, PersianDate, check_month, check_year, days_in_month,
    is_leap_year,
};

use crate::error::DateError;
use crate::format::{normalize_digits, year_month};
use crate::range::MonthRange;

/// A Persian calendar month of a specific year.
///
/// The value is stored in its canonical encoding `year * 100 + month`, so
/// ordering and equality follow the encoded integer. The default value is
/// [`YearMonth::MIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearMonthRepr", into = "YearMonthRepr")]
pub struct YearMonth {
    value: i32,
}

impl YearMonth {
    /// 1/01, the first supported month.
    pub const MIN: Self = Self { value: 101 };

    /// 9378/12, the last supported month.
    pub const MAX: Self = Self { value: 937812 };

    /// Creates a new `YearMonth` from a year and month.
    ///
    /// # Errors
    ///
    /// Returns a range error if `year` is outside 1..=9378 or `month` is
    /// outside 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, DateError> {
        let year = check_year(i64::from(year))?;
        let month = check_month(i64::from(month))?;
        Ok(Self {
            value: year * 100 + i32::from(month),
        })
    }

    /// Decodes an encoded `year * 100 + month` value.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::ValueOutOfRange`] if `value` is outside
    /// 101..=937812, or a range error if the decoded month is invalid.
    pub fn from_value(value: i32) -> Result<Self, DateError> {
        if !(Self::MIN.value..=Self::MAX.value).contains(&value) {
            return Err(DateError::ValueOutOfRange {
                value: i64::from(value),
            });
        }
        Self::new(value / 100, check_month(i64::from(value % 100))?)
    }

    /// The month containing a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns a range error if the date is outside the supported range.
    pub fn from_date(date: NaiveDate) -> Result<Self, DateError> {
        let persian = PersianDate::from_gregorian(date)?;
        Self::new(persian.year(), persian.month())
    }

    /// Returns the encoded `year * 100 + month` value.
    pub fn value(self) -> i32 {
        self.value
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.value / 100
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        (self.value % 100) as u8
    }

    /// Returns the Persian name of the month.
    pub fn month_name(self) -> &'static str {
        PersianCulture::get().month_name(self.month())
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year(), self.month()).unwrap_or(29)
    }

    /// Returns `true` for the last month of a leap year.
    pub fn is_leap_month(self) -> bool {
        self.month() == 12 && is_leap_year(self.year())
    }

    /// Gregorian date of the first day of the month.
    ///
    /// # Errors
    ///
    /// Returns a range error for months after the last supported date.
    pub fn start_date(self) -> Result<NaiveDate, DateError> {
        Ok(PersianDate::new(self.year(), self.month(), 1)?.to_gregorian())
    }

    /// Gregorian date of the last day of the month.
    ///
    /// # Errors
    ///
    /// Returns a range error for months whose last day is after the last
    /// supported date.
    pub fn end_date(self) -> Result<NaiveDate, DateError> {
        Ok(PersianDate::new(self.year(), self.month(), self.days_in_month())?.to_gregorian())
    }

    /// Months since 1/01, used for arithmetic.
    pub(crate) fn ordinal(self) -> i64 {
        i64::from(self.year() - 1) * 12 + i64::from(self.month()) - 1
    }

    /// Adds `n` months, carrying into the year in either direction.
    ///
    /// # Errors
    ///
    /// Returns a range error if the result is before 1/01 or after 9378/12.
    pub fn add_months(self, n: i32) -> Result<Self, DateError> {
        let shifted = i64::from(self.month()) - 1 + i64::from(n);
        let year = i64::from(self.year()) + shifted.div_euclid(12);
        let month = shifted.rem_euclid(12) + 1;
        let year = check_year(year)?;
        Self::new(year, month as u8)
    }

    /// Adds `n` years, keeping the month.
    ///
    /// # Errors
    ///
    /// Returns a range error if the resulting year is outside 1..=9378.
    pub fn add_years(self, n: i32) -> Result<Self, DateError> {
        let year = check_year(i64::from(self.year()) + i64::from(n))?;
        Self::new(year, self.month())
    }

    /// The following month.
    ///
    /// # Errors
    ///
    /// Returns a range error when called on [`YearMonth::MAX`].
    pub fn next_month(self) -> Result<Self, DateError> {
        self.add_months(1)
    }

    /// The preceding month.
    ///
    /// # Errors
    ///
    /// Returns a range error when called on [`YearMonth::MIN`].
    pub fn previous_month(self) -> Result<Self, DateError> {
        self.add_months(-1)
    }

    /// The same month of the following year.
    ///
    /// # Errors
    ///
    /// Returns a range error in the last supported year.
    pub fn next_year(self) -> Result<Self, DateError> {
        self.add_months(12)
    }

    /// The same month of the preceding year.
    ///
    /// # Errors
    ///
    /// Returns a range error in the first supported year.
    pub fn previous_year(self) -> Result<Self, DateError> {
        self.add_months(-12)
    }

    /// Farvardin of the same year.
    pub fn year_first_month(self) -> Self {
        Self {
            value: self.year() * 100 + 1,
        }
    }

    /// Esfand of the same year.
    pub fn year_last_month(self) -> Self {
        Self {
            value: self.year() * 100 + 12,
        }
    }

    /// Exactly `count` consecutive months starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::ArithmeticOutOfRange`] if the last month would
    /// pass [`YearMonth::MAX`].
    pub fn range(start: Self, count: usize) -> Result<MonthRange, DateError> {
        let available = (Self::MAX.ordinal() - start.ordinal() + 1) as usize;
        if count > available {
            return Err(DateError::ArithmeticOutOfRange {
                operation: "month range",
            });
        }
        Ok(MonthRange::new(start, count))
    }

    /// Months from `start` to `end` inclusive; empty when `start > end`.
    pub fn range_inclusive(start: Self, end: Self) -> MonthRange {
        let len = if start > end {
            0
        } else {
            (end.ordinal() - start.ordinal() + 1) as usize
        };
        MonthRange::new(start, len)
    }

    /// Renders the month with a `y`/`m` run-length pattern.
    ///
    /// `y` or `yy` print the last two digits of the year padded to the run
    /// length, three or more `y` print the full year padded to the run
    /// length. `m` and `mm` print the month number padded likewise, three or
    /// more `m` print the month name. Matching is case-insensitive and every
    /// other character is copied as is.
    pub fn format(self, pattern: &str) -> String {
        year_month::render(self.year(), self.month(), pattern)
    }

    /// Parses an encoded value (`"140201"`) or a year followed by a
    /// two-digit month, optionally separated by `/`, `\` or a space
    /// (`"1402/01"`).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if the text matches neither form, or a
    /// range error if it decodes to an unsupported month.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let normalized = normalize_digits(text.trim());
        let input = normalized.as_str();
        if input.is_empty() {
            return Err(DateError::parse(text, "empty input"));
        }
        if input.bytes().all(|b| b.is_ascii_digit()) {
            let value = input
                .parse::<i32>()
                .map_err(|_| DateError::parse(text, "encoded value is too large"))?;
            return Self::from_value(value);
        }

        let chars: Vec<char> = input.chars().collect();
        if !(3..=7).contains(&chars.len()) {
            return Err(DateError::parse(text, "expected 3 to 7 characters"));
        }
        let (year_part, month_part) = chars.split_at(chars.len() - 2);
        let year_part = match year_part.last() {
            Some('/' | '\\' | ' ') => &year_part[..year_part.len() - 1],
            _ => year_part,
        };
        let year = parse_digits(year_part).ok_or_else(|| DateError::parse(text, "invalid year"))?;
        let month =
            parse_digits(month_part).ok_or_else(|| DateError::parse(text, "invalid month"))?;
        let month = u8::try_from(month).map_err(|_| DateError::parse(text, "invalid month"))?;
        Self::new(year, month)
    }

    /// Like [`parse`](Self::parse), but returns `None` on failure.
    ///
    /// Use `try_parse(text).unwrap_or_default()` to fall back to
    /// [`YearMonth::MIN`].
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

fn parse_digits(chars: &[char]) -> Option<i32> {
    if chars.is_empty() || !chars.iter().all(char::is_ascii_digit) {
        return None;
    }
    chars.iter().collect::<String>().parse().ok()
}

impl Default for YearMonth {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("yyyy/mm"))
    }
}

impl FromStr for YearMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i32> for YearMonth {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<NaiveDate> for YearMonth {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(date)
    }
}

impl From<YearMonth> for i32 {
    fn from(ym: YearMonth) -> Self {
        ym.value
    }
}

impl From<YearMonth> for i64 {
    fn from(ym: YearMonth) -> Self {
        i64::from(ym.value)
    }
}

impl From<YearMonth> for f64 {
    fn from(ym: YearMonth) -> Self {
        f64::from(ym.value)
    }
}

impl TryFrom<YearMonth> for i16 {
    type Error = DateError;

    fn try_from(ym: YearMonth) -> Result<Self, Self::Error> {
        i16::try_from(ym.value).map_err(|_| DateError::InvalidConversion {
            target: "i16",
            value: i64::from(ym.value),
        })
    }
}

impl TryFrom<YearMonth> for u16 {
    type Error = DateError;

    fn try_from(ym: YearMonth) -> Result<Self, Self::Error> {
        u16::try_from(ym.value).map_err(|_| DateError::InvalidConversion {
            target: "u16",
            value: i64::from(ym.value),
        })
    }
}

/// Serialized form: a single named integer field.
#[derive(Serialize, Deserialize)]
struct YearMonthRepr {
    value: i32,
}

impl From<YearMonth> for YearMonthRepr {
    fn from(ym: YearMonth) -> Self {
        Self { value: ym.value }
    }
}

impl TryFrom<YearMonthRepr> for YearMonth {
    type Error = DateError;

    fn try_from(repr: YearMonthRepr) -> Result<Self, Self::Error> {
        Self::from_value(repr.value)
    }
}

const _: () = assert!(YearMonth::MIN.value == MIN_YEAR * 100 + 1);
const _: () = assert!(YearMonth::MAX.value == MAX_YEAR * 100 + 12);
