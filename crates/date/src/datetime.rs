//! Persian calendar date and time backed by a Gregorian instant.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;
use std::str::FromStr;

use chrono::offset::LocalResult;
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Timelike, Utc, Weekday,
};
use serde::{Deserialize, Serialize};
use shamsi_calendar::{PersianCulture, PersianDate, check_year, days_in_month, is_leap_year};
use tracing::debug;

use crate::error::DateError;
use crate::format::{self, Fields};
use crate::kind::DateTimeKind;
use crate::ticks::{
    MAX_TICKS, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND, fraction_ticks, naive_from_ticks, ticks_from_naive,
};
use crate::year_month::YearMonth;

/// Gregorian instant of Persian 1/01/01 00:00.
const MIN_INSTANT: NaiveDateTime = match NaiveDate::from_ymd_opt(622, 3, 21) {
    Some(date) => NaiveDateTime::new(date, NaiveTime::MIN),
    None => NaiveDateTime::MIN,
};

/// 9999-12-31T23:59:59.9999999, Persian 9378/10/10.
const MAX_INSTANT: NaiveDateTime = match (
    NaiveDate::from_ymd_opt(9999, 12, 31),
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_900),
) {
    (Some(date), Some(time)) => NaiveDateTime::new(date, time),
    _ => NaiveDateTime::MAX,
};

/// A date and time in the Persian calendar.
///
/// The value stores a Gregorian [`NaiveDateTime`] with 100 ns precision and
/// a [`DateTimeKind`] tag. Persian fields are computed from the instant on
/// each access. Equality, ordering and hashing look at the instant only,
/// so two values that differ only in kind are equal.
///
/// The instant always lies in [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
/// Validating constructors reject anything outside that range, while the
/// `From` conversions and linear arithmetic clamp into it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "PersianDateTimeRepr", into = "PersianDateTimeRepr")]
pub struct PersianDateTime {
    instant: NaiveDateTime,
    kind: DateTimeKind,
}

impl PersianDateTime {
    /// 1/01/01 00:00, the first supported instant.
    pub const MIN: Self = Self {
        instant: MIN_INSTANT,
        kind: DateTimeKind::Unspecified,
    };

    /// 9378/10/10 23:59:59.9999999, the last supported instant.
    pub const MAX: Self = Self {
        instant: MAX_INSTANT,
        kind: DateTimeKind::Unspecified,
    };

    /// Midnight at the start of a Persian date.
    ///
    /// # Errors
    ///
    /// Returns a range error if the date is invalid or unsupported.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(year, month, day, 0, 0, 0, 0, DateTimeKind::Unspecified)
    }

    /// A Persian date at a time of day.
    ///
    /// # Errors
    ///
    /// Returns a range error if the date is invalid or unsupported, or
    /// [`DateError::InvalidTime`] for an impossible time.
    pub fn with_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        Self::from_parts(year, month, day, hour, minute, second, 0, DateTimeKind::Unspecified)
    }

    /// Builds a value from every component.
    ///
    /// # Errors
    ///
    /// Returns a range error if the date is invalid or unsupported, or
    /// [`DateError::InvalidTime`] if `hour`, `minute`, `second` or
    /// `millisecond` is out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        year: i32,
        month: u8,
        day: u8,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        kind: DateTimeKind,
    ) -> Result<Self, DateError> {
        let date = PersianDate::new(year, month, day)?;
        let time = (millisecond < 1_000)
            .then(|| NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond))
            .flatten()
            .ok_or(DateError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            })?;
        Ok(Self {
            instant: date.to_gregorian().and_time(time),
            kind,
        })
    }

    /// Builds a value from 100 ns ticks since 0001-01-01T00:00.
    ///
    /// Tick counts before the first supported instant clamp to
    /// [`MIN`](Self::MIN).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::TicksOutOfRange`] outside `0..=MAX_TICKS`.
    pub fn from_ticks(ticks: i64, kind: DateTimeKind) -> Result<Self, DateError> {
        if !(0..=MAX_TICKS).contains(&ticks) {
            return Err(DateError::TicksOutOfRange {
                ticks,
                max: MAX_TICKS,
            });
        }
        let instant = naive_from_ticks(ticks).ok_or(DateError::TicksOutOfRange {
            ticks,
            max: MAX_TICKS,
        })?;
        Ok(Self::from_instant(instant, kind))
    }

    /// Wraps an instant, clamping it into the supported range and
    /// truncating it to whole ticks.
    pub fn from_instant(instant: NaiveDateTime, kind: DateTimeKind) -> Self {
        Self {
            instant: clamp(instant),
            kind,
        }
    }

    /// Midnight at the start of a Gregorian date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_instant(date.and_time(NaiveTime::MIN), DateTimeKind::Unspecified)
    }

    /// The current local time.
    pub fn now() -> Self {
        Self::from(Local::now())
    }

    /// The current time in UTC.
    pub fn utc_now() -> Self {
        Self::from(Utc::now())
    }

    /// Midnight at the start of the current local date.
    pub fn today() -> Self {
        Self::now().date()
    }

    // --- Persian fields ---

    /// The Persian date of this instant.
    pub fn persian_date(&self) -> PersianDate {
        // The instant is kept inside the calendar's range.
        PersianDate::from_gregorian(self.instant.date()).unwrap_or(PersianDate::MIN)
    }

    /// Returns the Persian year.
    pub fn year(&self) -> i32 {
        self.persian_date().year()
    }

    /// Returns the Persian month (1..=12).
    pub fn month(&self) -> u8 {
        self.persian_date().month()
    }

    /// Returns the day of the Persian month (1..=31).
    pub fn day(&self) -> u8 {
        self.persian_date().day()
    }

    /// Returns the day of the Persian year (1..=366).
    pub fn day_of_year(&self) -> u16 {
        self.persian_date().day_of_year()
    }

    /// Returns the day of the week.
    pub fn day_of_week(&self) -> Weekday {
        self.instant.weekday()
    }

    /// Persian name of the weekday.
    pub fn day_of_week_name(&self) -> &'static str {
        PersianCulture::get().day_name(self.day_of_week())
    }

    /// Persian name of the month.
    pub fn month_name(&self) -> &'static str {
        PersianCulture::get().month_name(self.month())
    }

    /// Returns the number of days in the Persian month.
    pub fn days_in_month(&self) -> u8 {
        self.persian_date().days_in_month()
    }

    /// Returns `true` if the Persian year has 366 days.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// The containing Persian month.
    pub fn year_month(&self) -> YearMonth {
        let date = self.persian_date();
        YearMonth::new(date.year(), date.month()).unwrap_or(YearMonth::MIN)
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// Returns the millisecond (0..=999).
    pub fn millisecond(&self) -> u32 {
        self.instant.nanosecond() / 1_000_000
    }

    /// 100 ns ticks since 0001-01-01T00:00.
    pub fn ticks(&self) -> i64 {
        ticks_from_naive(self.instant)
    }

    /// Returns the kind tag.
    pub fn kind(&self) -> DateTimeKind {
        self.kind
    }

    /// The underlying Gregorian instant.
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// The underlying Gregorian instant.
    pub fn to_gregorian(&self) -> NaiveDateTime {
        self.instant
    }

    /// Midnight of the same day, keeping the kind.
    pub fn date(&self) -> Self {
        Self {
            instant: self.instant.date().and_time(NaiveTime::MIN),
            kind: self.kind,
        }
    }

    /// Time elapsed since midnight.
    pub fn time_of_day(&self) -> TimeDelta {
        self.instant.time() - NaiveTime::MIN
    }

    /// Same instant with a different kind.
    pub fn with_kind(&self, kind: DateTimeKind) -> Self {
        Self {
            instant: self.instant,
            kind,
        }
    }

    /// Returns `true` in the first six months of the Persian year.
    ///
    /// This is a calendar rule of thumb rather than a time-zone lookup.
    pub fn is_daylight_saving_time(&self) -> bool {
        self.month() <= 6
    }

    // --- Calendar arithmetic ---

    /// Adds `n` Persian months, keeping the time of day.
    ///
    /// The day is clamped to the length of the target month, so
    /// 1403/06/31 plus one month is 1403/07/30.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::ArithmeticOutOfRange`] if the result leaves the
    /// supported range.
    pub fn add_months(&self, n: i32) -> Result<Self, DateError> {
        self.shift_months(i64::from(n), "add_months")
    }

    /// Adds `n` Persian years, keeping month, day (clamped) and time.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::ArithmeticOutOfRange`] if the result leaves the
    /// supported range.
    pub fn add_years(&self, n: i32) -> Result<Self, DateError> {
        self.shift_months(i64::from(n) * 12, "add_years")
    }

    fn shift_months(&self, n: i64, operation: &'static str) -> Result<Self, DateError> {
        let out_of_range = || DateError::ArithmeticOutOfRange { operation };
        let date = self.persian_date();
        let total = i64::from(date.year()) * 12 + i64::from(date.month()) - 1 + n;
        let year = check_year(total.div_euclid(12)).map_err(|_| out_of_range())?;
        let month = (total.rem_euclid(12) + 1) as u8;
        let day = date
            .day()
            .min(days_in_month(year, month).map_err(|_| out_of_range())?);
        let target = PersianDate::new(year, month, day).map_err(|_| out_of_range())?;
        Ok(Self {
            instant: target.to_gregorian().and_time(self.instant.time()),
            kind: self.kind,
        })
    }

    // --- Linear arithmetic ---

    /// Adds `ticks` (100 ns units).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::ArithmeticOutOfRange`] if the result is outside
    /// the host tick range. Results before the first supported instant
    /// clamp to [`MIN`](Self::MIN).
    pub fn add_ticks(&self, ticks: i64) -> Result<Self, DateError> {
        self.shift_ticks(ticks, "add_ticks")
    }

    /// Adds a fractional number of days, rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn add_days(&self, days: f64) -> Result<Self, DateError> {
        self.shift_scaled(days, TICKS_PER_DAY, "add_days")
    }

    /// Adds a fractional number of hours, rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn add_hours(&self, hours: f64) -> Result<Self, DateError> {
        self.shift_scaled(hours, TICKS_PER_HOUR, "add_hours")
    }

    /// Adds a fractional number of minutes, rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn add_minutes(&self, minutes: f64) -> Result<Self, DateError> {
        self.shift_scaled(minutes, TICKS_PER_MINUTE, "add_minutes")
    }

    /// Adds a fractional number of seconds, rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn add_seconds(&self, seconds: f64) -> Result<Self, DateError> {
        self.shift_scaled(seconds, TICKS_PER_SECOND, "add_seconds")
    }

    /// Adds a fractional number of milliseconds, rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn add_milliseconds(&self, milliseconds: f64) -> Result<Self, DateError> {
        self.shift_scaled(milliseconds, TICKS_PER_MILLISECOND, "add_milliseconds")
    }

    /// Adds a duration, truncated to whole ticks.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn checked_add(&self, delta: TimeDelta) -> Result<Self, DateError> {
        let ticks = delta_ticks(delta).ok_or(DateError::ArithmeticOutOfRange {
            operation: "checked_add",
        })?;
        self.shift_ticks(ticks, "checked_add")
    }

    /// Subtracts a duration, truncated to whole ticks.
    ///
    /// # Errors
    ///
    /// See [`add_ticks`](Self::add_ticks).
    pub fn checked_sub(&self, delta: TimeDelta) -> Result<Self, DateError> {
        let ticks = delta_ticks(delta)
            .and_then(i64::checked_neg)
            .ok_or(DateError::ArithmeticOutOfRange {
                operation: "checked_sub",
            })?;
        self.shift_ticks(ticks, "checked_sub")
    }

    fn shift_scaled(
        &self,
        value: f64,
        scale: i64,
        operation: &'static str,
    ) -> Result<Self, DateError> {
        let ticks = (value * scale as f64).round();
        if !ticks.is_finite() || ticks.abs() > MAX_TICKS as f64 {
            return Err(DateError::ArithmeticOutOfRange { operation });
        }
        self.shift_ticks(ticks as i64, operation)
    }

    fn shift_ticks(&self, delta: i64, operation: &'static str) -> Result<Self, DateError> {
        let ticks = self
            .ticks()
            .checked_add(delta)
            .filter(|t| (0..=MAX_TICKS).contains(t))
            .ok_or(DateError::ArithmeticOutOfRange { operation })?;
        let instant =
            naive_from_ticks(ticks).ok_or(DateError::ArithmeticOutOfRange { operation })?;
        Ok(Self::from_instant(instant, self.kind))
    }

    // --- Time zones ---

    /// Converts to local time.
    ///
    /// `Local` values are returned unchanged. `Utc` and `Unspecified`
    /// values are read as UTC.
    pub fn to_local(&self) -> Self {
        if self.kind == DateTimeKind::Local {
            return *self;
        }
        let local = Local.from_utc_datetime(&self.instant).naive_local();
        Self::from_instant(local, DateTimeKind::Local)
    }

    /// Converts to UTC.
    ///
    /// `Utc` values are returned unchanged. `Local` and `Unspecified`
    /// values are read as local time.
    pub fn to_utc(&self) -> Self {
        if self.kind == DateTimeKind::Utc {
            return *self;
        }
        let offset = TimeDelta::seconds(i64::from(local_offset(&self.instant).local_minus_utc()));
        let utc = self
            .instant
            .checked_sub_signed(offset)
            .unwrap_or(self.instant);
        Self::from_instant(utc, DateTimeKind::Utc)
    }

    /// Offset from UTC used when rendering `z` and `K`.
    fn offset_seconds(&self) -> i32 {
        match self.kind {
            DateTimeKind::Utc => 0,
            DateTimeKind::Local | DateTimeKind::Unspecified => {
                local_offset(&self.instant).local_minus_utc()
            }
        }
    }

    // --- Binary encoding ---

    /// Packs ticks and kind into one integer: the kind code occupies the top
    /// two bits and the ticks the remaining 62.
    pub fn to_binary(&self) -> i64 {
        self.ticks() | (self.kind.code() << 62)
    }

    /// Unpacks a value produced by [`to_binary`](Self::to_binary).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidConversion`] for an unknown kind code, or
    /// [`DateError::TicksOutOfRange`] for an invalid tick count.
    pub fn from_binary(binary: i64) -> Result<Self, DateError> {
        let code = ((binary as u64) >> 62) as i64;
        let ticks = binary & ((1 << 62) - 1);
        let kind = DateTimeKind::from_code(code).ok_or(DateError::InvalidConversion {
            target: "PersianDateTime",
            value: binary,
        })?;
        Self::from_ticks(ticks, kind)
    }

    // --- Formatting and parsing ---

    fn fields(&self) -> Fields {
        let date = self.persian_date();
        Fields {
            instant: self.instant,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            weekday: self.instant.weekday(),
            hour: self.instant.hour(),
            minute: self.instant.minute(),
            second: self.instant.second(),
            fraction: fraction_ticks(self.instant),
            kind: self.kind,
            offset_seconds: self.offset_seconds(),
        }
    }

    /// Formats the value.
    ///
    /// `format` is one of the named codes (`d`, `D`, `t`, `T`, `f`, `F`,
    /// `y`, `Y`, `N` and the date/time pairs such as `dt` or `DT`), a
    /// standard letter (`g`, `G`, `m`, `M`, `o`, `O`, `s`, `u`, `r`, `R`),
    /// or a custom pattern built from `d`, `M`, `y`, `h`, `H`, `m`, `s`,
    /// `f`, `F`, `t`, `g`, `K` and `z`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidFormat`] for an unknown standard letter or
    /// a malformed custom pattern.
    pub fn format(&self, format: &str) -> Result<String, DateError> {
        format::format_fields(&self.fields(), format)
    }

    /// Parses free-form Persian date and time text.
    ///
    /// Digits may be Persian, Arabic-Indic or ASCII. A day name, when
    /// present, must match the date. Missing time defaults to midnight,
    /// a missing date to today and a missing year to the current year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if the text is not a recognisable date,
    /// or a range error if it names an impossible one.
    #[tracing::instrument(level = "debug", err(level = "debug"))]
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let (instant, kind) = format::parse_lenient(text)?;
        Ok(Self::from_instant(instant, kind))
    }

    /// Parses text that must match `format` exactly. `format` accepts the
    /// same codes and patterns as [`format`](Self::format).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if the text does not match,
    /// [`DateError::InvalidFormat`] for a bad format, or a range error for
    /// an impossible date.
    #[tracing::instrument(level = "debug", err(level = "debug"))]
    pub fn parse_exact(text: &str, format: &str) -> Result<Self, DateError> {
        let (instant, kind) = format::parse_exact(text, format)?;
        Ok(Self::from_instant(instant, kind))
    }

    /// Like [`parse`](Self::parse), but returns `None` on failure.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Like [`parse_exact`](Self::parse_exact), but returns `None` on
    /// failure.
    pub fn try_parse_exact(text: &str, format: &str) -> Option<Self> {
        Self::parse_exact(text, format).ok()
    }
}

/// Keeps an instant inside the supported range at tick precision.
fn clamp(instant: NaiveDateTime) -> NaiveDateTime {
    if instant < MIN_INSTANT {
        debug!(%instant, "clamping instant to the first supported value");
        return MIN_INSTANT;
    }
    if instant > MAX_INSTANT {
        debug!(%instant, "clamping instant to the last supported value");
        return MAX_INSTANT;
    }
    let sub_tick = instant.nanosecond() % 100;
    if sub_tick == 0 {
        instant
    } else {
        instant
            .with_nanosecond(instant.nanosecond() - sub_tick)
            .unwrap_or(instant)
    }
}

/// Local UTC offset in effect at a wall-clock instant.
fn local_offset(instant: &NaiveDateTime) -> FixedOffset {
    match Local.offset_from_local_datetime(instant) {
        LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset,
        LocalResult::None => Local.offset_from_utc_datetime(instant),
    }
}

fn delta_ticks(delta: TimeDelta) -> Option<i64> {
    delta.num_nanoseconds().map(|nanos| nanos / 100)
}

impl Default for PersianDateTime {
    fn default() -> Self {
        Self::MIN
    }
}

impl PartialEq for PersianDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for PersianDateTime {}

impl PartialOrd for PersianDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for PersianDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticks().hash(state);
    }
}

impl Sub for PersianDateTime {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.instant - rhs.instant
    }
}

impl fmt::Display for PersianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("F").map_err(|_| fmt::Error)?)
    }
}

impl FromStr for PersianDateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for PersianDateTime {
    fn from(instant: NaiveDateTime) -> Self {
        Self::from_instant(instant, DateTimeKind::Unspecified)
    }
}

impl From<DateTime<Utc>> for PersianDateTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_instant(instant.naive_utc(), DateTimeKind::Utc)
    }
}

impl From<DateTime<Local>> for PersianDateTime {
    fn from(instant: DateTime<Local>) -> Self {
        Self::from_instant(instant.naive_local(), DateTimeKind::Local)
    }
}

impl From<PersianDateTime> for NaiveDateTime {
    fn from(value: PersianDateTime) -> Self {
        value.instant
    }
}

/// Serialized form: the binary encoding in a single named field.
#[derive(Serialize, Deserialize)]
struct PersianDateTimeRepr {
    binary: i64,
}

impl From<PersianDateTime> for PersianDateTimeRepr {
    fn from(value: PersianDateTime) -> Self {
        Self {
            binary: value.to_binary(),
        }
    }
}

impl TryFrom<PersianDateTimeRepr> for PersianDateTime {
    type Error = DateError;

    fn try_from(repr: PersianDateTimeRepr) -> Result<Self, Self::Error> {
        Self::from_binary(repr.binary)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use shamsi_calendar::min_gregorian;

    use super::*;

    fn pdt(year: i32, month: u8, day: u8) -> PersianDateTime {
        PersianDateTime::new(year, month, day).unwrap()
    }

    fn ymd(dt: &PersianDateTime) -> (i32, u8, u8) {
        (dt.year(), dt.month(), dt.day())
    }

    #[test]
    fn bounds_match_calendar() {
        assert_eq!(MIN_INSTANT.date(), min_gregorian());
        assert_eq!(ymd(&PersianDateTime::MIN), (1, 1, 1));
        assert_eq!(ymd(&PersianDateTime::MAX), (9378, 10, 10));
        assert_eq!(PersianDateTime::MAX.ticks(), MAX_TICKS);
        assert_eq!(PersianDateTime::default(), PersianDateTime::MIN);
    }

    #[test]
    fn new_and_fields() {
        let dt = PersianDateTime::from_parts(1402, 5, 7, 14, 5, 9, 250, DateTimeKind::Utc).unwrap();
        assert_eq!(ymd(&dt), (1402, 5, 7));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 5, 9));
        assert_eq!(dt.millisecond(), 250);
        assert_eq!(dt.kind(), DateTimeKind::Utc);
        assert_eq!(dt.day_of_week(), Weekday::Sat);
        assert_eq!(dt.day_of_week_name(), "شنبه");
        assert_eq!(dt.month_name(), "مرداد");
        assert_eq!(dt.day_of_year(), 131);
        assert_eq!(dt.days_in_month(), 31);
        assert!(!dt.is_leap_year());
        assert_eq!(dt.year_month().value(), 140205);
        assert_eq!(
            dt.instant(),
            NaiveDate::from_ymd_opt(2023, 7, 29)
                .unwrap()
                .and_hms_milli_opt(14, 5, 9, 250)
                .unwrap()
        );
    }

    #[test]
    fn invalid_components() {
        assert!(PersianDateTime::new(1402, 12, 30).unwrap_err().is_range_error());
        assert!(PersianDateTime::new(9378, 10, 11).unwrap_err().is_range_error());
        assert!(PersianDateTime::new(0, 1, 1).unwrap_err().is_range_error());
        for (h, m, s) in [(24, 0, 0), (0, 60, 0), (0, 0, 60)] {
            let err = PersianDateTime::with_time(1402, 1, 1, h, m, s).unwrap_err();
            assert!(matches!(err, DateError::InvalidTime { .. }), "{h}:{m}:{s}");
        }
        let err = PersianDateTime::from_parts(1402, 1, 1, 0, 0, 0, 1000, DateTimeKind::Local)
            .unwrap_err();
        assert!(matches!(err, DateError::InvalidTime { millisecond: 1000, .. }));
    }

    #[test]
    fn naive_conversion_clamps() {
        let early = NaiveDate::from_ymd_opt(100, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(PersianDateTime::from(early), PersianDateTime::MIN);
        let late = NaiveDate::from_ymd_opt(12000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(PersianDateTime::from(late), PersianDateTime::MAX);
    }

    #[test]
    fn instants_truncate_to_ticks() {
        let instant = NaiveDate::from_ymd_opt(2023, 7, 29)
            .unwrap()
            .and_hms_nano_opt(0, 0, 0, 123_456_789)
            .unwrap();
        let dt = PersianDateTime::from(instant);
        assert_eq!(dt.instant().nanosecond(), 123_456_700);
    }

    #[test]
    fn ticks_roundtrip_and_range() {
        let dt = PersianDateTime::with_time(1400, 1, 1, 12, 0, 0).unwrap();
        let back = PersianDateTime::from_ticks(dt.ticks(), DateTimeKind::Unspecified).unwrap();
        assert_eq!(back, dt);
        assert!(matches!(
            PersianDateTime::from_ticks(-1, DateTimeKind::Utc),
            Err(DateError::TicksOutOfRange { ticks: -1, .. })
        ));
        assert!(PersianDateTime::from_ticks(MAX_TICKS + 1, DateTimeKind::Utc).is_err());
        assert_eq!(
            PersianDateTime::from_ticks(0, DateTimeKind::Utc).unwrap(),
            PersianDateTime::MIN
        );
    }

    #[test]
    fn add_months_clamps_day() {
        let dt = PersianDateTime::with_time(1403, 6, 31, 8, 30, 0).unwrap();
        let next = dt.add_months(1).unwrap();
        assert_eq!(ymd(&next), (1403, 7, 30));
        assert_eq!((next.hour(), next.minute()), (8, 30));

        let leap_day = pdt(1403, 12, 30);
        assert_eq!(ymd(&leap_day.add_months(12).unwrap()), (1404, 12, 29));
        assert_eq!(ymd(&leap_day.add_years(1).unwrap()), (1404, 12, 29));
        assert_eq!(ymd(&pdt(1403, 1, 31).add_months(-1).unwrap()), (1402, 12, 29));
        assert_eq!(ymd(&pdt(1403, 1, 15).add_months(-25).unwrap()), (1400, 12, 15));
    }

    #[test]
    fn add_months_out_of_range() {
        assert!(matches!(
            PersianDateTime::MAX.add_months(1),
            Err(DateError::ArithmeticOutOfRange { operation: "add_months" })
        ));
        assert!(PersianDateTime::MIN.add_months(-1).is_err());
        assert!(pdt(9378, 9, 20).add_months(1).is_err());
        assert!(pdt(1400, 1, 1).add_years(i32::MAX).is_err());
    }

    #[test]
    fn linear_arithmetic() {
        let dt = pdt(1402, 12, 29);
        assert_eq!(ymd(&dt.add_days(1.0).unwrap()), (1403, 1, 1));
        assert_eq!(dt.add_hours(1.5).unwrap().minute(), 30);
        assert_eq!(dt.add_minutes(-1.0).unwrap().hour(), 23);
        assert_eq!(dt.add_seconds(0.25).unwrap().millisecond(), 250);
        assert_eq!(dt.add_milliseconds(1.5).unwrap().ticks() - dt.ticks(), 15_000);
        assert_eq!(dt.add_ticks(7).unwrap().ticks() - dt.ticks(), 7);
        assert!(dt.add_days(f64::NAN).is_err());
        assert!(dt.add_days(1e300).is_err());
        assert!(PersianDateTime::MAX.add_ticks(1).is_err());
    }

    #[test]
    fn linear_arithmetic_clamps_below_min() {
        let dt = PersianDateTime::MIN.add_days(-1.0).unwrap();
        assert_eq!(dt, PersianDateTime::MIN);
    }

    #[test]
    fn duration_arithmetic() {
        let a = pdt(1402, 1, 1);
        let b = a.checked_add(TimeDelta::hours(36)).unwrap();
        assert_eq!(ymd(&b), (1402, 1, 2));
        assert_eq!(b.hour(), 12);
        assert_eq!(b - a, TimeDelta::hours(36));
        assert_eq!(b.checked_sub(TimeDelta::hours(36)).unwrap(), a);
    }

    #[test]
    fn equality_ignores_kind() {
        let a = pdt(1402, 1, 1);
        let b = a.with_kind(DateTimeKind::Utc);
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(a < a.add_ticks(1).unwrap());
    }

    #[test]
    fn date_and_time_of_day() {
        let dt = PersianDateTime::with_time(1402, 5, 7, 14, 5, 9).unwrap();
        assert_eq!(dt.date(), pdt(1402, 5, 7));
        assert_eq!(dt.time_of_day(), TimeDelta::seconds(14 * 3600 + 5 * 60 + 9));
    }

    #[test]
    fn daylight_saving_stub() {
        assert!(pdt(1402, 6, 31).is_daylight_saving_time());
        assert!(!pdt(1402, 7, 1).is_daylight_saving_time());
    }

    #[test]
    fn utc_conversion_is_identity_for_utc() {
        let dt = pdt(1402, 1, 1).with_kind(DateTimeKind::Utc);
        assert_eq!(dt.to_utc().instant(), dt.instant());
        let local = dt.to_local();
        assert_eq!(local.kind(), DateTimeKind::Local);
        assert_eq!(local.to_utc().kind(), DateTimeKind::Utc);
    }

    #[test]
    fn binary_roundtrip() {
        let dt = PersianDateTime::from_parts(1402, 5, 7, 14, 5, 9, 250, DateTimeKind::Local).unwrap();
        let binary = dt.to_binary();
        let back = PersianDateTime::from_binary(binary).unwrap();
        assert_eq!(back, dt);
        assert_eq!(back.kind(), DateTimeKind::Local);
        assert!(PersianDateTime::from_binary(3 << 62).is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let dt = PersianDateTime::from_parts(1402, 5, 7, 14, 5, 9, 250, DateTimeKind::Utc).unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, format!(r#"{{"binary":{}}}"#, dt.to_binary()));
        let back: PersianDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
        assert_eq!(back.kind(), DateTimeKind::Utc);
    }

    #[test]
    fn named_formats() {
        let dt = PersianDateTime::with_time(1402, 5, 7, 14, 5, 9).unwrap();
        assert_eq!(dt.format("d").unwrap(), "1402/05/07");
        assert_eq!(dt.format("D").unwrap(), "شنبه، 7 مرداد، 1402");
        assert_eq!(dt.format("t").unwrap(), "14:05");
        assert_eq!(dt.format("T").unwrap(), "14:05:09");
        assert_eq!(dt.format("dt").unwrap(), "1402/05/07 - 14:05");
        assert_eq!(dt.format("F").unwrap(), "شنبه، 7 مرداد، 1402 - 14:05:09");
        assert_eq!(dt.format("f").unwrap(), "شنبه، 7 مرداد، 1402 - 14:05");
        assert_eq!(dt.format("y").unwrap(), "مرداد، 1402");
        assert_eq!(dt.format("N").unwrap(), "14020507");
        assert_eq!(dt.to_string(), dt.format("F").unwrap());
    }

    #[test]
    fn short_date_pads_early_years_and_reads_back() {
        let dt = pdt(25, 3, 1);
        assert_eq!(dt.format("d").unwrap(), "0025/03/01");
        assert_eq!(PersianDateTime::parse_exact("0025/03/01", "d").unwrap(), dt);
    }

    #[test]
    fn compact_format_is_eight_digits() {
        for dt in [pdt(1, 1, 1), pdt(1403, 12, 30), pdt(9378, 10, 10)] {
            let text = dt.format("N").unwrap();
            assert_eq!(text.len(), 8, "{text}");
            assert!(text.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn invariant_formats() {
        let dt = PersianDateTime::from_parts(1402, 5, 7, 14, 5, 9, 250, DateTimeKind::Utc).unwrap();
        assert_eq!(dt.format("o").unwrap(), "2023-07-29T14:05:09.2500000Z");
        assert_eq!(dt.format("s").unwrap(), "2023-07-29T14:05:09");
        assert_eq!(dt.format("r").unwrap(), "Sat, 29 Jul 2023 14:05:09 GMT");
    }

    #[test]
    fn invalid_format() {
        let dt = pdt(1402, 1, 1);
        assert!(dt.format("q").unwrap_err().is_format_error());
        assert!(dt.format("'open").unwrap_err().is_format_error());
    }

    #[test]
    fn parse_and_try_parse() {
        let dt = PersianDateTime::parse("۱۴۰۲/۰۵/۰۷ ۱۴:۰۵").unwrap();
        assert_eq!(dt, PersianDateTime::with_time(1402, 5, 7, 14, 5, 0).unwrap());
        assert_eq!(dt.kind(), DateTimeKind::Unspecified);
        assert_eq!("1402/05/07".parse::<PersianDateTime>().unwrap(), pdt(1402, 5, 7));
        assert_eq!(PersianDateTime::try_parse("not a date"), None);
        assert_eq!(PersianDateTime::try_parse("1402/12/30"), None);
    }

    #[test]
    fn parse_exact_named_codes() {
        let dt = PersianDateTime::with_time(1402, 5, 7, 14, 5, 9).unwrap();
        for code in ["d", "N"] {
            let text = dt.format(code).unwrap();
            assert_eq!(PersianDateTime::parse_exact(&text, code).unwrap(), dt.date(), "{code}");
        }
        for code in ["F", "DT", "dT", "G", "s"] {
            let text = dt.format(code).unwrap();
            assert_eq!(PersianDateTime::parse_exact(&text, code).unwrap(), dt, "{code}");
        }
        assert_eq!(PersianDateTime::try_parse_exact("1402/05/07", "N"), None);
    }
}
