//! Tick counts: 100-nanosecond units since 0001-01-01T00:00 (Gregorian).

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Ticks in one millisecond.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
/// Ticks in one second.
pub const TICKS_PER_SECOND: i64 = 1_000 * TICKS_PER_MILLISECOND;
/// Ticks in one minute.
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
/// Ticks in one hour.
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
/// Ticks in one day.
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// Tick count of 9999-12-31T23:59:59.9999999, the last host instant.
pub const MAX_TICKS: i64 = 3_652_059 * TICKS_PER_DAY - 1;

/// Converts an instant to ticks, truncating below 100 ns.
pub(crate) fn ticks_from_naive(instant: NaiveDateTime) -> i64 {
    let days = i64::from(instant.date().num_days_from_ce()) - 1;
    let time = instant.time();
    // Leap seconds are folded into the preceding second.
    let nanos = i64::from(time.nanosecond().min(999_999_999));
    days * TICKS_PER_DAY + i64::from(time.num_seconds_from_midnight()) * TICKS_PER_SECOND
        + nanos / 100
}

/// Converts ticks back to an instant, or `None` outside chrono's range.
pub(crate) fn naive_from_ticks(ticks: i64) -> Option<NaiveDateTime> {
    let days = ticks.div_euclid(TICKS_PER_DAY) + 1;
    let rem = ticks.rem_euclid(TICKS_PER_DAY);
    let date = NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)?;
    let secs = (rem / TICKS_PER_SECOND) as u32;
    let nanos = ((rem % TICKS_PER_SECOND) * 100) as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)?;
    Some(date.and_time(time))
}

/// Sub-second part of an instant in ticks (0..10_000_000).
pub(crate) fn fraction_ticks(instant: NaiveDateTime) -> u32 {
    instant.time().nanosecond().min(999_999_999) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ticks_is_year_one() {
        let instant = naive_from_ticks(0).unwrap();
        assert_eq!(instant.to_string(), "0001-01-01 00:00:00");
        assert_eq!(ticks_from_naive(instant), 0);
    }

    #[test]
    fn max_ticks_is_last_host_instant() {
        let instant = naive_from_ticks(MAX_TICKS).unwrap();
        assert_eq!(instant.to_string(), "9999-12-31 23:59:59.999999900");
        assert_eq!(ticks_from_naive(instant), MAX_TICKS);
    }

    #[test]
    fn known_instant() {
        // 2000-01-01T00:00:00 is 630822816000000000 ticks.
        let instant = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(ticks_from_naive(instant), 630_822_816_000_000_000);
    }

    #[test]
    fn fraction_truncates_to_ticks() {
        let instant = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_nano_opt(0, 0, 0, 123_456_789)
            .unwrap();
        assert_eq!(fraction_ticks(instant), 1_234_567);
        assert_eq!(ticks_from_naive(instant) % TICKS_PER_SECOND, 1_234_567);
    }
}
