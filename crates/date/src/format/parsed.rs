//! Field values collected by the parsers and their resolution to an instant.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use shamsi_calendar::{PersianCulture, PersianDate};
use tracing::trace;

use crate::error::DateError;
use crate::kind::DateTimeKind;
use crate::ticks::TICKS_PER_SECOND;

/// Fields recognised in the input. `None` means the field was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub year: Option<i32>,
    /// Years written with one or two digits, expanded through the culture's
    /// two-digit window during resolution.
    pub short_year: bool,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    /// Sub-second part in ticks.
    pub fraction: Option<u32>,
    /// `Some(true)` after the PM designator, `Some(false)` after AM.
    pub pm: Option<bool>,
    /// Trailing `Z` or an explicit zero UTC marker.
    pub utc: bool,
    /// Explicit UTC offset in seconds.
    pub offset_seconds: Option<i32>,
}

impl Parsed {
    fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Turns the collected fields into an instant and its kind.
    ///
    /// A missing date means today, a missing year the current year, a
    /// missing month or day the first one and a missing time midnight. A
    /// parsed weekday must agree with the resolved date. An explicit offset
    /// converts the instant to local time.
    pub(crate) fn resolve(
        &self,
        input: &str,
    ) -> Result<(NaiveDateTime, DateTimeKind), DateError> {
        let date = if self.has_date() {
            let year = match self.year {
                Some(year) if self.short_year => PersianCulture::get().to_four_digit_year(year),
                Some(year) => year,
                None => today()?.year(),
            };
            let month = self.month.unwrap_or(1);
            let day = self.day.unwrap_or(1);
            PersianDate::new(year, month, day)?
        } else {
            trace!("no date in input, using today");
            today()?
        };

        if let Some(weekday) = self.weekday {
            if weekday != date.weekday() {
                return Err(DateError::parse(input, "day name does not match the date"));
            }
        }

        let time = self.time(input)?;
        let instant = date.to_gregorian().and_time(time);

        if self.utc {
            return Ok((instant, DateTimeKind::Utc));
        }
        match self.offset_seconds {
            Some(0) => Ok((instant, DateTimeKind::Utc)),
            Some(seconds) => Ok((to_local(instant, seconds, input)?, DateTimeKind::Local)),
            None => Ok((instant, DateTimeKind::Unspecified)),
        }
    }

    fn time(&self, input: &str) -> Result<NaiveTime, DateError> {
        let hour = self.hour.unwrap_or(0);
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let fraction = self.fraction.unwrap_or(0);
        let hour = match self.pm {
            None => hour,
            Some(pm) if hour > 12 => {
                if !pm {
                    return Err(DateError::parse(
                        input,
                        "hour conflicts with the AM designator",
                    ));
                }
                hour
            }
            Some(pm) => hour % 12 + if pm { 12 } else { 0 },
        };
        if i64::from(fraction) >= TICKS_PER_SECOND {
            return Err(DateError::parse(input, "fraction out of range"));
        }
        NaiveTime::from_hms_nano_opt(hour, minute, second, fraction * 100).ok_or(
            DateError::InvalidTime {
                hour,
                minute,
                second,
                millisecond: fraction / 10_000,
            },
        )
    }
}

/// Today's date in the Persian calendar, from the system clock.
pub(crate) fn today() -> Result<PersianDate, DateError> {
    Ok(PersianDate::from_gregorian(Local::now().date_naive())?)
}

/// Reinterprets a wall-clock instant written at `offset_seconds` from UTC
/// as local time.
fn to_local(
    instant: NaiveDateTime,
    offset_seconds: i32,
    input: &str,
) -> Result<NaiveDateTime, DateError> {
    let offset = FixedOffset::east_opt(offset_seconds)
        .ok_or_else(|| DateError::parse(input, "offset out of range"))?;
    let fixed: DateTime<FixedOffset> = offset
        .from_local_datetime(&instant)
        .single()
        .ok_or_else(|| DateError::parse(input, "offset out of range"))?;
    Ok(fixed.with_timezone(&Local).naive_local())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    fn date(year: i32, month: u8, day: u8) -> Parsed {
        Parsed {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Parsed::default()
        }
    }

    #[test]
    fn full_date_at_midnight() {
        let (instant, kind) = date(1400, 1, 1).resolve("x").unwrap();
        assert_eq!(
            instant,
            NaiveDate::from_ymd_opt(2021, 3, 21)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(kind, DateTimeKind::Unspecified);
    }

    #[test]
    fn short_year_uses_window() {
        let mut parsed = date(2, 5, 7);
        parsed.short_year = true;
        let (instant, _) = parsed.resolve("x").unwrap();
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2023, 7, 29).unwrap());
    }

    #[test]
    fn designators_adjust_hour() {
        let mut parsed = date(1400, 1, 1);
        parsed.hour = Some(2);
        parsed.pm = Some(true);
        assert_eq!(parsed.resolve("x").unwrap().0.hour(), 14);
        parsed.hour = Some(12);
        parsed.pm = Some(false);
        assert_eq!(parsed.resolve("x").unwrap().0.hour(), 0);
        parsed.hour = Some(15);
        assert!(parsed.resolve("x").unwrap_err().is_format_error());
        parsed.pm = Some(true);
        assert_eq!(parsed.resolve("x").unwrap().0.hour(), 15);
    }

    #[test]
    fn weekday_must_match() {
        let mut parsed = date(1400, 1, 1);
        parsed.weekday = Some(Weekday::Sun);
        assert!(parsed.resolve("x").is_ok());
        parsed.weekday = Some(Weekday::Mon);
        assert!(parsed.resolve("x").unwrap_err().is_format_error());
    }

    #[test]
    fn invalid_components() {
        assert!(date(1402, 12, 30).resolve("x").unwrap_err().is_range_error());
        let mut parsed = date(1400, 1, 1);
        parsed.hour = Some(24);
        assert!(matches!(
            parsed.resolve("x").unwrap_err(),
            DateError::InvalidTime { hour: 24, .. }
        ));
    }

    #[test]
    fn utc_marker() {
        let mut parsed = date(1400, 1, 1);
        parsed.utc = true;
        assert_eq!(parsed.resolve("x").unwrap().1, DateTimeKind::Utc);
        let mut parsed = date(1400, 1, 1);
        parsed.offset_seconds = Some(0);
        assert_eq!(parsed.resolve("x").unwrap().1, DateTimeKind::Utc);
    }

    #[test]
    fn missing_date_is_today() {
        let parsed = Parsed {
            hour: Some(10),
            ..Parsed::default()
        };
        let (instant, _) = parsed.resolve("x").unwrap();
        assert_eq!(instant.hour(), 10);
        assert_eq!(instant.date(), today().unwrap().to_gregorian());
    }
}
