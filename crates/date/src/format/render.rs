//! Renders tokenized patterns from precomputed date-time fields.

use chrono::{NaiveDateTime, Weekday};
use shamsi_calendar::PersianCulture;

use super::pattern::{MAX_FRACTION_DIGITS, Token};
use super::standard::Gregorian;
use crate::kind::DateTimeKind;

/// Every value a pattern can reference, computed once per format call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields {
    pub instant: NaiveDateTime,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Sub-second part in ticks (0..10_000_000).
    pub fraction: u32,
    pub kind: DateTimeKind,
    /// Offset from UTC used by `z` and `K`.
    pub offset_seconds: i32,
}

pub(crate) fn render(tokens: &[Token], fields: &Fields) -> String {
    let culture = PersianCulture::get();
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::DateSeparator => out.push_str(culture.date_separator()),
            Token::TimeSeparator => out.push_str(culture.time_separator()),
            Token::Field { letter, len } => field(&mut out, *letter, *len, fields, culture),
        }
    }
    out
}

fn field(out: &mut String, letter: char, len: usize, f: &Fields, culture: &PersianCulture) {
    match letter {
        'd' => match len {
            1 | 2 => pad(out, i64::from(f.day), len),
            3 => out.push_str(culture.abbreviated_day_name(f.weekday)),
            _ => out.push_str(culture.day_name(f.weekday)),
        },
        'M' => match len {
            1 | 2 => pad(out, i64::from(f.month), len),
            3 => out.push_str(culture.abbreviated_month_name(f.month)),
            _ => out.push_str(culture.month_name(f.month)),
        },
        'y' => match len {
            1 | 2 => pad(out, i64::from(f.year % 100), len),
            _ => pad(out, i64::from(f.year), len),
        },
        'h' => {
            let hour = match f.hour % 12 {
                0 => 12,
                h => h,
            };
            pad(out, i64::from(hour), len.min(2));
        }
        'H' => pad(out, i64::from(f.hour), len.min(2)),
        'm' => pad(out, i64::from(f.minute), len.min(2)),
        's' => pad(out, i64::from(f.second), len.min(2)),
        'f' => out.push_str(&fraction_digits(f.fraction, len)),
        'F' => {
            let digits = fraction_digits(f.fraction, len);
            let trimmed = digits.trim_end_matches('0');
            if trimmed.is_empty() {
                if out.ends_with('.') {
                    out.pop();
                }
            } else {
                out.push_str(trimmed);
            }
        }
        't' => {
            let designator = if f.hour < 12 {
                culture.am_designator()
            } else {
                culture.pm_designator()
            };
            if len == 1 {
                out.extend(designator.chars().next());
            } else {
                out.push_str(designator);
            }
        }
        'g' => out.push_str(culture.era_name()),
        'K' => match f.kind {
            DateTimeKind::Utc => out.push('Z'),
            DateTimeKind::Local => offset(out, f.offset_seconds, 3),
            DateTimeKind::Unspecified => {}
        },
        'z' => offset(out, f.offset_seconds, len),
        _ => {}
    }
}

fn pad(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

/// Leading `len` digits of a seven-digit tick fraction.
fn fraction_digits(fraction: u32, len: usize) -> String {
    let mut digits = format!("{fraction:07}");
    digits.truncate(len.min(MAX_FRACTION_DIGITS));
    digits
}

/// Writes a UTC offset: `+3` (`z`), `+03` (`zz`) or `+03:30` (`zzz`).
fn offset(out: &mut String, seconds: i32, len: usize) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let text = match len {
        1 => format!("{sign}{hours}"),
        2 => format!("{sign}{hours:02}"),
        _ => format!("{sign}{hours:02}:{minutes:02}"),
    };
    out.push_str(&text);
}

/// Renders one of the culture-invariant Gregorian standard formats.
pub(crate) fn gregorian(format: Gregorian, f: &Fields) -> String {
    match format {
        Gregorian::RoundTrip => {
            let mut out = format!(
                "{}.{:07}",
                f.instant.format("%Y-%m-%dT%H:%M:%S"),
                f.fraction
            );
            match f.kind {
                DateTimeKind::Utc => out.push('Z'),
                DateTimeKind::Local => offset(&mut out, f.offset_seconds, 3),
                DateTimeKind::Unspecified => {}
            }
            out
        }
        Gregorian::Sortable => f.instant.format("%Y-%m-%dT%H:%M:%S").to_string(),
        Gregorian::UniversalSortable => f.instant.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        Gregorian::Rfc1123 => f.instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::format::pattern::tokenize;

    /// 1402/05/07 (2023-07-29, a Saturday) 14:05:09.1234500.
    fn sample() -> Fields {
        let instant = NaiveDate::from_ymd_opt(2023, 7, 29)
            .unwrap()
            .and_hms_nano_opt(14, 5, 9, 123_450_000)
            .unwrap();
        Fields {
            instant,
            year: 1402,
            month: 5,
            day: 7,
            weekday: Weekday::Sat,
            hour: 14,
            minute: 5,
            second: 9,
            fraction: 1_234_500,
            kind: DateTimeKind::Unspecified,
            offset_seconds: 12_600,
        }
    }

    fn fmt(pattern: &str, fields: &Fields) -> String {
        render(&tokenize(pattern).unwrap(), fields)
    }

    #[test]
    fn date_fields() {
        let f = sample();
        assert_eq!(fmt("yyyy/MM/dd", &f), "1402/05/07");
        assert_eq!(fmt("yy/M/d", &f), "02/5/7");
        assert_eq!(fmt("%y", &f), "2");
        assert_eq!(fmt("yyyyy", &f), "01402");
        assert_eq!(fmt("dddd", &f), "شنبه");
        assert_eq!(fmt("ddd", &f), "ش");
        assert_eq!(fmt("MMMM", &f), "مرداد");
        assert_eq!(fmt("MMM", &f), "مرداد");
    }

    #[test]
    fn time_fields() {
        let f = sample();
        assert_eq!(fmt("HH:mm:ss", &f), "14:05:09");
        assert_eq!(fmt("h:m:s", &f), "2:5:9");
        assert_eq!(fmt("hh tt", &f), "02 ب.ظ");
        assert_eq!(fmt("%t", &f), "ب");
    }

    #[test]
    fn twelve_hour_clock_midnight_and_noon() {
        let mut f = sample();
        f.hour = 0;
        assert_eq!(fmt("hh tt", &f), "12 ق.ظ");
        f.hour = 12;
        assert_eq!(fmt("hh tt", &f), "12 ب.ظ");
    }

    #[test]
    fn fractions() {
        let f = sample();
        assert_eq!(fmt("fffffff", &f), "1234500");
        assert_eq!(fmt("fff", &f), "123");
        assert_eq!(fmt("%f", &f), "1");
        assert_eq!(fmt("ss.FFFFFFF", &f), "09.12345");
        let mut whole = sample();
        whole.fraction = 0;
        assert_eq!(fmt("ss.FFF", &whole), "09");
        assert_eq!(fmt("ss.fff", &whole), "09.000");
    }

    #[test]
    fn offsets_and_kind() {
        let mut f = sample();
        assert_eq!(fmt("%z", &f), "+3");
        assert_eq!(fmt("zz", &f), "+03");
        assert_eq!(fmt("zzz", &f), "+03:30");
        assert_eq!(fmt("%K", &f), "");
        f.kind = DateTimeKind::Utc;
        assert_eq!(fmt("%K", &f), "Z");
        f.kind = DateTimeKind::Local;
        f.offset_seconds = -16_200;
        assert_eq!(fmt("%K", &f), "-04:30");
        assert_eq!(fmt("%z", &f), "-4");
        assert_eq!(fmt("zz", &f), "-04");
    }

    #[test]
    fn era_and_literals() {
        let f = sample();
        assert_eq!(fmt("yyyy g", &f), "1402 ه.ش");
        assert_eq!(fmt("'year' yyyy", &f), "year 1402");
    }

    #[test]
    fn gregorian_forms() {
        let mut f = sample();
        assert_eq!(
            gregorian(Gregorian::RoundTrip, &f),
            "2023-07-29T14:05:09.1234500"
        );
        f.kind = DateTimeKind::Utc;
        assert_eq!(
            gregorian(Gregorian::RoundTrip, &f),
            "2023-07-29T14:05:09.1234500Z"
        );
        assert_eq!(gregorian(Gregorian::Sortable, &f), "2023-07-29T14:05:09");
        assert_eq!(
            gregorian(Gregorian::UniversalSortable, &f),
            "2023-07-29 14:05:09Z"
        );
        assert_eq!(
            gregorian(Gregorian::Rfc1123, &f),
            "Sat, 29 Jul 2023 14:05:09 GMT"
        );
    }
}
