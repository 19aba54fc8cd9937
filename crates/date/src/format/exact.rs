//! Pattern-driven parser: the input must match the pattern exactly.

use shamsi_calendar::PersianCulture;

use super::parsed::Parsed;
use super::pattern::{MAX_FRACTION_DIGITS, Token};
use crate::error::DateError;

/// Input position plus the helpers the field readers share.
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub(crate) fn rest(&self) -> &'a str {
        self.rest
    }

    pub(crate) fn eat(&mut self, text: &str) -> bool {
        match self.rest.strip_prefix(text) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Reads between `min` and `max` ASCII digits.
    pub(crate) fn digits(&mut self, min: usize, max: usize) -> Option<(u32, usize)> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let value = if len == 0 {
            0
        } else {
            self.rest[..len].parse().ok()?
        };
        self.rest = &self.rest[len..];
        Some((value, len))
    }

    /// Consumes the longest candidate that prefixes the input.
    pub(crate) fn longest<T: Copy>(
        &mut self,
        candidates: impl IntoIterator<Item = (&'static str, T)>,
    ) -> Option<T> {
        let (name, value) = candidates
            .into_iter()
            .filter(|(name, _)| !name.is_empty() && self.rest.starts_with(name))
            .max_by_key(|(name, _)| name.len())?;
        self.rest = &self.rest[name.len()..];
        Some(value)
    }
}

/// Parses `input` against a tokenized custom pattern.
///
/// Numeric fields written with one letter accept one or two digits, longer
/// runs require exactly that many. A `.` right before an `F` run may be
/// left out together with the fraction.
pub(crate) fn parse(input: &str, tokens: &[Token], original: &str) -> Result<Parsed, DateError> {
    let culture = PersianCulture::get();
    let mut cursor = Cursor::new(input);
    let mut parsed = Parsed::default();
    let fail = |reason: &str| DateError::parse(original, reason);

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(text) => {
                if cursor.eat(text) {
                    continue;
                }
                let before_optional_fraction =
                    matches!(tokens.get(i + 1), Some(Token::Field { letter: 'F', .. }));
                let without_dot = text.strip_suffix('.').filter(|_| before_optional_fraction);
                match without_dot {
                    Some(prefix) if cursor.eat(prefix) => {}
                    _ => return Err(fail(&format!("expected {text:?}"))),
                }
            }
            Token::DateSeparator => {
                if !cursor.eat(culture.date_separator()) {
                    return Err(fail("expected date separator"));
                }
            }
            Token::TimeSeparator => {
                if !cursor.eat(culture.time_separator()) {
                    return Err(fail("expected time separator"));
                }
            }
            Token::Field { letter, len } => {
                field(&mut cursor, &mut parsed, *letter, *len, culture)
                    .ok_or_else(|| fail(&format!("expected {}", describe(*letter, *len))))?;
            }
        }
    }
    if !cursor.is_empty() {
        return Err(fail(&format!("unexpected trailing text {:?}", cursor.rest())));
    }
    Ok(parsed)
}

fn field(
    cursor: &mut Cursor<'_>,
    parsed: &mut Parsed,
    letter: char,
    len: usize,
    culture: &PersianCulture,
) -> Option<()> {
    let width = |len: usize| if len == 1 { (1, 2) } else { (2, 2) };
    match letter {
        'd' if len <= 2 => {
            let (min, max) = width(len);
            parsed.day = Some(cursor.digits(min, max)?.0 as u8);
        }
        'd' => {
            let names = culture.week().map(|w| {
                let name = if len == 3 {
                    culture.abbreviated_day_name(w)
                } else {
                    culture.day_name(w)
                };
                (name, w)
            });
            parsed.weekday = Some(cursor.longest(names)?);
        }
        'M' if len <= 2 => {
            let (min, max) = width(len);
            parsed.month = Some(cursor.digits(min, max)?.0 as u8);
        }
        'M' => {
            let names = (1..=12u8).map(|m| {
                let name = if len == 3 {
                    culture.abbreviated_month_name(m)
                } else {
                    culture.month_name(m)
                };
                (name, m)
            });
            parsed.month = Some(cursor.longest(names)?);
        }
        'y' => {
            let (min, max) = match len {
                1 => (1, 2),
                2 => (2, 2),
                _ => (len, len.max(4)),
            };
            parsed.year = Some(cursor.digits(min, max)?.0 as i32);
            parsed.short_year = len <= 2;
        }
        'h' | 'H' => {
            let (min, max) = width(len);
            parsed.hour = Some(cursor.digits(min, max)?.0);
        }
        'm' => {
            let (min, max) = width(len);
            parsed.minute = Some(cursor.digits(min, max)?.0);
        }
        's' => {
            let (min, max) = width(len);
            parsed.second = Some(cursor.digits(min, max)?.0);
        }
        'f' | 'F' => {
            let min = if letter == 'f' { len } else { 0 };
            let (value, read) = cursor.digits(min, len)?;
            let scale = 10u32.pow((MAX_FRACTION_DIGITS - read) as u32);
            parsed.fraction = Some(value * scale);
        }
        't' => {
            let (am, pm) = (culture.am_designator(), culture.pm_designator());
            let designators = if len == 1 {
                [(prefix_char(am), false), (prefix_char(pm), true)]
            } else {
                [(am, false), (pm, true)]
            };
            parsed.pm = Some(cursor.longest(designators)?);
        }
        'g' => {
            if !cursor.eat(culture.era_name()) {
                return None;
            }
        }
        'K' => {
            if cursor.eat("Z") {
                parsed.utc = true;
            } else if cursor.rest().starts_with(['+', '-']) {
                parsed.offset_seconds = Some(offset(cursor, 3)?);
            }
        }
        'z' => parsed.offset_seconds = Some(offset(cursor, len)?),
        _ => return None,
    }
    Some(())
}

/// First character of `text` as a string slice.
fn prefix_char(text: &'static str) -> &'static str {
    let end = text.chars().next().map_or(0, char::len_utf8);
    &text[..end]
}

/// Reads `+h`, `+hh` or `+hh:mm` depending on the run length.
fn offset(cursor: &mut Cursor<'_>, len: usize) -> Option<i32> {
    let sign = if cursor.eat("+") {
        1
    } else if cursor.eat("-") {
        -1
    } else {
        return None;
    };
    let (min, max) = if len == 1 { (1, 2) } else { (2, 2) };
    let (hours, _) = cursor.digits(min, max)?;
    let minutes = if len >= 3 {
        if !cursor.eat(":") {
            return None;
        }
        cursor.digits(2, 2)?.0
    } else {
        0
    };
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60) as i32)
}

fn describe(letter: char, len: usize) -> String {
    let what = match letter {
        'd' if len > 2 => "day name",
        'd' => "day",
        'M' if len > 2 => "month name",
        'M' => "month",
        'y' => "year",
        'h' | 'H' => "hour",
        'm' => "minute",
        's' => "second",
        'f' | 'F' => "fraction",
        't' => "AM/PM designator",
        'g' => "era",
        _ => "UTC offset",
    };
    format!("{what} ({})", String::from(letter).repeat(len))
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::format::pattern::tokenize;

    fn run(input: &str, pattern: &str) -> Result<Parsed, DateError> {
        parse(input, &tokenize(pattern).unwrap(), input)
    }

    #[test]
    fn cursor_digits() {
        let mut cursor = Cursor::new("12345x");
        assert_eq!(cursor.digits(1, 2), Some((12, 2)));
        assert_eq!(cursor.digits(4, 4), None);
        assert_eq!(cursor.digits(1, 4), Some((345, 3)));
        assert_eq!(cursor.rest(), "x");
        assert_eq!(cursor.digits(0, 3), Some((0, 0)));
    }

    #[test]
    fn numeric_date() {
        let parsed = run("1402/05/07", "yyyy/MM/dd").unwrap();
        assert_eq!(parsed.year, Some(1402));
        assert_eq!(parsed.month, Some(5));
        assert_eq!(parsed.day, Some(7));
        assert!(!parsed.short_year);
    }

    #[test]
    fn compact_date() {
        let parsed = run("14020507", "yyyyMMdd").unwrap();
        assert_eq!((parsed.year, parsed.month, parsed.day), (Some(1402), Some(5), Some(7)));
    }

    #[test]
    fn single_letter_fields_take_one_or_two_digits() {
        let parsed = run("1402/5/17", "yyyy/M/d").unwrap();
        assert_eq!((parsed.month, parsed.day), (Some(5), Some(17)));
        assert!(run("1402/5/7", "yyyy/MM/dd").is_err());
    }

    #[test]
    fn two_digit_year_is_flagged() {
        let parsed = run("02/05/07", "yy/MM/dd").unwrap();
        assert_eq!(parsed.year, Some(2));
        assert!(parsed.short_year);
    }

    #[test]
    fn names() {
        let parsed = run("شنبه، 7 مرداد، 1402", "dddd، d MMMM، yyyy").unwrap();
        assert_eq!(parsed.weekday, Some(Weekday::Sat));
        assert_eq!(parsed.month, Some(5));
        assert_eq!(parsed.day, Some(7));
    }

    #[test]
    fn longest_day_name_wins() {
        let parsed = run("پنجشنبه", "dddd").unwrap();
        assert_eq!(parsed.weekday, Some(Weekday::Thu));
        let parsed = run("شنبه", "dddd").unwrap();
        assert_eq!(parsed.weekday, Some(Weekday::Sat));
    }

    #[test]
    fn time_and_designator() {
        let parsed = run("02:30 ب.ظ", "hh:mm tt").unwrap();
        assert_eq!(parsed.hour, Some(2));
        assert_eq!(parsed.minute, Some(30));
        assert_eq!(parsed.pm, Some(true));
        let parsed = run("9 ق", "%h t").unwrap();
        assert_eq!(parsed.pm, Some(false));
    }

    #[test]
    fn fractions() {
        let parsed = run("05.123", "ss.fff").unwrap();
        assert_eq!(parsed.fraction, Some(1_230_000));
        let parsed = run("05.5", "ss.FFFFFFF").unwrap();
        assert_eq!(parsed.fraction, Some(5_000_000));
        let parsed = run("05", "ss.FFFFFFF").unwrap();
        assert_eq!(parsed.fraction, Some(0));
        assert!(run("05", "ss.fff").is_err());
    }

    #[test]
    fn offsets() {
        assert_eq!(run("+03:30", "zzz").unwrap().offset_seconds, Some(12_600));
        assert_eq!(run("-5", "%z").unwrap().offset_seconds, Some(-18_000));
        assert!(run("Z", "%K").unwrap().utc);
        assert_eq!(run("", "%K").unwrap(), Parsed::default());
        assert!(run("+3", "zz").is_err());
    }

    #[test]
    fn era() {
        assert!(run("1402 ه.ش", "yyyy g").is_ok());
        assert!(run("1402 AD", "yyyy g").is_err());
    }

    #[test]
    fn mismatches() {
        for (input, pattern) in [
            ("1402-05-07", "yyyy/MM/dd"),
            ("1402/05/07 extra", "yyyy/MM/dd"),
            ("1402/05", "yyyy/MM/dd"),
            ("فروردین", "dddd"),
        ] {
            let err = run(input, pattern).unwrap_err();
            assert!(err.is_format_error(), "{input:?} with {pattern:?}");
        }
    }
}
