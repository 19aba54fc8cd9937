//! Generic parser for free-form Persian date and time text.

use chrono::Weekday;
use shamsi_calendar::PersianCulture;
use tracing::trace;

use super::exact::Cursor;
use super::parsed::Parsed;
use super::pattern::MAX_FRACTION_DIGITS;
use crate::error::DateError;

/// Longest run of digits read as one number.
const MAX_NUMBER_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Number { value: u32, digits: usize },
    Punct(char),
    Day(Weekday),
    Month(u8),
    Designator { pm: bool },
    Era,
    Utc,
}

/// Words the lexer recognises, with what each stands for.
fn vocabulary(culture: &PersianCulture) -> Vec<(&'static str, Lexeme)> {
    let mut words: Vec<(&'static str, Lexeme)> = culture
        .week()
        .into_iter()
        .map(|w| (culture.day_name(w), Lexeme::Day(w)))
        .collect();
    words.extend((1..=12u8).map(|m| (culture.month_name(m), Lexeme::Month(m))));
    words.extend([
        (culture.am_designator(), Lexeme::Designator { pm: false }),
        (culture.pm_designator(), Lexeme::Designator { pm: true }),
        ("AM", Lexeme::Designator { pm: false }),
        ("PM", Lexeme::Designator { pm: true }),
        ("am", Lexeme::Designator { pm: false }),
        ("pm", Lexeme::Designator { pm: true }),
        (culture.era_name(), Lexeme::Era),
        ("Z", Lexeme::Utc),
    ]);
    words
}

fn lex(input: &str, original: &str) -> Result<Vec<Lexeme>, DateError> {
    let words = vocabulary(PersianCulture::get());
    let mut cursor = Cursor::new(input);
    let mut lexemes = Vec::new();
    while let Some(c) = cursor.rest().chars().next() {
        if c.is_whitespace() || matches!(c, ',' | '،') {
            cursor.eat(c.encode_utf8(&mut [0; 4]));
        } else if c.is_ascii_digit() {
            let (value, digits) = cursor
                .digits(1, MAX_NUMBER_DIGITS)
                .ok_or_else(|| DateError::parse(original, "invalid number"))?;
            if cursor.rest().starts_with(|c: char| c.is_ascii_digit()) {
                return Err(DateError::parse(original, "number is too long"));
            }
            lexemes.push(Lexeme::Number { value, digits });
        } else if let Some(lexeme) = cursor.longest(words.iter().copied()) {
            if cursor.rest().starts_with(char::is_alphabetic) {
                return Err(DateError::parse(original, "unrecognised word"));
            }
            lexemes.push(lexeme);
        } else if matches!(c, '/' | '-' | '.' | ':') {
            cursor.eat(c.encode_utf8(&mut [0; 4]));
            lexemes.push(Lexeme::Punct(c));
        } else {
            return Err(DateError::parse(
                original,
                format!("unrecognised text {:?}", cursor.rest()),
            ));
        }
    }
    Ok(lexemes)
}

/// Parses free-form text into fields.
///
/// Recognises a time `H:m[:s[.fffffff]]`, day names, AM/PM designators,
/// the era name and a `Z` suffix anywhere in the text. What remains must
/// be one date group: `y/M/d` (or `d/M/yyyy`), `y/M`, `M/d`, `d MMMM y`,
/// `d MMMM`, `MMMM y` or eight digits `yyyyMMdd`. `/`, `-` and `.` all
/// separate numeric dates.
pub(crate) fn parse(input: &str, original: &str) -> Result<Parsed, DateError> {
    let lexemes = lex(input, original)?;
    trace!(?lexemes, "lexed date text");
    let fail = |reason: &str| DateError::parse(original, reason);
    if lexemes.is_empty() {
        return Err(fail("empty input"));
    }

    let mut parsed = Parsed::default();
    let mut used = vec![false; lexemes.len()];
    read_time(&lexemes, &mut used, &mut parsed, original)?;

    let mut date = Vec::new();
    for (i, lexeme) in lexemes.iter().enumerate() {
        if used[i] {
            continue;
        }
        match *lexeme {
            Lexeme::Day(weekday) => {
                if parsed.weekday.replace(weekday).is_some() {
                    return Err(fail("more than one day name"));
                }
            }
            Lexeme::Designator { pm } => {
                if parsed.pm.replace(pm).is_some() {
                    return Err(fail("more than one AM/PM designator"));
                }
            }
            Lexeme::Era => {}
            Lexeme::Utc => parsed.utc = true,
            Lexeme::Punct(':') => return Err(fail("unexpected ':'")),
            Lexeme::Punct(_) => {}
            Lexeme::Number { .. } | Lexeme::Month(_) => date.push(*lexeme),
        }
    }
    if parsed.pm.is_some() && parsed.hour.is_none() {
        return Err(fail("AM/PM designator without a time"));
    }
    read_date(&date, &mut parsed, original)?;
    Ok(parsed)
}

fn number(lexeme: Option<&Lexeme>) -> Option<(u32, usize)> {
    match lexeme {
        Some(Lexeme::Number { value, digits }) => Some((*value, *digits)),
        _ => None,
    }
}

fn read_time(
    lexemes: &[Lexeme],
    used: &mut [bool],
    parsed: &mut Parsed,
    original: &str,
) -> Result<(), DateError> {
    let colon = Some(&Lexeme::Punct(':'));
    let start = (0..lexemes.len()).find(|&i| {
        number(lexemes.get(i)).is_some()
            && lexemes.get(i + 1) == colon
            && number(lexemes.get(i + 2)).is_some()
    });
    let Some(start) = start else {
        return Ok(());
    };
    let mut end = start + 3;
    parsed.hour = number(lexemes.get(start)).map(|(v, _)| v);
    parsed.minute = number(lexemes.get(start + 2)).map(|(v, _)| v);
    if lexemes.get(end) == colon {
        let (second, _) = number(lexemes.get(end + 1))
            .ok_or_else(|| DateError::parse(original, "expected seconds"))?;
        parsed.second = Some(second);
        end += 2;
        if lexemes.get(end) == Some(&Lexeme::Punct('.')) {
            if let Some((value, digits)) = number(lexemes.get(end + 1)) {
                if digits > MAX_FRACTION_DIGITS {
                    return Err(DateError::parse(original, "at most seven fraction digits"));
                }
                parsed.fraction = Some(value * 10u32.pow((MAX_FRACTION_DIGITS - digits) as u32));
                end += 2;
            }
        }
    }
    used[start..end].fill(true);
    Ok(())
}

fn set_year(parsed: &mut Parsed, (value, digits): (u32, usize)) {
    parsed.year = Some(value as i32);
    parsed.short_year = digits <= 2;
}

fn read_date(date: &[Lexeme], parsed: &mut Parsed, original: &str) -> Result<(), DateError> {
    let fail = |reason: &str| DateError::parse(original, reason);
    let small = |value: u32| u8::try_from(value).map_err(|_| fail("day or month out of range"));

    let month_at = date.iter().position(|l| matches!(l, Lexeme::Month(_)));
    if let Some(at) = month_at {
        let before: Vec<_> = date[..at].iter().filter_map(|l| number(Some(l))).collect();
        let after: Vec<_> = date[at + 1..].iter().filter_map(|l| number(Some(l))).collect();
        if date[at + 1..].iter().any(|l| matches!(l, Lexeme::Month(_))) {
            return Err(fail("more than one month name"));
        }
        if let Lexeme::Month(month) = date[at] {
            parsed.month = Some(month);
        }
        match (before.as_slice(), after.as_slice()) {
            ([], []) => {}
            ([day], []) => parsed.day = Some(small(day.0)?),
            ([], [year]) => set_year(parsed, *year),
            ([day], [year]) | ([], [day, year]) => {
                parsed.day = Some(small(day.0)?);
                set_year(parsed, *year);
            }
            _ => return Err(fail("unrecognised date around the month name")),
        }
        return Ok(());
    }

    let numbers: Vec<_> = date.iter().filter_map(|l| number(Some(l))).collect();
    match numbers.as_slice() {
        [] => {}
        [(value, 8)] => {
            parsed.year = Some((value / 10_000) as i32);
            parsed.month = Some(small(value / 100 % 100)?);
            parsed.day = Some(small(value % 100)?);
        }
        [_] => return Err(fail("incomplete date")),
        [first, second] if first.1 >= 3 => {
            set_year(parsed, *first);
            parsed.month = Some(small(second.0)?);
        }
        [month, day] => {
            parsed.month = Some(small(month.0)?);
            parsed.day = Some(small(day.0)?);
        }
        [day, month, year] if day.1 <= 2 && year.1 >= 3 => {
            set_year(parsed, *year);
            parsed.month = Some(small(month.0)?);
            parsed.day = Some(small(day.0)?);
        }
        [year, month, day] => {
            set_year(parsed, *year);
            parsed.month = Some(small(month.0)?);
            parsed.day = Some(small(day.0)?);
        }
        _ => return Err(fail("too many numbers")),
    }
    Ok(())
}
