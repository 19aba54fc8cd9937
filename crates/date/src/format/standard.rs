//! Named format codes and single-letter standard formats.

use std::borrow::Cow;

use crate::error::DateError;

/// Culture-invariant formats rendered from the Gregorian instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gregorian {
    /// `o`/`O`: ISO 8601 with seven fraction digits and a kind suffix.
    RoundTrip,
    /// `s`: ISO 8601 without fraction or suffix.
    Sortable,
    /// `u`: `yyyy-MM-dd HH:mm:ssZ`.
    UniversalSortable,
    /// `r`/`R`: RFC 1123.
    Rfc1123,
}

/// What a format string resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Standard<'a> {
    /// A custom pattern for the Persian engine.
    Custom(Cow<'a, str>),
    Gregorian(Gregorian),
}

pub(crate) const SHORT_DATE: &str = "yyyy/MM/dd";
pub(crate) const LONG_DATE: &str = "dddd، d MMMM، yyyy";
pub(crate) const SHORT_TIME: &str = "HH:mm";
pub(crate) const LONG_TIME: &str = "HH:mm:ss";
pub(crate) const YEAR_MONTH: &str = "MMMM، yyyy";
pub(crate) const MONTH_DAY: &str = "d MMMM";
pub(crate) const COMPACT: &str = "yyyyMMdd";

/// Joins the date and time halves of a two-letter code.
const PAIR_SEPARATOR: &str = " - ";

fn single(code: char) -> Option<&'static str> {
    Some(match code {
        'd' => SHORT_DATE,
        'D' => LONG_DATE,
        't' => SHORT_TIME,
        'T' => LONG_TIME,
        _ => return None,
    })
}

/// Resolves `format` into a custom pattern or an invariant format.
///
/// The Persian named codes come first: `d`, `D`, `t`, `T`, every
/// two-letter pairing of a date code with a time code in either order,
/// `f` (`Dt`), `F` (`DT`), `y`/`Y` and `N`. The remaining single letters
/// are the general standard formats. An empty format is `F`. Longer
/// strings are custom patterns.
///
/// # Errors
///
/// Returns [`DateError::InvalidFormat`] for an unknown single letter.
pub(crate) fn expand(format: &str) -> Result<Standard<'_>, DateError> {
    let mut chars = format.chars();
    let (first, second, rest) = (chars.next(), chars.next(), chars.next());
    match (first, second, rest) {
        (None, _, _) => expand("F"),
        (Some(a), Some(b), None) => match (single(a), single(b)) {
            (Some(x), Some(y)) if is_date(a) != is_date(b) => Ok(Standard::Custom(Cow::Owned(
                format!("{x}{PAIR_SEPARATOR}{y}"),
            ))),
            _ => Ok(Standard::Custom(Cow::Borrowed(format))),
        },
        (Some(code), None, _) => match single(code) {
            Some(pattern) => Ok(Standard::Custom(Cow::Borrowed(pattern))),
            None => expand_letter(format, code),
        },
        _ => Ok(Standard::Custom(Cow::Borrowed(format))),
    }
}

fn expand_letter(format: &str, code: char) -> Result<Standard<'_>, DateError> {
    let standard = match code {
        'f' => return expand("Dt"),
        'F' => return expand("DT"),
        'y' | 'Y' => Standard::Custom(Cow::Borrowed(YEAR_MONTH)),
        'N' => Standard::Custom(Cow::Borrowed(COMPACT)),
        'g' => Standard::Custom(Cow::Owned(format!("{SHORT_DATE} {SHORT_TIME}"))),
        'G' => Standard::Custom(Cow::Owned(format!("{SHORT_DATE} {LONG_TIME}"))),
        'm' | 'M' => Standard::Custom(Cow::Borrowed(MONTH_DAY)),
        'o' | 'O' => Standard::Gregorian(Gregorian::RoundTrip),
        's' => Standard::Gregorian(Gregorian::Sortable),
        'u' => Standard::Gregorian(Gregorian::UniversalSortable),
        'r' | 'R' => Standard::Gregorian(Gregorian::Rfc1123),
        _ => return Err(DateError::invalid_format(format, "unknown standard format")),
    };
    Ok(standard)
}

fn is_date(code: char) -> bool {
    matches!(code, 'd' | 'D')
}
