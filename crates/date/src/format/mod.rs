//! Format and parse engine shared by the value types.
//!
//! Formatting resolves a format string into either a custom pattern or a
//! culture-invariant Gregorian form ([`standard`]), tokenizes custom
//! patterns ([`pattern`]) and renders them from precomputed fields
//! ([`render`]). Parsing normalises the input ([`normalize`]) and then runs
//! either the pattern-driven parser ([`exact`]) or the free-form one
//! ([`lenient`]); both produce [`Parsed`] fields resolved to an instant.

mod exact;
mod lenient;
mod normalize;
mod parsed;
mod pattern;
mod render;
mod standard;
pub(crate) mod year_month;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use shamsi_calendar::{max_gregorian, min_gregorian};
use tracing::{debug, trace};

pub use normalize::{normalize_digits, normalize_input};
pub(crate) use render::Fields;

use self::parsed::Parsed;
use self::standard::{Gregorian, Standard};
use crate::error::DateError;
use crate::kind::DateTimeKind;

/// Formats `fields` with a named code, standard letter or custom pattern.
pub(crate) fn format_fields(fields: &Fields, format: &str) -> Result<String, DateError> {
    match standard::expand(format)? {
        Standard::Custom(pattern) => {
            trace!(format, pattern = %pattern, "formatting with custom pattern");
            let tokens = pattern::tokenize(&pattern)?;
            Ok(render::render(&tokens, fields))
        }
        Standard::Gregorian(gregorian) => Ok(render::gregorian(gregorian, fields)),
    }
}

/// Parses free-form text.
pub(crate) fn parse_lenient(text: &str) -> Result<(NaiveDateTime, DateTimeKind), DateError> {
    let input = normalize_input(text);
    if input != text {
        debug!(normalized = %input, "normalized parse input");
    }
    lenient::parse(&input, text)?.resolve(text)
}

/// Parses text that must match `format` exactly.
pub(crate) fn parse_exact(
    text: &str,
    format: &str,
) -> Result<(NaiveDateTime, DateTimeKind), DateError> {
    let input = normalize_input(text);
    match standard::expand(format)? {
        Standard::Custom(pattern) => {
            let tokens = pattern::tokenize(&pattern)?;
            let parsed: Parsed = exact::parse(&input, &tokens, text)?;
            parsed.resolve(text)
        }
        Standard::Gregorian(gregorian) => {
            let (instant, kind) = parse_gregorian(&input, gregorian, text)?;
            if instant.date() < min_gregorian() || instant.date() > max_gregorian() {
                return Err(DateError::InstantOutOfRange { instant });
            }
            Ok((instant, kind))
        }
    }
}

/// Parses one of the culture-invariant Gregorian forms.
fn parse_gregorian(
    input: &str,
    format: Gregorian,
    original: &str,
) -> Result<(NaiveDateTime, DateTimeKind), DateError> {
    let fail = |e: chrono::ParseError| DateError::parse(original, e.to_string());
    match format {
        Gregorian::RoundTrip => {
            if let Some(utc) = input.strip_suffix('Z') {
                let instant = NaiveDateTime::parse_from_str(utc, "%Y-%m-%dT%H:%M:%S%.f")
                    .map_err(fail)?;
                return Ok((instant, DateTimeKind::Utc));
            }
            match NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
                Ok(instant) => Ok((instant, DateTimeKind::Unspecified)),
                Err(_) => {
                    let fixed = DateTime::<FixedOffset>::parse_from_str(
                        input,
                        "%Y-%m-%dT%H:%M:%S%.f%:z",
                    )
                    .map_err(fail)?;
                    let local = fixed.with_timezone(&chrono::Local).naive_local();
                    Ok((local, DateTimeKind::Local))
                }
            }
        }
        Gregorian::Sortable => NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
            .map(|instant| (instant, DateTimeKind::Unspecified))
            .map_err(fail),
        Gregorian::UniversalSortable => NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%SZ")
            .map(|instant| (instant, DateTimeKind::Utc))
            .map_err(fail),
        Gregorian::Rfc1123 => NaiveDateTime::parse_from_str(input, "%a, %d %b %Y %H:%M:%S GMT")
            .map(|instant| (instant, DateTimeKind::Utc))
            .map_err(fail),
    }
}
