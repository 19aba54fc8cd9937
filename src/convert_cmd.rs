//! Convert command: Gregorian to Persian, or back with `--to-gregorian`.

use std::fmt::Write;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, info_span};

use shamsi_date::PersianDateTime;

use crate::cli::ConvertArgs;
use crate::convert::Settings;

const GREGORIAN_DATE: &str = "%Y-%m-%d";
const GREGORIAN_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Run the conversion.
pub fn run(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let output = if args.to_gregorian {
        let persian = PersianDateTime::parse(&args.date)
            .with_context(|| format!("failed to read Persian date {:?}", args.date))?;
        info!(persian = %persian, "parsed input");
        let pattern = args.format.as_deref().unwrap_or(GREGORIAN_DATE);
        strftime(persian.to_gregorian(), pattern)?
    } else {
        let instant = read_gregorian(&args.date)?;
        info!(gregorian = %instant, "parsed input");
        let pattern = args.format.as_deref().unwrap_or(&settings.date_format);
        PersianDateTime::from(instant).format(pattern)?
    };
    println!("{output}");
    Ok(())
}

/// Reads a Gregorian date or date-time and checks it against the supported range.
fn read_gregorian(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    let instant = match NaiveDateTime::parse_from_str(text, GREGORIAN_DATETIME) {
        Ok(instant) => instant,
        Err(e) => {
            debug!(error = %e, "not a date-time, trying date only");
            NaiveDate::parse_from_str(text, GREGORIAN_DATE)
                .with_context(|| format!("failed to read Gregorian date {text:?}"))?
                .and_time(chrono::NaiveTime::MIN)
        }
    };
    if instant < PersianDateTime::MIN.instant() || instant > PersianDateTime::MAX.instant() {
        bail!(
            "{instant} is outside the supported range {} to {}",
            PersianDateTime::MIN.instant(),
            PersianDateTime::MAX.instant()
        );
    }
    Ok(instant)
}

fn strftime(instant: NaiveDateTime, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern))
        .map_err(|_| anyhow::anyhow!("invalid strftime pattern {pattern:?}"))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_date_and_datetime() {
        let date = read_gregorian("2023-07-29").unwrap();
        assert_eq!(date.to_string(), "2023-07-29 00:00:00");
        let datetime = read_gregorian(" 2023-07-29T14:05:09 ").unwrap();
        assert_eq!(datetime.to_string(), "2023-07-29 14:05:09");
    }

    #[test]
    fn rejects_dates_before_the_epoch() {
        let err = read_gregorian("0600-01-01").unwrap_err();
        assert!(err.to_string().contains("outside the supported range"));
        assert!(read_gregorian("not a date").is_err());
    }

    #[test]
    fn strftime_rejects_bad_specifier() {
        let instant = read_gregorian("2024-03-20").unwrap();
        assert_eq!(strftime(instant, "%d.%m.%Y").unwrap(), "20.03.2024");
        assert!(strftime(instant, "%Q").is_err());
    }
}
