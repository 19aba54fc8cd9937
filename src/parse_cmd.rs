//! Parse command: resolve Persian date text leniently or against a pattern.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use shamsi_date::PersianDateTime;

use crate::cli::ParseArgs;
use crate::convert::Settings;

/// Parse the text and print the value, its Gregorian instant and kind.
pub fn run(args: ParseArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("parse").entered();
    let value = match args.exact.as_deref() {
        Some(pattern) => PersianDateTime::parse_exact(&args.text, pattern)
            .with_context(|| format!("text does not match pattern {pattern:?}"))?,
        None => PersianDateTime::parse(&args.text).context("unrecognised date text")?,
    };
    info!(ticks = value.ticks(), "parsed");

    println!(
        "{}\t{}\t{}",
        value.format(&settings.datetime_format)?,
        value.to_gregorian().format("%Y-%m-%dT%H:%M:%S%.f"),
        value.kind()
    );
    Ok(())
}
