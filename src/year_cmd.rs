//! Year command: leap status and month table of one Persian year.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use shamsi_calendar::{PersianCulture, check_year, days_in_month, days_in_year, is_leap_year};
use shamsi_date::YearMonth;

use crate::cli::YearArgs;
use crate::months_cmd::or_dash;

/// Print the year summary followed by one line per month.
pub fn run(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year", year = args.year).entered();
    check_year(i64::from(args.year)).context("unsupported year")?;

    let culture = PersianCulture::get();
    let leap = is_leap_year(args.year);
    info!(leap, "checked year");

    let first = YearMonth::new(args.year, 1)?;
    println!(
        "{}\t{} days\t{}\tNowruz {}",
        args.year,
        days_in_year(args.year),
        if leap { "leap" } else { "common" },
        first.start_date()?
    );
    for month in 1..=12u8 {
        let ym = YearMonth::new(args.year, month)?;
        println!(
            "{month:02}\t{}\t{}\t{}",
            culture.month_name(month),
            days_in_month(args.year, month)?,
            or_dash(ym.start_date())
        );
    }
    Ok(())
}
