//! Months command: list consecutive Persian months.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use shamsi_date::{DateError, YearMonth};

use crate::cli::MonthsArgs;
use crate::convert::Settings;

/// Print one line per month: the formatted month, its length and Gregorian span.
pub fn run(args: MonthsArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("months").entered();
    let start = YearMonth::parse(&args.start)
        .with_context(|| format!("failed to read start month {:?}", args.start))?;
    let range = match (args.count, args.end.as_deref()) {
        (Some(count), _) => YearMonth::range(start, count)
            .with_context(|| format!("cannot list {count} months from {start}"))?,
        (None, Some(end)) => {
            let end = YearMonth::parse(end)
                .with_context(|| format!("failed to read end month {end:?}"))?;
            if end < start {
                bail!("end month {end} is before start month {start}");
            }
            YearMonth::range_inclusive(start, end)
        }
        (None, None) => bail!("either --count or --end is required"),
    };
    info!(start = %start, n = range.len(), "listing months");

    let pattern = args.format.as_deref().unwrap_or(&settings.year_month_format);
    for month in range {
        println!(
            "{}\t{}\t{}\t{}",
            month.format(pattern),
            month.days_in_month(),
            or_dash(month.start_date()),
            or_dash(month.end_date())
        );
    }
    Ok(())
}

/// Months at the end of the supported range have no Gregorian counterpart.
pub(crate) fn or_dash(date: Result<chrono::NaiveDate, DateError>) -> String {
    date.map_or_else(|_| "-".to_string(), |d| d.to_string())
}
