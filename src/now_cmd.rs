//! Now command: print the current Persian date and time.

use anyhow::Result;
use tracing::{info, info_span};

use shamsi_date::{DateTimeKind, PersianDateTime};

use crate::cli::NowArgs;
use crate::convert::{Settings, check_pattern};

/// Print the current instant.
pub fn run(args: NowArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("now").entered();
    let pattern = args.format.as_deref().unwrap_or(&settings.datetime_format);
    check_pattern(pattern)?;

    let now = if args.utc || settings.clock == DateTimeKind::Utc {
        PersianDateTime::utc_now()
    } else {
        PersianDateTime::now()
    };
    info!(kind = %now.kind(), gregorian = %now.to_gregorian(), "read clock");

    println!("{}", now.format(pattern)?);
    Ok(())
}
