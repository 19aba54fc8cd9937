//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result, bail};

use shamsi_date::{DateTimeKind, PersianDateTime};

use crate::config::ShamsiConfig;

/// Resolved settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub datetime_format: String,
    pub date_format: String,
    pub year_month_format: String,
    pub clock: DateTimeKind,
}

/// Parses a clock name into the kind `now` should report.
pub fn parse_clock(s: &str) -> Result<DateTimeKind> {
    match s.to_lowercase().as_str() {
        "local" => Ok(DateTimeKind::Local),
        "utc" => Ok(DateTimeKind::Utc),
        other => bail!("unknown clock kind: {other:?} (expected \"local\" or \"utc\")"),
    }
}

/// Checks a date-time pattern by rendering a fixed value with it.
pub fn check_pattern(pattern: &str) -> Result<()> {
    PersianDateTime::MIN
        .format(pattern)
        .map(|_| ())
        .with_context(|| format!("unusable format pattern {pattern:?}"))
}

/// Builds [`Settings`] from the TOML configuration.
pub fn build_settings(cfg: &ShamsiConfig) -> Result<Settings> {
    check_pattern(&cfg.format.datetime).context("in [format] datetime")?;
    check_pattern(&cfg.format.date).context("in [format] date")?;
    Ok(Settings {
        datetime_format: cfg.format.datetime.clone(),
        date_format: cfg.format.date.clone(),
        year_month_format: cfg.format.year_month.clone(),
        clock: parse_clock(&cfg.clock.kind)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClockToml, FormatToml};

    #[test]
    fn clock_names() {
        assert_eq!(parse_clock("UTC").unwrap(), DateTimeKind::Utc);
        assert_eq!(parse_clock("local").unwrap(), DateTimeKind::Local);
        assert!(parse_clock("unspecified").is_err());
    }

    #[test]
    fn default_settings() {
        let settings = build_settings(&ShamsiConfig::default()).unwrap();
        assert_eq!(settings.datetime_format, "F");
        assert_eq!(settings.clock, DateTimeKind::Local);
    }

    #[test]
    fn bad_pattern_rejected() {
        let cfg = ShamsiConfig {
            format: FormatToml {
                datetime: "Q".to_string(),
                ..FormatToml::default()
            },
            clock: ClockToml::default(),
        };
        let err = build_settings(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("[format] datetime"));
    }
}
