use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level shamsi configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ShamsiConfig {
    /// Output patterns.
    #[serde(default)]
    pub format: FormatToml,

    /// Clock settings for `now`.
    #[serde(default)]
    pub clock: ClockToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    #[serde(default = "default_datetime_format")]
    pub datetime: String,
    #[serde(default = "default_date_format")]
    pub date: String,
    #[serde(default = "default_year_month_format")]
    pub year_month: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            datetime: default_datetime_format(),
            date: default_date_format(),
            year_month: default_year_month_format(),
        }
    }
}

fn default_datetime_format() -> String {
    "F".to_string()
}
fn default_date_format() -> String {
    "D".to_string()
}
fn default_year_month_format() -> String {
    "yyyy/MM".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    #[serde(default = "default_clock_kind")]
    pub kind: String,
}

impl Default for ClockToml {
    fn default() -> Self {
        Self {
            kind: default_clock_kind(),
        }
    }
}

fn default_clock_kind() -> String {
    "local".to_string()
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<ShamsiConfig> {
    let Some(path) = path else {
        return Ok(ShamsiConfig::default());
    };
    info!(path = %path.display(), "loading configuration");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).with_context(|| format!("failed to parse TOML: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.format.datetime, "F");
        assert_eq!(cfg.format.date, "D");
        assert_eq!(cfg.format.year_month, "yyyy/MM");
        assert_eq!(cfg.clock.kind, "local");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\ndate = \"yyyy-MM-dd\"\n\n[clock]\nkind = \"utc\"").unwrap();
        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.format.date, "yyyy-MM-dd");
        assert_eq!(cfg.format.datetime, "F");
        assert_eq!(cfg.clock.kind, "utc");
    }

    #[test]
    fn unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\ntime = \"HH:mm\"").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML"));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
