use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Persian calendar conversion and formatting tool.
#[derive(Parser)]
#[command(
    name = "shamsi",
    version,
    about = "Persian (Solar Hijri) calendar conversion and formatting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current date and time in the Persian calendar.
    Now(NowArgs),
    /// Convert between Gregorian and Persian dates.
    Convert(ConvertArgs),
    /// Parse Persian date text and show what it resolves to.
    Parse(ParseArgs),
    /// List a run of Persian months.
    Months(MonthsArgs),
    /// Summarise one Persian year.
    Year(YearArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Use UTC instead of the configured clock.
    #[arg(long)]
    pub utc: bool,

    /// Override the output pattern from config.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date (`YYYY-MM-DD[THH:MM:SS]`), or Persian text with
    /// `--to-gregorian`.
    pub date: String,

    /// Read DATE as Persian and print the Gregorian date.
    #[arg(long = "to-gregorian", visible_alias = "tg")]
    pub to_gregorian: bool,

    /// Output pattern: a Persian pattern, or a strftime pattern with
    /// `--to-gregorian`.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Text to parse.
    pub text: String,

    /// Require the text to match this pattern exactly.
    #[arg(short, long)]
    pub exact: Option<String>,
}

/// Arguments for the `months` subcommand.
#[derive(clap::Args)]
#[command(group(ArgGroup::new("extent").required(true).args(["count", "end"])))]
pub struct MonthsArgs {
    /// First month, e.g. `1402/11`.
    pub start: String,

    /// Number of months to list.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Last month to list (inclusive).
    #[arg(short, long)]
    pub end: Option<String>,

    /// Override the year-month pattern from config.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Persian year to summarise.
    pub year: i32,
}
