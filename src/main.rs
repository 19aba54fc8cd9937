mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod months_cmd;
mod now_cmd;
mod parse_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let settings = convert::build_settings(&config)?;
    match cli.command {
        Command::Now(args) => now_cmd::run(args, &settings),
        Command::Convert(args) => convert_cmd::run(args, &settings),
        Command::Parse(args) => parse_cmd::run(args, &settings),
        Command::Months(args) => months_cmd::run(args, &settings),
        Command::Year(args) => year_cmd::run(args),
    }
}
