mod cli;
mod config;
mod day_cmd;
mod logging;
mod month_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

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

    match (cli.month, cli.day) {
        (Some(month), Some(day)) => day_cmd::run(cli.year, month, day),
        (Some(month), None) => month_cmd::run(cli.year, month),
        // clap enforces that a day never arrives without a month
        (None, _) => year_cmd::run(cli.year, &config::build_style(&config)),
    }
}
