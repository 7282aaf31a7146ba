use std::path::PathBuf;

use clap::Parser;

/// Absalom Reckoning calendar and moon almanac.
///
/// The output mode follows the number of positional arguments: a full
/// date prints the weekday and moon phase, a year and month print an
/// HTML month table, and a year alone prints a full HTML year document.
#[derive(Parser)]
#[command(
    name = "absalom",
    version,
    about = "Calendar, weekday, and moon phase almanac for Absalom Reckoning"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year in Absalom Reckoning.
    pub year: i32,

    /// Month (1..=12); selects the HTML month view unless a day follows.
    pub month: Option<u8>,

    /// Day of the month; prints "<weekday> - <moon phase>".
    #[arg(requires = "month")]
    pub day: Option<u8>,
}
