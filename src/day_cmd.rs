//! Day query: weekday and moon phase for a single date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use absalom_calendar::Date;
use absalom_moon::moon_phase;

/// Prints `"<weekday> - <moon phase>"` for the given date.
pub fn run(year: i32, month: u8, day: u8) -> Result<()> {
    let _cmd = info_span!("day").entered();

    let date = Date::new(year, month, day)
        .with_context(|| format!("invalid date: year {year}, month {month}, day {day}"))?;
    let epoch = date.epoch_day();
    info!(epoch_day = epoch.get(), "resolved date");

    println!("{} - {}", date.weekday(), moon_phase(epoch));
    Ok(())
}
