//! Month view: one month rendered as an HTML table.

use anyhow::{Context, Result};
use tracing::info_span;

use absalom_render::month_table;

/// Prints the HTML table for the given month.
pub fn run(year: i32, month: u8) -> Result<()> {
    let _cmd = info_span!("month").entered();

    let html = month_table(month, year)
        .with_context(|| format!("cannot render month {month} of year {year}"))?;
    println!("{html}");
    Ok(())
}
