//! Year view: all twelve months as a standalone HTML document.

use anyhow::{Context, Result};
use tracing::info_span;

use absalom_render::{HtmlStyle, year_page};

/// Prints the full HTML document for the given year.
pub fn run(year: i32, style: &HtmlStyle) -> Result<()> {
    let _cmd = info_span!("year").entered();

    let html = year_page(year, style).with_context(|| format!("cannot render year {year}"))?;
    println!("{html}");
    Ok(())
}
