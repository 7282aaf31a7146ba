//! # absalom-render
//!
//! HTML views for the Absalom Reckoning calendar: a single month as a
//! table fragment, or a whole year as a standalone document.

mod month;
mod style;
mod year;

pub use month::month_table;
pub use style::HtmlStyle;
pub use year::year_page;
