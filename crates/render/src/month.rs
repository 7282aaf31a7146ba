//! HTML month table.

use absalom_calendar::{CalendarError, Date, Weekday, days_in_month};

/// Renders one month as an HTML fragment: an `<h2>` heading with the
/// month name and a `<table>` with a weekday header row and one row per
/// week. Weeks start on Moonday; cells before the first of the month are
/// empty. Rows close on Sunday, so a month ending mid-week leaves its
/// final row open.
///
/// # Errors
///
/// Returns [`CalendarError`] if `month` is not in 1..=12 or `year` is
/// below 1.
pub fn month_table(month: u8, year: i32) -> Result<String, CalendarError> {
    let first = Date::new(year, month, 1)?;
    let length = days_in_month(month, year)?;
    let start = first.epoch_day().get();
    let end = start + i64::from(length) - 1;

    let mut html = String::new();
    html.push_str(&format!("<h2>{}</h2>\n", first.month_name()));
    html.push_str("<table>\n");

    html.push_str("<tr>\n");
    for weekday in Weekday::ALL {
        html.push_str(&format!("<th>{weekday}</th>\n"));
    }
    html.push_str("</tr>\n");

    // Back up to the Moonday on or before the first of the month.
    let mut today = start + 1 - i64::from(first.weekday().number());
    while today <= end {
        if weekday_number(today) == 1 {
            html.push_str("<tr>\n");
        }
        if today < start {
            html.push_str("<td></td>\n");
        } else {
            html.push_str(&format!("<td>{}</td>\n", today - start + 1));
        }
        if weekday_number(today) == 7 {
            html.push_str("</tr>\n");
        }
        today += 1;
    }

    html.push_str("</table>");
    Ok(html)
}

/// Weekday number (1..=7) for a raw day count. Works on the padding days
/// before the first of the month, which may sit below epoch day 1.
fn weekday_number(day: i64) -> i64 {
    (day - 1).rem_euclid(7) + 1
}
