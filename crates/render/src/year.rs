//! Full-year HTML document.

use absalom_calendar::CalendarError;
use tracing::debug;

use crate::month::month_table;
use crate::style::HtmlStyle;

/// Renders a complete HTML document for `year`: a `<title>` and `<h1>`
/// of the form `"{year} AR"`, a `<style>` block sizing the day cells,
/// and all twelve month tables.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is below 1.
pub fn year_page(year: i32, style: &HtmlStyle) -> Result<String, CalendarError> {
    debug!(year, "rendering year page");
    let suffix = style.title_suffix();

    let mut html = String::new();
    html.push_str(&format!(
        "<html>\n<head>\n<title>{year} {suffix}</title>\n</head>\n<body>\n\n"
    ));
    html.push_str(&format!(
        "<style>td {{ width: {}px; height: {}px; border: 1px solid black; \
         text-align: left; vertical-align: top; }}</style>\n\n",
        style.cell_width(),
        style.cell_height()
    ));
    html.push_str(&format!("<h1>{year} {suffix}</h1>\n\n"));

    for month in 1..=12 {
        html.push_str(&month_table(month, year)?);
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use absalom_calendar::MONTH_NAMES;

    #[test]
    fn title_and_heading() {
        let html = year_page(8, &HtmlStyle::default()).unwrap();
        assert!(html.starts_with("<html>\n<head>\n<title>8 AR</title>\n"));
        assert!(html.contains("<h1>8 AR</h1>\n"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn all_twelve_months_present_in_order() {
        let html = year_page(1, &HtmlStyle::default()).unwrap();
        let mut pos = 0;
        for name in MONTH_NAMES {
            let heading = format!("<h2>{name}</h2>");
            let found = html[pos..]
                .find(&heading)
                .unwrap_or_else(|| panic!("missing heading {heading}"));
            pos += found;
        }
        assert_eq!(html.matches("<h2>").count(), 12);
        assert_eq!(html.matches("</table>").count(), 12);
    }

    #[test]
    fn style_block_uses_cell_dimensions() {
        let html = year_page(1, &HtmlStyle::default()).unwrap();
        assert!(html.contains(
            "<style>td { width: 100px; height: 100px; border: 1px solid black; \
             text-align: left; vertical-align: top; }</style>"
        ));

        let custom = HtmlStyle::default().with_cell_width(80).with_cell_height(60);
        let html = year_page(1, &custom).unwrap();
        assert!(html.contains("width: 80px; height: 60px;"));
    }

    #[test]
    fn custom_title_suffix() {
        let style = HtmlStyle::default().with_title_suffix("Absalom Reckoning");
        let html = year_page(3, &style).unwrap();
        assert!(html.contains("<title>3 Absalom Reckoning</title>"));
        assert!(html.contains("<h1>3 Absalom Reckoning</h1>"));
    }

    #[test]
    fn invalid_year_rejected() {
        assert_eq!(
            year_page(0, &HtmlStyle::default()).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
    }
}
