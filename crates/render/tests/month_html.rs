use absalom_render::{HtmlStyle, month_table, year_page};

/// 1 Calistril 1 AR is epoch day 32, an Oathday, so the first week row
/// carries three empty cells, and the 28-day month ends mid-week with
/// its final row open.
const CALISTRIL_1_AR: &str = r#"<h2>Calistril</h2>
<table>
<tr>
<th>Moonday</th>
<th>Toilday</th>
<th>Wealday</th>
<th>Oathday</th>
<th>Fireday</th>
<th>Starday</th>
<th>Sunday</th>
</tr>
<tr>
<td></td>
<td></td>
<td></td>
<td>1</td>
<td>2</td>
<td>3</td>
<td>4</td>
</tr>
<tr>
<td>5</td>
<td>6</td>
<td>7</td>
<td>8</td>
<td>9</td>
<td>10</td>
<td>11</td>
</tr>
<tr>
<td>12</td>
<td>13</td>
<td>14</td>
<td>15</td>
<td>16</td>
<td>17</td>
<td>18</td>
</tr>
<tr>
<td>19</td>
<td>20</td>
<td>21</td>
<td>22</td>
<td>23</td>
<td>24</td>
<td>25</td>
</tr>
<tr>
<td>26</td>
<td>27</td>
<td>28</td>
</table>"#;

#[test]
fn calistril_1_ar_golden() {
    assert_eq!(month_table(2, 1).unwrap(), CALISTRIL_1_AR);
}

#[test]
fn every_month_renders_every_day() {
    use absalom_calendar::days_in_month;
    for year in [1, 7, 8, 9] {
        for month in 1..=12u8 {
            let html = month_table(month, year).unwrap();
            let length = days_in_month(month, year).unwrap();
            for day in 1..=length {
                let cell = format!("<td>{day}</td>");
                assert!(
                    html.contains(&cell),
                    "month {month} of year {year} is missing day {day}"
                );
            }
            let too_far = format!("<td>{}</td>", length + 1);
            assert!(!html.contains(&too_far));
        }
    }
}

#[test]
fn year_page_embeds_the_month_tables() {
    let html = year_page(1, &HtmlStyle::default()).unwrap();
    assert!(html.contains(CALISTRIL_1_AR));
}

#[test]
fn week_rows_have_seven_cells() {
    let html = month_table(3, 1).unwrap();
    for row in html.split("<tr>\n").skip(1) {
        let cells = row.split("</tr>").next().unwrap();
        let n = cells.matches("<th>").count() + cells.matches("<td>").count();
        assert!(n <= 7, "row with more than seven cells: {cells}");
        if row.contains("</tr>") {
            assert_eq!(n, 7, "closed row without seven cells: {cells}");
        }
    }
}
