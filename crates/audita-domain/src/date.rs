//! Date display helpers

use chrono::NaiveDate;

/// Display format for dates in reports (day/month/year, as written in
/// Colombian clinical records)
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Format an optional date for display, using `unknown` for `None`
///
/// # Examples
///
/// ```
/// use audita_domain::{format_date, NaiveDate};
///
/// let date = NaiveDate::from_ymd_opt(2020, 5, 15);
/// assert_eq!(format_date(date, "unknown"), "15/05/2020");
/// assert_eq!(format_date(None, "unknown"), "unknown");
/// ```
pub fn format_date(date: Option<NaiveDate>, unknown: &str) -> String {
    match date {
        Some(d) => d.format(DATE_DISPLAY_FORMAT).to_string(),
        None => unknown.to_string(),
    }
}
