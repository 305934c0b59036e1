pub mod author;
pub mod book;
pub mod book_instance;

use chrono::NaiveDate;

/// Render a stored `YYYY-MM-DD` date for display, e.g. "December 16, 1775".
/// Unparseable values come back verbatim.
pub fn format_date(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}
