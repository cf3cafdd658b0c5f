use chrono::{Local, NaiveDate};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// `Jan 02, 2025`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `Thursday, January 2, 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses the value of an `<input type="date">`; blank means "no date".
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
