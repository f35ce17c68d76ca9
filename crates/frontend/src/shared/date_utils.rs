/// Utilities for date formatting
///
/// Mock records carry `NaiveDate`s; tables show them as "15 Mar 2024".
use chrono::{Days, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Date `offset` days from `base`, negative offsets go back in time
pub fn shift_days(base: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        base.checked_add_days(days)
    } else {
        base.checked_sub_days(days)
    };
    shifted.unwrap_or(base)
}

/// Shorthand for [`shift_days`] from today, used by mock data
pub fn days_from_today(offset: i64) -> NaiveDate {
    shift_days(today(), offset)
}

/// Format a date as DD Mon YYYY
/// Example: 2024-03-15 -> "15 Mar 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// Relative wording for a day offset from today
/// Example: 30 -> "in 30 days", -2 -> "2 days ago"
pub fn format_days_left(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 1 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

/// Parse a YYYY-MM-DD form value
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
