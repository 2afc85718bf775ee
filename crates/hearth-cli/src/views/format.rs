//! Shared value formatting for every rendering context.

use chrono::{DateTime, NaiveDate, Utc};

/// Render a budget amount with thousands separators, e.g. `$28,000` or
/// `$1,234.50`. Callers are responsible for suppressing the line entirely
/// when the amount is zero ("not set").
#[must_use]
pub fn format_currency(amount: f64, symbol: &str) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();
    if fraction == 0 {
        format!("{symbol}{}", group_thousands(whole))
    } else {
        format!("{symbol}{}.{fraction:02}", group_thousands(whole))
    }
}

/// Insert `,` separators into an integer: `28000` -> `"28,000"`.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render an optional date, falling back to an explicit placeholder —
/// optional fields are never silently omitted.
#[must_use]
pub fn format_date(date: Option<NaiveDate>, format: &str, placeholder: &str) -> String {
    date.map_or_else(
        || placeholder.to_string(),
        |d| d.format(format).to_string(),
    )
}

/// Render a timestamp's calendar date (update feeds show the day, not the
/// time of day).
#[must_use]
pub fn format_timestamp_date(timestamp: DateTime<Utc>, format: &str) -> String {
    timestamp.date_naive().format(format).to_string()
}
