use chrono::{DateTime, NaiveDateTime};

pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Formats a backend timestamp for display. The backend is not consistent
/// about offsets, so both RFC 3339 and bare date-time strings are accepted;
/// anything else is shown as-is.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
