/// Utilities for date formatting
///
/// Provides consistent date formatting across the sales screens
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a backend timestamp into a calendar date.
/// Accepts RFC 3339, naive ISO datetimes (with or without fraction) and plain dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a sale timestamp for the records table
/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar '24"
pub fn format_sale_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(date) => date.format("%d %b '%y").to_string(),
        None => raw.to_string(),
    }
}

/// Format a date for range captions
/// Example: 2024-03-05 -> "Mar 5, 2024"
pub fn format_caption_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Value of an `<input type="date">` (yyyy-mm-dd)
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the value of an `<input type="date">`; an empty input is `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_sale_date() {
        assert_eq!(format_sale_date("2024-03-15T14:02:26.123Z"), "15 Mar '24");
        assert_eq!(format_sale_date("2024-03-05T14:02:26"), "05 Mar '24");
        assert_eq!(format_sale_date("2024-12-31T23:59:59.5"), "31 Dec '24");
        assert_eq!(format_sale_date("2024-03-15"), "15 Mar '24");
    }

    #[test]
    fn test_caption_date() {
        assert_eq!(format_caption_date(date(2024, 3, 5)), "Mar 5, 2024");
        assert_eq!(format_caption_date(date(2026, 10, 17)), "Oct 17, 2026");
    }

    #[test]
    fn test_input_date_round_trip() {
        assert_eq!(format_input_date(Some(date(2026, 1, 9))), "2026-01-09");
        assert_eq!(format_input_date(None), "");
        assert_eq!(parse_input_date("2026-01-09"), Some(date(2026, 1, 9)));
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_sale_date("invalid"), "invalid");
        assert_eq!(parse_timestamp("15.03.2024"), None);
    }
}
