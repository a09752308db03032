/// Placeholder shown for values the backend left out
pub const NOT_AVAILABLE: &str = "N/A";

/// Tons with two decimals, as shown in tables and the total card
pub fn format_tons(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}
