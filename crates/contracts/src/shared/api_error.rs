use serde::{Deserialize, Serialize};

/// Error body the backend returns on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic message used when the body carries nothing readable
pub fn status_message(status: u16) -> String {
    format!("HTTP error! status: {}", status)
}

/// `message` of a JSON error body, when present and non-empty
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Human-readable message for a failed response.
///
/// Uses the `message` of a JSON error body when present and non-empty,
/// otherwise `fallback`, otherwise the generic status message.
pub fn error_message_for_status(status: u16, body: &str, fallback: Option<&str>) -> String {
    parse_error_message(body)
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_else(|| status_message(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        let msg = error_message_for_status(400, r#"{"message":"Store is closed"}"#, None);
        assert_eq!(msg, "Store is closed");
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"message":"Invalid store","status":400}"#),
            Some("Invalid store".to_string())
        );
        assert_eq!(parse_error_message(r#"{"message":null}"#), None);
        assert_eq!(parse_error_message("not json"), None);
    }

    #[test]
    fn test_unparseable_body() {
        assert_eq!(
            error_message_for_status(502, "<html>Bad gateway</html>", None),
            "HTTP error! status: 502"
        );
        assert_eq!(error_message_for_status(500, "", None), "HTTP error! status: 500");
    }

    #[test]
    fn test_body_without_message_uses_fallback() {
        assert_eq!(
            error_message_for_status(500, r#"{"error":"boom"}"#, Some("Failed to load page 3.")),
            "Failed to load page 3."
        );
        assert_eq!(
            error_message_for_status(500, r#"{"message":""}"#, None),
            "HTTP error! status: 500"
        );
    }
}
