//! Helpers for building backend URLs.

use super::config::config;

/// Base URL of the sales backend, without a trailing slash
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path and query parameters.
///
/// Parameter values are percent-encoded; an empty parameter list adds no `?`.
pub fn api_url(path: &str, params: &[(&str, String)]) -> String {
    build_url(&api_base(), path, params)
}

pub fn build_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base, path);
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            build_url("https://api.example", "/store/names", &[]),
            "https://api.example/store/names"
        );
    }

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url(
            "https://api.example",
            "/sales/getFilteredSales",
            &[
                ("page", "0".to_string()),
                ("size", "15".to_string()),
                ("storeName", "North & East".to_string()),
            ],
        );
        assert_eq!(
            url,
            "https://api.example/sales/getFilteredSales?page=0&size=15&storeName=North%20%26%20East"
        );
    }
}
