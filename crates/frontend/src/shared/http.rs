//! Authenticated JSON requests against the sales backend.

use contracts::shared::api_error::error_message_for_status;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::api_url;

/// Source of the bearer credential attached to every request
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

impl CredentialProvider for Option<String> {
    fn bearer_token(&self) -> Option<String> {
        self.clone().filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// No token yet: callers treat this as a no-op
    #[error("not signed in")]
    NoCredential,
    #[error("{0}")]
    Network(String),
    #[error("{}", http_message(.status, .body))]
    Http { status: u16, body: String },
    #[error("{0}")]
    Decode(String),
    /// Rejected before anything was sent
    #[error("{0}")]
    InvalidRequest(String),
}

fn http_message(status: &u16, body: &str) -> String {
    error_message_for_status(*status, body, None)
}

impl FetchError {
    pub fn is_no_credential(&self) -> bool {
        matches!(self, FetchError::NoCredential)
    }

    /// Display message, with `fallback` replacing the generic status text
    /// when an HTTP error body carries no message of its own
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            FetchError::Http { status, body } => {
                error_message_for_status(*status, body, Some(fallback))
            }
            other => other.to_string(),
        }
    }
}

fn bearer(creds: &impl CredentialProvider) -> Result<String, FetchError> {
    creds
        .bearer_token()
        .map(|t| format!("Bearer {}", t))
        .ok_or(FetchError::NoCredential)
}

async fn read_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;

    if !response_ok(status) {
        return Err(FetchError::Http { status, body });
    }
    Ok(body)
}

fn response_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(format!("Failed to parse response: {}", e)))
}

/// Decode a body, treating an empty one as `T::default()`
pub fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> Result<T, FetchError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    decode(body)
}

async fn get_body(
    creds: &impl CredentialProvider,
    path: &str,
    params: &[(&str, String)],
) -> Result<String, FetchError> {
    let auth = bearer(creds)?;
    let url = api_url(path, params);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Request failed: {}", e)))?;

    read_body(response).await
}

pub async fn get_json<T: DeserializeOwned>(
    creds: &impl CredentialProvider,
    path: &str,
    params: &[(&str, String)],
) -> Result<T, FetchError> {
    let body = get_body(creds, path, params).await?;
    decode(&body)
}

/// Like [`get_json`], but an empty 2xx body yields `T::default()`
pub async fn get_json_or_default<T: DeserializeOwned + Default>(
    creds: &impl CredentialProvider,
    path: &str,
    params: &[(&str, String)],
) -> Result<T, FetchError> {
    let body = get_body(creds, path, params).await?;
    decode_or_default(&body)
}

/// POST a JSON body and return the raw response text of a 2xx reply
pub async fn post_json<B: Serialize>(
    creds: &impl CredentialProvider,
    path: &str,
    body: &B,
) -> Result<String, FetchError> {
    let auth = bearer(creds)?;
    let url = api_url(path, &[]);
    log::debug!("POST {}", url);

    let request = Request::post(&url)
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| FetchError::InvalidRequest(format!("Failed to encode request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Request failed: {}", e)))?;

    read_body(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Counter {
        #[serde(default)]
        count: u32,
    }

    #[test]
    fn test_http_error_display() {
        let err = FetchError::Http {
            status: 400,
            body: r#"{"message":"Tons must be positive"}"#.into(),
        };
        assert_eq!(err.to_string(), "Tons must be positive");
        assert_eq!(err.message_or("Failed to load page 2."), "Tons must be positive");

        let err = FetchError::Http {
            status: 503,
            body: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert_eq!(err.message_or("Failed to load page 2."), "Failed to load page 2.");
    }

    #[test]
    fn test_network_error_ignores_fallback() {
        let err = FetchError::Network("Request failed: offline".into());
        assert_eq!(err.message_or("fallback"), "Request failed: offline");
    }

    #[test]
    fn test_missing_credential() {
        assert_eq!(bearer(&None::<String>), Err(FetchError::NoCredential));
        assert_eq!(bearer(&Some("  ".to_string())), Err(FetchError::NoCredential));
        assert_eq!(bearer(&Some("abc".to_string())), Ok("Bearer abc".to_string()));
        assert!(FetchError::NoCredential.is_no_credential());
    }

    #[test]
    fn test_empty_body_is_default() {
        assert_eq!(decode_or_default::<Counter>("").unwrap(), Counter::default());
        assert_eq!(decode_or_default::<Counter>("  \n").unwrap(), Counter::default());
        assert_eq!(decode_or_default::<Counter>(r#"{"count":3}"#).unwrap().count, 3);
        assert!(matches!(
            decode_or_default::<Counter>("<html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_response_ok_range() {
        assert!(response_ok(200));
        assert!(response_ok(204));
        assert!(!response_ok(302));
        assert!(!response_ok(404));
    }
}
