use crate::models::ErrorResponse;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur when talking to one of the remote services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Join a service base URL and an absolute path
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Pass 2xx responses through, turn anything else into `ApiError`
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(api_error(status, response.text().await))
}

/// Build `ApiError` from a failed response, keeping the status even when the
/// body could not be read
fn api_error<E: Display>(status: StatusCode, body: Result<String, E>) -> ServiceError {
    let body = body.unwrap_or_else(|e| {
        tracing::warn!("Unable to read error body for {}: {}", status, e);
        String::new()
    });
    let message = remote_message(status, &body);
    tracing::warn!("Remote service returned {}: {}", status, message);

    ServiceError::ApiError {
        status: status.as_u16(),
        message,
    }
}

/// Decode a successful response body
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T, ServiceError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ServiceError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}

/// Extract the caller-facing message from an error response body
///
/// Prefers the `detail` field, then the raw body, then the status reason.
pub fn remote_message(status: StatusCode, body: &str) -> String {
    if let Ok(error) = serde_json::from_str::<ErrorResponse>(body) {
        return error.message();
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(endpoint("http://users:8000/", "/users"), "http://users:8000/users");
        assert_eq!(endpoint("http://users:8000", "/users"), "http://users:8000/users");
        assert_eq!(endpoint("http://prefs:8080/", "/"), "http://prefs:8080/");
    }

    #[test]
    fn test_remote_message_prefers_detail() {
        let msg = remote_message(StatusCode::CONFLICT, r#"{"detail":"Email already registered"}"#);
        assert_eq!(msg, "Email already registered");
    }

    #[test]
    fn test_remote_message_falls_back_to_body() {
        let msg = remote_message(StatusCode::BAD_GATEWAY, "  upstream down\n");
        assert_eq!(msg, "upstream down");

        let msg = remote_message(StatusCode::BAD_REQUEST, r#"{"error":"nope"}"#);
        assert_eq!(msg, r#"{"error":"nope"}"#);
    }

    #[test]
    fn test_remote_message_empty_body() {
        let msg = remote_message(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(msg, "Service Unavailable");
    }

    #[test]
    fn test_unreadable_error_body_keeps_status() {
        let err = api_error(StatusCode::BAD_GATEWAY, Err::<String, _>("connection reset"));
        match err {
            ServiceError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = ServiceError::ApiError {
            status: 404,
            message: "User not found".to_string(),
        };
        assert_eq!(err.to_string(), "Error 404: User not found");
    }
}
