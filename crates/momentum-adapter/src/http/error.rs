/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization, URL building)
[OUTPUT]: Structured error type shared by every client call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Momentum adapter
#[derive(Error, Debug)]
pub enum MomentumError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MomentumError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        MomentumError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            MomentumError::Api { status, .. } => Some(*status),
            MomentumError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the request payload
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| (400..500).contains(&status))
    }
}

/// Result type alias for Momentum operations
pub type Result<T> = std::result::Result<T, MomentumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = MomentumError::api_error(StatusCode::UNPROCESSABLE_ENTITY, "The name field is required.");
        match err {
            MomentumError::Api { status, ref message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "The name field is required.");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert!(err.is_client_error());
    }

    #[test]
    fn test_api_error_displays_server_message() {
        let err = MomentumError::api_error(StatusCode::BAD_REQUEST, "Failed to create task");
        assert_eq!(err.to_string(), "Failed to create task");
    }

    #[test]
    fn test_status_absent_for_local_errors() {
        let err = MomentumError::Config("missing base url".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_client_error());
    }
}
