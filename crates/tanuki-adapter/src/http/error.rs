/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization, auth)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Tanuki adapter
#[derive(Error, Debug)]
pub enum TanukiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Authentication failed (missing or rejected API key)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Connection timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },

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

    /// The service accepted the task but reported a failed run
    #[error("{message}")]
    TaskFailed { message: String },
}

impl TanukiError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TanukiError::Http(_)
                | TanukiError::RateLimit { .. }
                | TanukiError::Timeout { .. }
                | TanukiError::InvalidResponse(_)
        )
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            TanukiError::RateLimit { retry_after } => Some(*retry_after),
            TanukiError::Timeout { .. } => Some(1),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TanukiError::Authentication { .. })
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TanukiError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for Tanuki operations
pub type Result<T> = std::result::Result<T, TanukiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let timeout_err = TanukiError::Timeout { duration: 30 };
        assert!(timeout_err.is_retryable());
        assert_eq!(timeout_err.retry_delay(), Some(1));

        let auth_err = TanukiError::Authentication {
            message: "Invalid API Key".to_string(),
        };
        assert!(!auth_err.is_retryable());
    }

    #[test]
    fn test_rate_limit_retry_delay() {
        let err = TanukiError::RateLimit { retry_after: 42 };
        assert!(err.is_retryable());
        assert_eq!(err.retry_delay(), Some(42));
    }

    #[test]
    fn test_error_is_auth_error() {
        let err = TanukiError::Authentication {
            message: "Invalid API Key".to_string(),
        };
        assert!(err.is_auth_error());
        assert!(!TanukiError::Timeout { duration: 30 }.is_auth_error());
    }

    #[test]
    fn test_api_error_creation() {
        let err = TanukiError::api_error(StatusCode::BAD_REQUEST, "missing task description");
        match err {
            TanukiError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "missing task description");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_task_failed_displays_bare_message() {
        let err = TanukiError::TaskFailed {
            message: "sandbox exhausted".to_string(),
        };
        assert_eq!(err.to_string(), "sandbox exhausted");
    }
}
