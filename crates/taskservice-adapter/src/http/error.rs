/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error type for the adapter crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the TaskService adapter
#[derive(Error, Debug)]
pub enum RequestError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status. `message` is the body's
    /// `detail` field when present, otherwise the literal `HTTP <status>`.
    /// Display is the message alone; it is surfaced verbatim to operators.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl RequestError {
    /// Create an API error from status code and message
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        RequestError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, RequestError>;
