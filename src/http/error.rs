/*
[INPUT]:  Error sources (HTTP transport, status codes, serialization)
[OUTPUT]: Structured error types and the normalized error report
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback text used by [`handle_error`] when a failure carries no message
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Main error type for the GAX bank adapter
#[derive(Error, Debug)]
pub enum GaxError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GaxError {
    /// Get the HTTP status code if the server rejected the request
    pub fn status(&self) -> Option<u16> {
        match self {
            GaxError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for GAX bank operations
pub type Result<T> = std::result::Result<T, GaxError>;

/// Normalized failure shape for callers that want a plain value instead of
/// a propagated error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
}

/// Convert any failure into an [`ErrorReport`], logging it on the way.
///
/// Opt-in convenience for call sites that catch a propagated error; the
/// request path never calls this itself.
pub fn handle_error<E: std::fmt::Display>(error: &E) -> ErrorReport {
    tracing::error!(%error, "banking API error");
    let message = error.to_string();
    ErrorReport {
        success: false,
        error: if message.is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        },
    }
}
