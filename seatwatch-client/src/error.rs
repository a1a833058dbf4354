//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every variant is a recoverable refresh failure: the presenter logs it and
/// waits for the next tick.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport error or unreadable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
