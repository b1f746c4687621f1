//! Error types for relevo.

use thiserror::Error;

/// Result type alias using relevo's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for relevo operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input from the caller (blank query, bad pagination, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A feature is disabled by configuration
    #[error("Feature disabled: {0}")]
    Disabled(String),

    /// Content source failed to produce candidates
    #[error("Content source error: {0}")]
    Source(String),

    /// Inference/completion call failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
