//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// `Transport`, `Parse` and `Persistence` abort a batch run. Provider soft
/// errors (a 200 response that reports no results) are not errors at all:
/// they are recorded as response metadata and end that query's pagination.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Provider answered with a non-200 status
    #[error("Failed at {url} with HTTP {status}: {body}")]
    Transport {
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body is not valid JSON, or a cursor is not a valid URL
    #[error("Failed to parse response from {url}: {message}; body: {body}")]
    Parse {
        /// Request or cursor URL
        url: String,
        /// Parser error message
        message: String,
        /// Raw response body
        body: String,
    },

    /// No response at all (connection refused, timeout, ...)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Store write failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the provider produced a response body this error carries
    ///
    /// Such failures still get a response metadata row before the batch aborts.
    pub fn failed_response(&self) -> Option<(&str, &str)> {
        match self {
            Self::Transport { url, body, .. } | Self::Parse { url, body, .. } => {
                Some((url.as_str(), body.as_str()))
            },
            _ => None,
        }
    }
}
