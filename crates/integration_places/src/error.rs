//! Places client error types

use thiserror::Error;

/// Errors that can occur during a nearby search
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be sent
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service answered with a non-200 status
    #[error("Failed with HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
