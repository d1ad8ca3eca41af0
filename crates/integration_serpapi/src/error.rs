//! SerpApi transport error types

use thiserror::Error;

/// Errors raised before a response is available
///
/// Non-200 responses are not errors at this level; they are returned to the
/// caller together with their body.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Connection to the endpoint failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

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

impl SerpApiError {
    /// Returns true if the same request could succeed later
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(SerpApiError::ConnectionFailed("refused".to_string()).is_transient());
        assert!(SerpApiError::Timeout { timeout_secs: 30 }.is_transient());
        assert!(!SerpApiError::ConfigurationError("bad".to_string()).is_transient());
        assert!(!SerpApiError::RequestFailed("bad".to_string()).is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = SerpApiError::Timeout { timeout_secs: 12 };
        assert!(err.to_string().contains("12"));
    }
}
