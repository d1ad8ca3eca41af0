//! Search transport port
//!
//! The blocking request/response boundary to the search-results API.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A response as seen on the wire, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Final request URL including query parameters
    pub url: String,
    /// Raw response body
    pub body: String,
}

impl RawResponse {
    /// Create a raw response
    #[must_use]
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Port for issuing one GET against the configured search endpoint
///
/// Implementations return any HTTP response as `Ok`, including non-200
/// ones; only the absence of a response is an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchTransportPort: Send + Sync {
    /// Fetch one page with the given query parameters
    async fn fetch(&self, params: &[(String, String)]) -> Result<RawResponse, ApplicationError>;
}
