//! Per-fetch metadata record (`response` relation)

use serde::{Deserialize, Serialize};

/// Status stored when the provider reports none
pub const ERROR_STATUS: &str = "Error";

/// One record per HTTP fetch, written whether or not the page had results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Request URL including query parameters
    pub url: String,
    /// Pagination offset echoed by the provider
    pub start: i64,
    /// Provider status, or the soft-error message for empty pages
    pub status: String,
    /// Raw response body
    pub content: String,
    /// Provider processing time
    pub processed_at: String,
    /// Provider JSON endpoint echo
    pub json_endpoint: String,
    /// Comma-joined URLs of the other known pages
    pub pagination: String,
    /// Local fetch time
    pub timestamp: String,
}

impl ResponseMetadata {
    /// Whether the provider reported success for this page
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status: &str) -> ResponseMetadata {
        ResponseMetadata {
            url: "https://serpapi.com/search?q=x".to_string(),
            start: 0,
            status: status.to_string(),
            content: "{}".to_string(),
            processed_at: String::new(),
            json_endpoint: String::new(),
            pagination: String::new(),
            timestamp: "2024-03-19 10:00:00".to_string(),
        }
    }

    #[test]
    fn success_status_is_case_insensitive() {
        assert!(with_status("Success").is_success());
        assert!(with_status("success").is_success());
    }

    #[test]
    fn error_status_is_not_success() {
        assert!(!with_status(ERROR_STATUS).is_success());
        assert!(!with_status("Google hasn't returned any results for this query.").is_success());
    }
}
