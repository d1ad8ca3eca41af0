//! SerpApi transport configuration

use serde::{Deserialize, Serialize};

/// Configuration for the search-results endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpApiConfig {
    /// Search endpoint; follow-up pages are sent here too
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://serpapi.com/search".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SerpApiConfig {
    /// Create a configuration pointing at a custom endpoint
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute URL or the timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        url::Url::parse(&self.endpoint).map_err(|e| format!("endpoint is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SerpApiConfig::default();
        assert_eq!(config.endpoint, "https://serpapi.com/search");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_endpoint() {
        let config = SerpApiConfig::with_endpoint("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_relative_endpoint() {
        let config = SerpApiConfig::with_endpoint("/search");
        assert!(config.validate().unwrap_err().contains("valid URL"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = SerpApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SerpApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SerpApiConfig::default());
    }
}
