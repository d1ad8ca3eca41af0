//! Places client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the nearby-search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlacesConfig {
    /// `searchNearby` endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Default search radius in meters
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Maximum number of places per request (1-20)
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://places.googleapis.com/v1/places:searchNearby".to_string()
}

const fn default_radius() -> f64 {
    80.0
}

const fn default_max_results() -> u32 {
    20
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            radius: default_radius(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlacesConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any field is out of range.
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.endpoint).map_err(|e| format!("endpoint is not a valid URL: {e}"))?;

        if !(self.radius > 0.0 && self.radius <= 50_000.0) {
            return Err("radius must be in (0, 50000] meters".to_string());
        }

        if self.max_results == 0 || self.max_results > 20 {
            return Err("max_results must be between 1 and 20".to_string());
        }

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
        let config = PlacesConfig::default();
        assert!(config.endpoint.ends_with("places:searchNearby"));
        assert!((config.radius - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.max_results, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_radius() {
        let config = PlacesConfig {
            radius: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_max_results() {
        let config = PlacesConfig {
            max_results: 21,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_kebab_case_fields() {
        let config: PlacesConfig =
            serde_json::from_str(r#"{"max-results": 5, "radius": 120.5}"#).unwrap();
        assert_eq!(config.max_results, 5);
        assert!((config.radius - 120.5).abs() < f64::EPSILON);
        assert_eq!(config.timeout_secs, 30);
    }
}
