//! Places nearby-search HTTP client

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::{
    config::PlacesConfig,
    error::PlacesError,
    models::{NearbyRequest, Place, api},
};

/// Places API client
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout_secs: u64,
}

impl PlacesClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty, the configuration is invalid,
    /// or the HTTP client cannot be created.
    pub fn new(config: &PlacesConfig, api_key: impl Into<String>) -> Result<Self, PlacesError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PlacesError::ConfigurationError(
                "Places API key is required".to_string(),
            ));
        }
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Search places around a point
    ///
    /// `fields` becomes the field mask; an empty slice is sent as an empty mask.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-200 status, or an
    /// unparseable body.
    #[instrument(skip(self, request, fields), fields(center = %request.center, radius = request.radius))]
    pub async fn search_nearby(
        &self,
        request: &NearbyRequest,
        fields: &[&str],
    ) -> Result<Vec<Place>, PlacesError> {
        let field_mask = fields.join(",");
        debug!(field_mask = %field_mask, "Sending nearby search request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", field_mask)
            .json(&request.to_body())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    PlacesError::ConnectionFailed(e.to_string())
                } else {
                    PlacesError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::RequestFailed(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            return Err(PlacesError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: api::SearchNearbyResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        let places: Vec<Place> = parsed.places.into_iter().map(Place::from_api).collect();
        info!(count = places.len(), "Nearby search completed");
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = PlacesClient::new(&PlacesConfig::default(), " ");
        assert!(matches!(result, Err(PlacesError::ConfigurationError(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlacesConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(PlacesClient::new(&config, "key").is_err());
    }
}
