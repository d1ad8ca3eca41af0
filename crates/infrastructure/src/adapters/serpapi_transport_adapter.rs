//! SerpApi transport adapter - Implements SearchTransportPort using integration_serpapi

use application::{
    error::ApplicationError,
    ports::{RawResponse, SearchTransportPort},
};
use async_trait::async_trait;
use integration_serpapi::{SerpApiClient, SerpApiConfig, SerpApiError};
use tracing::{instrument, warn};

/// Adapter for the search-results endpoint
#[derive(Debug, Clone)]
pub struct SerpApiTransportAdapter {
    client: SerpApiClient,
}

impl SerpApiTransportAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &SerpApiConfig) -> Result<Self, ApplicationError> {
        let client = SerpApiClient::new(config).map_err(map_error)?;
        Ok(Self { client })
    }
}

fn map_error(error: SerpApiError) -> ApplicationError {
    match error {
        SerpApiError::ConfigurationError(message) => ApplicationError::Configuration(message),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl SearchTransportPort for SerpApiTransportAdapter {
    #[instrument(skip(self, params), fields(endpoint = %self.client.endpoint()))]
    async fn fetch(&self, params: &[(String, String)]) -> Result<RawResponse, ApplicationError> {
        let response = self.client.fetch(params).await.map_err(|e| {
            warn!(error = %e, transient = e.is_transient(), "SerpApi request failed");
            map_error(e)
        })?;

        Ok(RawResponse::new(response.status, response.url, response.body))
    }
}
