//! SerpApi HTTP client

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, instrument};

use crate::{config::SerpApiConfig, error::SerpApiError};

/// One page as returned by the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Final request URL, query string included
    pub url: String,
    /// Raw response body
    pub body: String,
}

/// Search-results API client
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
}

impl SerpApiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be created.
    pub fn new(config: &SerpApiConfig) -> Result<Self, SerpApiError> {
        config.validate().map_err(SerpApiError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SerpApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Endpoint every request is sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint with the given query parameters
    ///
    /// # Errors
    ///
    /// Returns an error only when no response could be obtained.
    #[instrument(skip(self, params), fields(endpoint = %self.endpoint, params = params.len()))]
    pub async fn fetch(&self, params: &[(String, String)]) -> Result<SerpApiResponse, SerpApiError> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SerpApiError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    SerpApiError::ConnectionFailed(e.to_string())
                } else {
                    SerpApiError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| SerpApiError::RequestFailed(e.to_string()))?;

        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Received SerpApi response"
        );

        Ok(SerpApiResponse { status, url, body })
    }
}
