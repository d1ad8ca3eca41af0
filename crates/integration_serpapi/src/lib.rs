#![forbid(unsafe_code)]
//! SerpApi integration for POI Scout
//!
//! A thin transport over the search-results endpoint: one GET per page,
//! returning the status, final URL and raw body without interpreting them.
//! Interpretation of the payload belongs to the application layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_serpapi::{SerpApiClient, SerpApiConfig};
//!
//! let client = SerpApiClient::new(&SerpApiConfig::default())?;
//! let page = client
//!     .fetch(&[("q".to_string(), "izakaya near Shibuya station".to_string())])
//!     .await?;
//! println!("{} {}", page.status, page.url);
//! ```

mod client;
mod config;
mod error;

pub use client::{SerpApiClient, SerpApiResponse};
pub use config::SerpApiConfig;
pub use error::SerpApiError;
