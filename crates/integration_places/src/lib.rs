#![forbid(unsafe_code)]
//! Places nearby-search integration for POI Scout
//!
//! One-shot queries against the Places `searchNearby` endpoint: a circle
//! around a point, optionally filtered by place types, ranked by distance.
//! Results are flattened into [`Place`] rows suitable for export.

mod client;
mod config;
mod error;
mod models;

pub use client::PlacesClient;
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use models::{DEFAULT_FIELDS, NearbyRequest, Place, RankPreference};
