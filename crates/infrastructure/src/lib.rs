//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the SerpApi
//! transport, SQLite persistence and the tracing-backed progress log, plus
//! configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::*;
pub use config::{AppConfig, DEFAULT_CONFIG_FILE, DatabaseConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqlitePoiStore, create_pool};
