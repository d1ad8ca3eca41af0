//! Persistence module
//!
//! SQLite storage for response metadata and POI records.

pub mod connection;
pub mod migrations;
pub mod poi_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use poi_store::SqlitePoiStore;
