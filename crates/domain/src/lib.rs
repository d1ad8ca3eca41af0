//! Domain layer for POI Scout
//!
//! Contains the records harvested from the search providers, the queries that
//! produce them, and the value objects they are built from. This layer has no
//! I/O and defines the vocabulary shared by every other crate.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
