//! Application layer - Use cases and orchestration
//!
//! Turns stops and keywords into search queries, normalizes provider
//! responses into records, and drives paginated fetching through the ports
//! implemented by the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
