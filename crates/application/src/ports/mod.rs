//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod poi_store_port;
mod progress_log_port;
mod search_transport_port;

#[cfg(test)]
pub use poi_store_port::MockPoiStorePort;
pub use poi_store_port::PoiStorePort;
#[cfg(test)]
pub use progress_log_port::MockProgressLogPort;
pub use progress_log_port::{LogLevel, ProgressLogPort};
#[cfg(test)]
pub use search_transport_port::MockSearchTransportPort;
pub use search_transport_port::{RawResponse, SearchTransportPort};
