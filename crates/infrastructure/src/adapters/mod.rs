//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod serpapi_transport_adapter;
mod tracing_progress_log;

pub use serpapi_transport_adapter::SerpApiTransportAdapter;
pub use tracing_progress_log::TracingProgressLog;
