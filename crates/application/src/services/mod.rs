//! Application services - Use case implementations

mod pagination_driver;
mod request_builder;
mod request_sequencer;
mod response_normalizer;

pub use pagination_driver::{BatchSummary, PaginationConfig, PaginationDriver, continuation_pairs};
pub use request_builder::{RequestBuilder, SearchLocale};
pub use request_sequencer::{query_text, sequence, sequence_with_locale};
pub use response_normalizer::{NormalizedPage, failure_metadata, normalize};
