//! Domain entities - Queries and the records they produce

mod poi_record;
mod query;
mod response_metadata;

pub use poi_record::PoiRecord;
pub use query::{Query, QueryPairs};
pub use response_metadata::{ERROR_STATUS, ResponseMetadata};
