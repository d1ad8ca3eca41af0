//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod geo_location;
mod stop;
mod timestamp;

pub use coordinates::Coordinates;
pub use geo_location::GeoLocation;
pub use stop::Stop;
pub use timestamp::{fetch_timestamp, short_timestamp};
