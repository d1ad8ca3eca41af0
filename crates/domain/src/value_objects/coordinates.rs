//! Coordinates as stored in the `poi` relation

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair rendered as `"<lat>+<lng>"`
///
/// Entries without GPS data are stored with [`Coordinates::MISSING`], which
/// renders as `"0+0"`. The pair is not range-checked: it is copied verbatim
/// from the provider payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Sentinel used when a result carries no coordinates
    pub const MISSING: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether this is the missing-coordinates sentinel
    #[must_use]
    pub fn is_missing(&self) -> bool {
        *self == Self::MISSING
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::MISSING
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.latitude, self.longitude)
    }
}
