//! Point-of-interest record (`poi` relation)

use serde::{Deserialize, Serialize};

/// One place found in a successful search-results page
///
/// `rating` is `-1.0` when the provider gave none, which keeps "unrated"
/// apart from a real zero rating. `reviews` is `0` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    /// Comma-joined enabled service options, e.g. "dine_in,takeout"
    pub services: String,
    /// Place name
    pub title: String,
    /// Street address
    pub address: String,
    /// `"<lat>+<lng>"`, `"0+0"` when absent
    pub coordinates: String,
    /// Keyword part of the query, i.e. the query without its first token
    pub search_type: String,
    /// Place type reported by the provider
    pub return_type: String,
    /// User rating, `-1.0` when missing
    pub rating: f64,
    /// Review count as displayed by the provider
    pub reviews_original: String,
    /// Review count, `0` when missing
    pub reviews: i64,
    /// Price level or range
    pub price: String,
    /// Free-text description
    pub description: String,
    /// Provider place identifier
    pub place_id: String,
    /// Search URL for the place identifier
    pub place_id_search: String,
    /// Provider signature
    pub lsig: String,
    /// Local fetch time
    pub timestamp: String,
}

impl PoiRecord {
    /// Sentinel rating for places without one
    pub const MISSING_RATING: f64 = -1.0;

    /// Whether the provider supplied a rating
    #[must_use]
    pub fn has_rating(&self) -> bool {
        self.rating >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: f64) -> PoiRecord {
        PoiRecord {
            services: String::new(),
            title: "Torikizoku".to_string(),
            address: String::new(),
            coordinates: "0+0".to_string(),
            search_type: "near Shibuya station".to_string(),
            return_type: String::new(),
            rating,
            reviews_original: String::new(),
            reviews: 0,
            price: String::new(),
            description: String::new(),
            place_id: String::new(),
            place_id_search: String::new(),
            lsig: String::new(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn missing_rating_is_distinct_from_zero() {
        assert!(!record(PoiRecord::MISSING_RATING).has_rating());
        assert!(record(0.0).has_rating());
        assert!(record(4.2).has_rating());
    }
}
