//! Search-results API query

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered `(name, value)` query parameters as sent on the wire
pub type QueryPairs = Vec<(String, String)>;

/// One parameter set for the search-results API
///
/// Queries are produced once per (stop, keyword) pair and consumed by a
/// single pagination chain. They are never mutated; follow-up pages are
/// requested with raw [`QueryPairs`] taken from the provider's cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Free-text search string, e.g. "izakaya near Shibuya station"
    pub q: String,
    /// Location anchor understood by the provider, e.g. "Tokyo"
    pub location: String,
    /// Provider API key
    pub api_key: String,
    /// Interface language (`hl`)
    pub language: String,
    /// Country code (`gl`)
    pub country: String,
    /// Search engine domain
    pub google_domain: String,
    /// Pagination offset
    pub start: u32,
}

impl Query {
    /// Render the query as wire parameters
    ///
    /// The order is fixed: `q, api_key, location, hl, gl, google_domain, start`.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        vec![
            ("q".to_string(), self.q.clone()),
            ("api_key".to_string(), self.api_key.clone()),
            ("location".to_string(), self.location.clone()),
            ("hl".to_string(), self.language.clone()),
            ("gl".to_string(), self.country.clone()),
            ("google_domain".to_string(), self.google_domain.clone()),
            ("start".to_string(), self.start.to_string()),
        ]
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} (start={})", self.q, self.location, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Query {
        Query {
            q: "izakaya near Shibuya station".to_string(),
            location: "Tokyo".to_string(),
            api_key: "secret".to_string(),
            language: "ja".to_string(),
            country: "jp".to_string(),
            google_domain: "google.co.jp".to_string(),
            start: 0,
        }
    }

    #[test]
    fn query_pairs_order_and_values() {
        let pairs = sample().query_pairs();
        let names: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            ["q", "api_key", "location", "hl", "gl", "google_domain", "start"]
        );
        assert_eq!(pairs[0].1, "izakaya near Shibuya station");
        assert_eq!(pairs[6].1, "0");
    }

    #[test]
    fn display_hides_api_key() {
        let shown = sample().to_string();
        assert!(shown.contains("izakaya near Shibuya station"));
        assert!(!shown.contains("secret"));
    }
}
