//! Response normalizer
//!
//! Maps one raw search-results response onto a [`ResponseMetadata`] record,
//! zero or more [`PoiRecord`]s and the cursor of the next page.

use domain::{Coordinates, ERROR_STATUS, PoiRecord, ResponseMetadata, fetch_timestamp};
use tracing::debug;

use crate::error::ApplicationError;

/// The interpreted content of one page
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPage {
    /// Metadata row for this fetch
    pub metadata: ResponseMetadata,
    /// One record per `local_results` entry
    pub records: Vec<PoiRecord>,
    /// Full URL of the next page, if the provider announced one
    pub next_cursor: Option<String>,
    /// The provider reported that the page has no results
    pub soft_error: bool,
    /// Query text echoed in `search_parameters.q`
    pub query: String,
}

/// Normalize one HTTP response
///
/// # Errors
///
/// Returns [`ApplicationError::Transport`] when `status` is not 200 and
/// [`ApplicationError::Parse`] when the body is not a JSON object. Both carry
/// the URL and the raw body. Fields of an unexpected type fall back to their
/// defaults.
pub fn normalize(status: u16, body: &str, url: &str) -> Result<NormalizedPage, ApplicationError> {
    if status != 200 {
        return Err(ApplicationError::Transport {
            url: url.to_string(),
            status,
            body: body.to_string(),
        });
    }

    let parse_error = |message: String| ApplicationError::Parse {
        url: url.to_string(),
        message,
        body: body.to_string(),
    };
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| parse_error(e.to_string()))?;
    if !value.is_object() {
        return Err(parse_error("expected a JSON object".to_string()));
    }
    let payload: api::SearchResponse =
        serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))?;

    let timestamp = fetch_timestamp();
    let soft_error_status = payload.soft_error_status();
    let search_metadata = payload.search_metadata.unwrap_or_default();
    let parameters = payload.search_parameters.unwrap_or_default();
    let pagination = payload.serpapi_pagination.unwrap_or_default();
    let query = parameters.q.clone().unwrap_or_default();

    let mut metadata = ResponseMetadata {
        url: url.to_string(),
        start: parameters.start.unwrap_or(0),
        status: search_metadata
            .status
            .unwrap_or_else(|| ERROR_STATUS.to_string()),
        content: body.to_string(),
        processed_at: search_metadata.processed_at.unwrap_or_default(),
        json_endpoint: search_metadata.json_endpoint.unwrap_or_default(),
        pagination: pagination.other_pages_joined(),
        timestamp: timestamp.clone(),
    };

    if let Some(status) = soft_error_status {
        metadata.status = status;
        debug!(url = %url, status = %metadata.status, "Page reported no results");
        return Ok(NormalizedPage {
            metadata,
            records: Vec::new(),
            next_cursor: None,
            soft_error: true,
            query,
        });
    }

    let search_type = search_type(&query);
    let records = payload
        .local_results
        .into_iter()
        .map(|entry| entry.into_record(&search_type, &timestamp))
        .collect();

    Ok(NormalizedPage {
        metadata,
        records,
        next_cursor: pagination.next.filter(|next| !next.is_empty()),
        soft_error: false,
        query,
    })
}

/// Metadata row for a fetch whose response could not be normalized
#[must_use]
pub fn failure_metadata(url: &str, body: &str) -> ResponseMetadata {
    ResponseMetadata {
        url: url.to_string(),
        start: 0,
        status: ERROR_STATUS.to_string(),
        content: body.to_string(),
        processed_at: String::new(),
        json_endpoint: String::new(),
        pagination: String::new(),
        timestamp: fetch_timestamp(),
    }
}

/// The query text without its first space-separated token
fn search_type(query: &str) -> String {
    query.split(' ').skip(1).collect::<Vec<_>>().join(" ")
}

/// Provider payload, decoded tolerantly: every field may be absent or carry
/// an unexpected JSON type
mod api {
    use serde::Deserialize;
    use serde_json::{Map, Value};

    use super::{Coordinates, ERROR_STATUS, PoiRecord};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchResponse {
        #[serde(deserialize_with = "lenient::object")]
        pub search_metadata: Option<SearchMetadata>,
        #[serde(deserialize_with = "lenient::object")]
        pub search_parameters: Option<SearchParameters>,
        pub search_information: Value,
        #[serde(deserialize_with = "lenient::object")]
        pub serpapi_pagination: Option<Pagination>,
        #[serde(deserialize_with = "lenient::entries")]
        pub local_results: Vec<LocalResult>,
    }

    impl SearchResponse {
        /// Status of a page that reported no results
        ///
        /// Any non-empty `search_information` marks such a page. An object
        /// carries the provider message in its `error` field.
        pub fn soft_error_status(&self) -> Option<String> {
            match &self.search_information {
                Value::Object(information) if information.is_empty() => None,
                Value::Object(information) => Some(
                    information
                        .get("error")
                        .and_then(Value::as_str)
                        .unwrap_or(ERROR_STATUS)
                        .to_string(),
                ),
                Value::Null | Value::Bool(false) => None,
                Value::String(text) if text.is_empty() => None,
                Value::Array(items) if items.is_empty() => None,
                Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
                _ => Some(ERROR_STATUS.to_string()),
            }
        }
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchMetadata {
        #[serde(deserialize_with = "lenient::string")]
        pub status: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub processed_at: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub json_endpoint: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchParameters {
        #[serde(deserialize_with = "lenient::string")]
        pub q: Option<String>,
        #[serde(deserialize_with = "lenient::integer")]
        pub start: Option<i64>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Pagination {
        #[serde(deserialize_with = "lenient::string")]
        pub next: Option<String>,
        #[serde(deserialize_with = "lenient::object")]
        pub other_pages: Option<Map<String, Value>>,
    }

    impl Pagination {
        /// Other page URLs joined by commas, ordered by page number
        pub fn other_pages_joined(&self) -> String {
            let mut pages: Vec<(u64, &str)> = self
                .other_pages
                .iter()
                .flatten()
                .filter_map(|(page, url)| {
                    Some((page.parse().unwrap_or(u64::MAX), url.as_str()?))
                })
                .collect();
            pages.sort_by_key(|(page, _)| *page);
            pages
                .into_iter()
                .map(|(_, url)| url)
                .collect::<Vec<_>>()
                .join(",")
        }
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct GpsCoordinates {
        #[serde(deserialize_with = "lenient::float")]
        pub latitude: Option<f64>,
        #[serde(deserialize_with = "lenient::float")]
        pub longitude: Option<f64>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct LocalResult {
        #[serde(deserialize_with = "lenient::string")]
        pub title: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub address: Option<String>,
        #[serde(rename = "type", deserialize_with = "lenient::string")]
        pub kind: Option<String>,
        #[serde(deserialize_with = "lenient::float")]
        pub rating: Option<f64>,
        #[serde(deserialize_with = "lenient::string")]
        pub reviews_original: Option<String>,
        #[serde(deserialize_with = "lenient::integer")]
        pub reviews: Option<i64>,
        #[serde(deserialize_with = "lenient::string")]
        pub price: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub description: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub place_id: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub place_id_search: Option<String>,
        #[serde(deserialize_with = "lenient::string")]
        pub lsig: Option<String>,
        #[serde(deserialize_with = "lenient::object")]
        pub gps_coordinates: Option<GpsCoordinates>,
        #[serde(deserialize_with = "lenient::object")]
        pub service_options: Option<Map<String, Value>>,
    }

    impl LocalResult {
        fn services(&self) -> String {
            self.service_options
                .iter()
                .flatten()
                .filter(|(_, enabled)| {
                    matches!(enabled, Value::Bool(true)) || enabled.as_str() == Some("true")
                })
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(",")
        }

        fn coordinates(&self) -> Coordinates {
            self.gps_coordinates
                .as_ref()
                .map_or(Coordinates::MISSING, |gps| {
                    Coordinates::new(gps.latitude.unwrap_or(0.0), gps.longitude.unwrap_or(0.0))
                })
        }

        pub fn into_record(self, search_type: &str, timestamp: &str) -> PoiRecord {
            PoiRecord {
                services: self.services(),
                coordinates: self.coordinates().to_string(),
                title: self.title.unwrap_or_default(),
                address: self.address.unwrap_or_default(),
                search_type: search_type.to_string(),
                return_type: self.kind.unwrap_or_default(),
                rating: self.rating.unwrap_or(PoiRecord::MISSING_RATING),
                reviews_original: self.reviews_original.unwrap_or_default(),
                reviews: self.reviews.unwrap_or(0),
                price: self.price.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                place_id: self.place_id.unwrap_or_default(),
                place_id_search: self.place_id_search.unwrap_or_default(),
                lsig: self.lsig.unwrap_or_default(),
                timestamp: timestamp.to_string(),
            }
        }
    }

    /// Field decoders that map a value of the wrong JSON type to `None`
    /// instead of failing the whole page
    mod lenient {
        use serde::{Deserialize, Deserializer, de::DeserializeOwned};
        use serde_json::Value;

        /// Strings as they are, numbers and booleans as their JSON text
        pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(match Value::deserialize(deserializer)? {
                Value::String(text) => Some(text),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
        }

        /// Numbers, or strings such as `"4.5"`
        pub fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let parsed = match Value::deserialize(deserializer)? {
                Value::Number(n) => n.as_f64(),
                Value::String(text) => numeric_text(&text).parse().ok(),
                _ => None,
            };
            Ok(parsed.filter(|value: &f64| value.is_finite()))
        }

        /// Integers, integral floats, or strings such as `"1,234"` and `"(87)"`
        pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(match Value::deserialize(deserializer)? {
                Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
                Value::String(text) => {
                    let text = numeric_text(&text);
                    text.parse()
                        .ok()
                        .or_else(|| text.parse().ok().and_then(integral))
                },
                _ => None,
            })
        }

        /// Any value that decodes as `T`, else `None`
        pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: DeserializeOwned,
        {
            Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
        }

        /// Array entries that decode as `T`; anything else is skipped
        pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: DeserializeOwned,
        {
            Ok(match Value::deserialize(deserializer)? {
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
                _ => Vec::new(),
            })
        }

        fn numeric_text(text: &str) -> String {
            text.trim()
                .trim_start_matches('(')
                .trim_end_matches(')')
                .replace(',', "")
        }

        #[allow(clippy::cast_possible_truncation)]
        fn integral(value: f64) -> Option<i64> {
            (value.is_finite() && value.fract().abs() < f64::EPSILON && value.abs() < 9.0e18)
                .then_some(value as i64)
        }
    }
}
