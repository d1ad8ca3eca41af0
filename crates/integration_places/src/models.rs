//! Request and result types for the nearby search

use domain::GeoLocation;
use serde::{Deserialize, Serialize};

/// Fields requested when the caller does not choose any
pub const DEFAULT_FIELDS: [&str; 6] = [
    "places.displayName",
    "places.location",
    "places.types",
    "places.priceLevel",
    "places.rating",
    "places.userRatingCount",
];

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankPreference {
    /// Nearest first
    #[default]
    Distance,
    /// Most relevant first
    Popularity,
}

/// One nearby-search request
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRequest {
    /// Circle center
    pub center: GeoLocation,
    /// Circle radius in meters
    pub radius: f64,
    /// Place types to include; empty means every type
    pub included_types: Vec<String>,
    /// Maximum number of places returned
    pub max_result_count: u32,
    /// Result ordering
    pub rank_preference: RankPreference,
}

impl NearbyRequest {
    /// Request up to 20 places of any type, nearest first
    #[must_use]
    pub const fn new(center: GeoLocation, radius: f64) -> Self {
        Self {
            center,
            radius,
            included_types: Vec::new(),
            max_result_count: 20,
            rank_preference: RankPreference::Distance,
        }
    }

    /// Restrict the search to the given place types
    #[must_use]
    pub fn with_included_types(mut self, types: Vec<String>) -> Self {
        self.included_types = types;
        self
    }

    /// Set the maximum number of places
    #[must_use]
    pub const fn with_max_result_count(mut self, count: u32) -> Self {
        self.max_result_count = count;
        self
    }

    /// Set the result ordering
    #[must_use]
    pub const fn with_rank_preference(mut self, rank: RankPreference) -> Self {
        self.rank_preference = rank;
        self
    }

    /// JSON body as expected by the endpoint
    pub(crate) fn to_body(&self) -> api::SearchNearbyBody<'_> {
        api::SearchNearbyBody {
            included_types: &self.included_types,
            max_result_count: self.max_result_count,
            rank_preference: self.rank_preference,
            location_restriction: api::LocationRestriction {
                circle: api::Circle {
                    center: api::LatLng {
                        latitude: self.center.latitude(),
                        longitude: self.center.longitude(),
                    },
                    radius: self.radius,
                },
            },
        }
    }
}

/// A place flattened for export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Display name text
    pub display_name: String,
    /// Comma-joined place types
    pub types: String,
    /// `(latitude, longitude)`
    pub location: Option<(f64, f64)>,
    /// Price level, e.g. `PRICE_LEVEL_MODERATE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<String>,
    /// Average rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of ratings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<u64>,
}

impl Place {
    pub(crate) fn from_api(place: api::ApiPlace) -> Self {
        Self {
            display_name: place.display_name.map(|d| d.text).unwrap_or_default(),
            types: place.types.join(","),
            location: place.location.map(|l| (l.latitude, l.longitude)),
            price_level: place.price_level,
            rating: place.rating,
            user_rating_count: place.user_rating_count,
        }
    }
}

/// Wire format of the endpoint
pub(crate) mod api {
    use serde::{Deserialize, Serialize};

    use super::RankPreference;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchNearbyBody<'a> {
        pub included_types: &'a [String],
        pub max_result_count: u32,
        pub rank_preference: RankPreference,
        pub location_restriction: LocationRestriction,
    }

    #[derive(Debug, Serialize)]
    pub struct LocationRestriction {
        pub circle: Circle,
    }

    #[derive(Debug, Serialize)]
    pub struct Circle {
        pub center: LatLng,
        pub radius: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LatLng {
        pub latitude: f64,
        pub longitude: f64,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct SearchNearbyResponse {
        #[serde(default)]
        pub places: Vec<ApiPlace>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LocalizedText {
        #[serde(default)]
        pub text: String,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ApiPlace {
        pub display_name: Option<LocalizedText>,
        #[serde(default)]
        pub types: Vec<String>,
        pub location: Option<LatLng>,
        pub price_level: Option<String>,
        pub rating: Option<f64>,
        pub user_rating_count: Option<u64>,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn center() -> GeoLocation {
        GeoLocation::new(35.499_605, 139.411_497).unwrap()
    }

    #[test]
    fn body_shape() {
        let request = NearbyRequest::new(center(), 80.0)
            .with_included_types(vec!["restaurant".to_string()]);
        let body = serde_json::to_value(request.to_body()).unwrap();

        assert_eq!(body["includedTypes"], json!(["restaurant"]));
        assert_eq!(body["maxResultCount"], json!(20));
        assert_eq!(body["rankPreference"], json!("DISTANCE"));
        assert_eq!(
            body["locationRestriction"]["circle"]["center"]["latitude"],
            json!(35.499_605)
        );
        assert_eq!(body["locationRestriction"]["circle"]["radius"], json!(80.0));
    }

    #[test]
    fn empty_types_are_sent_as_empty_list() {
        let body = serde_json::to_value(NearbyRequest::new(center(), 50.0).to_body()).unwrap();
        assert_eq!(body["includedTypes"], json!([]));
    }

    #[test]
    fn popularity_rank() {
        let request =
            NearbyRequest::new(center(), 50.0).with_rank_preference(RankPreference::Popularity);
        let body = serde_json::to_value(request.to_body()).unwrap();
        assert_eq!(body["rankPreference"], json!("POPULARITY"));
    }

    #[test]
    fn place_is_flattened() {
        let raw: api::ApiPlace = serde_json::from_value(json!({
            "displayName": { "text": "Sagamiono Izakaya", "languageCode": "ja" },
            "types": ["bar", "restaurant"],
            "location": { "latitude": 35.5, "longitude": 139.4 },
            "priceLevel": "PRICE_LEVEL_MODERATE",
            "rating": 4.2,
            "userRatingCount": 87
        }))
        .unwrap();

        let place = Place::from_api(raw);
        assert_eq!(place.display_name, "Sagamiono Izakaya");
        assert_eq!(place.types, "bar,restaurant");
        assert_eq!(place.location, Some((35.5, 139.4)));
        assert_eq!(place.user_rating_count, Some(87));
    }

    #[test]
    fn sparse_place_is_flattened() {
        let raw: api::ApiPlace = serde_json::from_value(json!({})).unwrap();
        let place = Place::from_api(raw);
        assert!(place.display_name.is_empty());
        assert!(place.types.is_empty());
        assert!(place.location.is_none());
        assert!(place.rating.is_none());
    }
}
