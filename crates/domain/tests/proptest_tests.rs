//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{Coordinates, GeoLocation, Stop};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Coordinates Property Tests
// ============================================================================

mod coordinates_tests {
    use super::*;

    proptest! {
        #[test]
        fn rendered_pair_parses_back(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let rendered = Coordinates::new(lat, lon).to_string();
            let (lat_str, lon_str) = rendered
                .split_once('+')
                .ok_or_else(|| TestCaseError::fail("no separator"))?;
            prop_assert_eq!(lat_str.parse::<f64>().ok(), Some(lat));
            prop_assert_eq!(lon_str.parse::<f64>().ok(), Some(lon));
        }
    }
}

// ============================================================================
// Stop Property Tests
// ============================================================================

mod stop_tests {
    use super::*;

    proptest! {
        #[test]
        fn rows_with_three_or_more_columns_parse(
            row in prop::collection::vec("[A-Za-z]{1,12}", 3..8)
        ) {
            let stop = Stop::from_row(&row).unwrap();
            prop_assert_eq!(&stop.name, &row[2]);
            prop_assert_eq!(&stop.region, row.last().unwrap());
        }

        #[test]
        fn short_rows_are_rejected(
            row in prop::collection::vec("[A-Za-z]{1,12}", 0..3)
        ) {
            prop_assert!(Stop::from_row(&row).is_err());
        }
    }
}
