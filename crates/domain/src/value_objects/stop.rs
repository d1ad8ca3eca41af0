//! Transit stop value object

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A station around which POIs are searched
///
/// Stops come from the configuration as rows of strings; only the station
/// name (third column) and the region (last column) are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Station name, e.g. "Shibuya"
    pub name: String,
    /// Region the search is anchored to, usually a prefecture
    pub region: String,
}

impl Stop {
    /// Create a stop from its name and region
    #[must_use]
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }

    /// Build a stop from a configuration row `[_, _, name, .., region]`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStop`] if the row has fewer than three columns.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self, DomainError> {
        if row.len() < 3 {
            return Err(DomainError::InvalidStop(format!(
                "expected at least 3 columns, got {}",
                row.len()
            )));
        }
        let name = row[2].as_ref();
        let region = row[row.len() - 1].as_ref();
        Ok(Self::new(name, region))
    }

    /// The station phrase used in query text, e.g. "Shibuya station"
    #[must_use]
    pub fn station(&self) -> String {
        format!("{} station", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_row_uses_third_and_last_columns() {
        let stop = Stop::from_row(&["x", "y", "Shibuya", "Tokyo"]).expect("valid row");
        assert_eq!(stop.name, "Shibuya");
        assert_eq!(stop.region, "Tokyo");
    }

    #[test]
    fn from_row_with_three_columns_uses_name_as_region() {
        let stop = Stop::from_row(&["x", "y", "Sagamihara"]).expect("valid row");
        assert_eq!(stop.name, "Sagamihara");
        assert_eq!(stop.region, "Sagamihara");
    }

    #[test]
    fn from_row_rejects_short_rows() {
        let result = Stop::from_row(&["x", "y"]);
        assert!(matches!(result, Err(DomainError::InvalidStop(_))));
    }

    #[test]
    fn station_phrase() {
        assert_eq!(Stop::new("Shibuya", "Tokyo").station(), "Shibuya station");
    }
}
