//! Application configuration
//!
//! Loaded once from a JSON file (default `conf-serpapi.json`) and overridable
//! through `POISCOUT_*` environment variables. Split into sub-modules:
//! - `database`: SQLite pool settings

mod database;

use std::{fmt, path::Path};

use application::{ApplicationError, PaginationConfig, SearchLocale};
use domain::{DomainError, Stop};
use integration_places::PlacesConfig;
use integration_serpapi::SerpApiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use database::DatabaseConfig;

/// Default configuration file
pub const DEFAULT_CONFIG_FILE: &str = "conf-serpapi.json";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "POISCOUT";

/// Main application configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    /// Provider API key; `api-key` is accepted too
    #[serde(alias = "api-key", default = "empty_secret", skip_serializing)]
    pub apikey: SecretString,

    /// SQLite database file
    #[serde(default = "default_sqlite")]
    pub sqlite: String,

    /// Stop rows `[_, _, name, .., region]`
    #[serde(default)]
    pub stops: Vec<Vec<String>>,

    /// Keywords searched around every stop
    #[serde(default)]
    pub include_types: Vec<String>,

    /// Search-results endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Interface language (`hl`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Country code (`gl`)
    #[serde(default = "default_country")]
    pub country: String,

    /// Search engine domain
    #[serde(default = "default_google_domain")]
    pub google_domain: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on pages per query (unbounded when absent)
    #[serde(default)]
    pub max_pages: Option<u32>,

    /// Database pool settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Places nearby search
    #[serde(default)]
    pub places: PlacesConfig,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_sqlite() -> String {
    "data/japan-poi.db".to_string()
}

fn default_endpoint() -> String {
    SerpApiConfig::default().endpoint
}

fn default_language() -> String {
    SearchLocale::default().language
}

fn default_country() -> String {
    SearchLocale::default().country
}

fn default_google_domain() -> String {
    SearchLocale::default().google_domain
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            apikey: empty_secret(),
            sqlite: default_sqlite(),
            stops: Vec::new(),
            include_types: Vec::new(),
            endpoint: default_endpoint(),
            language: default_language(),
            country: default_country(),
            google_domain: default_google_domain(),
            timeout_secs: default_timeout_secs(),
            max_pages: None,
            database: DatabaseConfig::default(),
            places: PlacesConfig::default(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("apikey", &"[REDACTED]")
            .field("sqlite", &self.sqlite)
            .field("stops", &self.stops.len())
            .field("include_types", &self.include_types)
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .field("country", &self.country)
            .field("google_domain", &self.google_domain)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_pages", &self.max_pages)
            .field("database", &self.database)
            .field("places", &self.places)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from a JSON file and the environment
    ///
    /// A missing file is only an error when `path` was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let (file, required) = match path {
            Some(path) => (path.to_string_lossy().into_owned(), true),
            None => (DEFAULT_CONFIG_FILE.to_string(), false),
        };
        debug!(file = %file, required, "Loading configuration");

        let config = config::Config::builder()
            .add_source(
                config::File::with_name(&file)
                    .format(config::FileFormat::Json)
                    .required(required),
            )
            // Override with environment variables (e.g., POISCOUT_APIKEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        info!(
            stops = loaded.stops.len(),
            keywords = loaded.include_types.len(),
            sqlite = %loaded.sqlite,
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Check the fields a batch run depends on
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] for a blank API key, an
    /// invalid endpoint, or a malformed stop row.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.apikey.expose_secret().trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "apikey must not be empty".to_string(),
            ));
        }

        self.serpapi()
            .validate()
            .map_err(ApplicationError::Configuration)?;

        if self.sqlite.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "sqlite path must not be empty".to_string(),
            ));
        }

        if self.max_pages == Some(0) {
            return Err(ApplicationError::Configuration(
                "max-pages must be at least 1".to_string(),
            ));
        }

        self.stops().map_err(|e| match e {
            DomainError::InvalidStop(reason) => {
                ApplicationError::Configuration(format!("invalid stop row: {reason}"))
            },
            other => ApplicationError::Domain(other),
        })?;

        Ok(())
    }

    /// Places settings with command-line overrides applied, validated
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] for a blank API key or an
    /// out-of-range Places setting, including an overridden one.
    pub fn places_with_overrides(
        &self,
        radius: Option<f64>,
        max_results: Option<u32>,
    ) -> Result<PlacesConfig, ApplicationError> {
        if self.apikey.expose_secret().trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "apikey must not be empty".to_string(),
            ));
        }

        let places = PlacesConfig {
            radius: radius.unwrap_or(self.places.radius),
            max_results: max_results.unwrap_or(self.places.max_results),
            ..self.places.clone()
        };
        places
            .validate()
            .map_err(ApplicationError::Configuration)?;
        Ok(places)
    }

    /// The provider API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.apikey.expose_secret()
    }

    /// Parsed stop rows
    ///
    /// # Errors
    ///
    /// Returns the first row that has fewer than three columns.
    pub fn stops(&self) -> Result<Vec<Stop>, DomainError> {
        self.stops.iter().map(|row| Stop::from_row(row.as_slice())).collect()
    }

    /// Locale shared by every query
    #[must_use]
    pub fn locale(&self) -> SearchLocale {
        SearchLocale {
            language: self.language.clone(),
            country: self.country.clone(),
            google_domain: self.google_domain.clone(),
        }
    }

    /// Transport settings for the search-results endpoint
    #[must_use]
    pub fn serpapi(&self) -> SerpApiConfig {
        SerpApiConfig {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Pagination limits for the driver
    #[must_use]
    pub const fn pagination(&self) -> PaginationConfig {
        PaginationConfig {
            max_pages: self.max_pages,
        }
    }

    /// Pool settings pointing at the configured database file
    #[must_use]
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            path: self.sqlite.clone(),
            ..self.database.clone()
        }
    }
}
