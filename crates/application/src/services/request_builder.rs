//! Request builder
//!
//! Pure construction of search-results API queries.

use domain::Query;

/// Locale parameters shared by every query of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLocale {
    /// Interface language (`hl`)
    pub language: String,
    /// Country code (`gl`)
    pub country: String,
    /// Search engine domain
    pub google_domain: String,
}

impl Default for SearchLocale {
    fn default() -> Self {
        Self {
            language: "ja".to_string(),
            country: "jp".to_string(),
            google_domain: "google.co.jp".to_string(),
        }
    }
}

/// Builder for a single [`Query`]
///
/// ```
/// use application::RequestBuilder;
///
/// let query = RequestBuilder::new("izakaya near Shibuya station", "Tokyo", "key")
///     .with_start(20)
///     .build();
/// assert_eq!(query.start, 20);
/// assert_eq!(query.language, "ja");
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    q: String,
    location: String,
    api_key: String,
    locale: SearchLocale,
    start: u32,
}

impl RequestBuilder {
    /// Start a query with the default locale and offset 0
    #[must_use]
    pub fn new(
        q: impl Into<String>,
        location: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            q: q.into(),
            location: location.into(),
            api_key: api_key.into(),
            locale: SearchLocale::default(),
            start: 0,
        }
    }

    /// Set the pagination offset
    #[must_use]
    pub const fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Replace the whole locale
    #[must_use]
    pub fn with_locale(mut self, locale: SearchLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the interface language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.locale.language = language.into();
        self
    }

    /// Set the country code
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.locale.country = country.into();
        self
    }

    /// Set the search engine domain
    #[must_use]
    pub fn with_google_domain(mut self, google_domain: impl Into<String>) -> Self {
        self.locale.google_domain = google_domain.into();
        self
    }

    /// Finish the query
    #[must_use]
    pub fn build(self) -> Query {
        Query {
            q: self.q,
            location: self.location,
            api_key: self.api_key,
            language: self.locale.language,
            country: self.locale.country,
            google_domain: self.locale.google_domain,
            start: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_japanese_locale_and_zero_offset() {
        let query = RequestBuilder::new("ramen near Ueno station", "Tokyo", "k").build();
        assert_eq!(query.language, "ja");
        assert_eq!(query.country, "jp");
        assert_eq!(query.google_domain, "google.co.jp");
        assert_eq!(query.start, 0);
        assert_eq!(query.api_key, "k");
    }

    #[test]
    fn builder_overrides_locale_fields() {
        let query = RequestBuilder::new("cafe near Umeda station", "Osaka", "k")
            .with_language("en")
            .with_country("us")
            .with_google_domain("google.com")
            .with_start(40)
            .build();
        assert_eq!(query.language, "en");
        assert_eq!(query.country, "us");
        assert_eq!(query.google_domain, "google.com");
        assert_eq!(query.start, 40);
    }

    #[test]
    fn with_locale_replaces_all_three() {
        let locale = SearchLocale {
            language: "ko".to_string(),
            country: "kr".to_string(),
            google_domain: "google.co.kr".to_string(),
        };
        let query = RequestBuilder::new("q", "Seoul", "k")
            .with_locale(locale.clone())
            .build();
        assert_eq!(query.language, locale.language);
        assert_eq!(query.country, locale.country);
        assert_eq!(query.google_domain, locale.google_domain);
    }

    #[test]
    fn empty_strings_are_kept_verbatim() {
        let query = RequestBuilder::new("", "", "").build();
        assert!(query.q.is_empty());
        assert!(query.location.is_empty());
        assert_eq!(query.query_pairs().len(), 7);
    }
}
