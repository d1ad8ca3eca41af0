//! Request sequencer
//!
//! Lazily expands stops x keywords into queries, stops outer and keywords inner.

use domain::{Query, Stop};

use super::request_builder::{RequestBuilder, SearchLocale};

/// Query text for one keyword around one stop
#[must_use]
pub fn query_text(keyword: &str, stop: &Stop) -> String {
    format!("{keyword} near {}", stop.station())
}

/// Yield one query per (stop, keyword) pair with the default locale
pub fn sequence<'a>(
    stops: &'a [Stop],
    keywords: &'a [String],
    api_key: &'a str,
) -> impl Iterator<Item = Query> + 'a {
    sequence_with_locale(stops, keywords, api_key, SearchLocale::default())
}

/// Yield one query per (stop, keyword) pair
///
/// The iterator is finite, single pass and builds each query only when it is
/// pulled.
pub fn sequence_with_locale<'a>(
    stops: &'a [Stop],
    keywords: &'a [String],
    api_key: &'a str,
    locale: SearchLocale,
) -> impl Iterator<Item = Query> + 'a {
    stops.iter().flat_map(move |stop| {
        let locale = locale.clone();
        keywords.iter().map(move |keyword| {
            RequestBuilder::new(query_text(keyword, stop), stop.region.clone(), api_key)
                .with_locale(locale.clone())
                .build()
        })
    })
}
