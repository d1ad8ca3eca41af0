//! Pagination driver
//!
//! Runs every query through fetch -> normalize -> persist, following the
//! provider's next-page cursor until it runs out. Strictly sequential: one
//! request in flight, and each page is persisted before the next fetch.

use std::{fmt, sync::Arc};

use domain::{Query, QueryPairs};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::response_normalizer::{NormalizedPage, failure_metadata, normalize};
use crate::{
    error::ApplicationError,
    ports::{LogLevel, PoiStorePort, ProgressLogPort, SearchTransportPort},
};

/// Name of the credential parameter in query strings
const API_KEY_PARAM: &str = "api_key";

/// Pagination limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Upper bound on pages fetched per query; `None` follows every cursor
    ///
    /// The first page is always fetched, so the configuration layer rejects 0.
    pub max_pages: Option<u32>,
}

/// Counters for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Queries processed
    pub queries: usize,
    /// HTTP fetches that produced a normalized page
    pub pages: usize,
    /// Metadata rows written, failed fetches included
    pub response_rows: usize,
    /// POI rows written
    pub poi_rows: usize,
    /// Pages on which the provider reported no results
    pub soft_errors: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} queries, {} pages, {} responses, {} POIs, {} empty pages",
            self.queries, self.pages, self.response_rows, self.poi_rows, self.soft_errors
        )
    }
}

/// Drives paginated fetching for a sequence of queries
pub struct PaginationDriver {
    transport: Arc<dyn SearchTransportPort>,
    store: Arc<dyn PoiStorePort>,
    progress: Arc<dyn ProgressLogPort>,
    config: PaginationConfig,
}

impl fmt::Debug for PaginationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationDriver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PaginationDriver {
    /// Create a driver over the given collaborators
    pub fn new(
        transport: Arc<dyn SearchTransportPort>,
        store: Arc<dyn PoiStorePort>,
        progress: Arc<dyn ProgressLogPort>,
        config: PaginationConfig,
    ) -> Self {
        Self {
            transport,
            store,
            progress,
            config,
        }
    }

    /// Process every query in order
    ///
    /// # Errors
    ///
    /// Stops at the first transport, parse or persistence failure. Rows
    /// written before the failure stay in the store.
    pub async fn run<I>(&self, queries: I) -> Result<BatchSummary, ApplicationError>
    where
        I: IntoIterator<Item = Query>,
    {
        let mut summary = BatchSummary::default();
        for (index, query) in queries.into_iter().enumerate() {
            self.run_query(index, &query, &mut summary).await?;
            summary.queries += 1;
        }
        info!(%summary, "Batch finished");
        Ok(summary)
    }

    /// Fetch every page of one query
    ///
    /// # Errors
    ///
    /// See [`PaginationDriver::run`]; an unparseable cursor is a
    /// [`ApplicationError::Parse`].
    #[instrument(skip(self, query, summary), fields(q = %query.q, location = %query.location))]
    pub async fn run_query(
        &self,
        index: usize,
        query: &Query,
        summary: &mut BatchSummary,
    ) -> Result<(), ApplicationError> {
        let mut params = query.query_pairs();
        let mut fetched: u32 = 0;

        loop {
            let page = self.fetch_page(&params, summary).await?;
            fetched += 1;

            let Some(cursor) = page.next_cursor else {
                debug!(pages = fetched, "Pagination finished");
                return Ok(());
            };
            if self.config.max_pages.is_some_and(|max| fetched >= max) {
                warn!(pages = fetched, %cursor, "Page limit reached, dropping cursor");
                return Ok(());
            }

            self.progress
                .log(LogLevel::Info, &format!("NextPageFetch[{index}] {cursor}"));
            params = continuation_pairs(&cursor, &query.api_key)?;
        }
    }

    async fn fetch_page(
        &self,
        params: &[(String, String)],
        summary: &mut BatchSummary,
    ) -> Result<NormalizedPage, ApplicationError> {
        let raw = self.transport.fetch(params).await?;

        let page = match normalize(raw.status, &raw.body, &raw.url) {
            Ok(page) => page,
            Err(err) => {
                if let Some((url, body)) = err.failed_response() {
                    self.store.insert_metadata(&failure_metadata(url, body)).await?;
                    summary.response_rows += 1;
                }
                self.progress.log(LogLevel::Error, &err.to_string());
                return Err(err);
            },
        };
        summary.pages += 1;

        self.store.insert_metadata(&page.metadata).await?;
        summary.response_rows += 1;

        if page.soft_error {
            summary.soft_errors += 1;
            self.progress.log(
                LogLevel::Warn,
                &format!("No results at {}: {}", page.metadata.url, page.metadata.status),
            );
            return Ok(page);
        }

        summary.poi_rows += self.store.insert_poi_batch(&page.records).await?;
        self.progress.log(
            LogLevel::Info,
            &format!(
                "Fetched {} results with query[{}]",
                page.records.len(),
                page.query
            ),
        );
        Ok(page)
    }
}

/// Query pairs for a next-page cursor with the original API key injected
///
/// Any key parameter already in the cursor is dropped.
///
/// # Errors
///
/// Returns [`ApplicationError::Parse`] if the cursor is not an absolute URL.
pub fn continuation_pairs(cursor: &str, api_key: &str) -> Result<QueryPairs, ApplicationError> {
    let url = Url::parse(cursor).map_err(|e| ApplicationError::Parse {
        url: cursor.to_string(),
        message: format!("invalid next-page cursor: {e}"),
        body: String::new(),
    })?;

    let mut pairs: QueryPairs = url
        .query_pairs()
        .filter(|(name, _)| name != API_KEY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    pairs.push((API_KEY_PARAM.to_string(), api_key.to_string()));
    Ok(pairs)
}
