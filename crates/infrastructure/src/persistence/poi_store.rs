//! SQLite POI store implementation
//!
//! Implements the PoiStorePort using SQLite. Every call takes one pooled
//! connection and writes inside a single transaction.

use std::sync::Arc;

use application::{error::ApplicationError, ports::PoiStorePort};
use async_trait::async_trait;
use domain::{PoiRecord, ResponseMetadata};
use rusqlite::params;
use tokio::task;
use tracing::{debug, info, instrument};

use super::{connection::ConnectionPool, migrations::reset_schema};

fn persistence_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Persistence(e.to_string())
}

/// SQLite-based store for the `response` and `poi` relations
#[derive(Debug, Clone)]
pub struct SqlitePoiStore {
    pool: Arc<ConnectionPool>,
}

impl SqlitePoiStore {
    /// Create a new SQLite POI store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Number of rows in `response`
    pub async fn count_metadata(&self) -> Result<u64, ApplicationError> {
        self.count("response").await
    }

    /// Number of rows in `poi`
    pub async fn count_poi(&self) -> Result<u64, ApplicationError> {
        self.count("poi").await
    }

    /// Drop and recreate both relations
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(persistence_error)?;
            reset_schema(&conn).map_err(persistence_error)?;
            info!("Store reset");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    async fn count(&self, table: &'static str) -> Result<u64, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(persistence_error)?;
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .map_err(persistence_error)?;
            Ok(u64::try_from(count).unwrap_or(0))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[async_trait]
impl PoiStorePort for SqlitePoiStore {
    #[instrument(skip(self, metadata), fields(url = %metadata.url, status = %metadata.status))]
    async fn insert_metadata(&self, metadata: &ResponseMetadata) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let metadata = metadata.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(persistence_error)?;
            let tx = conn.transaction().map_err(persistence_error)?;

            tx.execute(
                "INSERT INTO response (url, start, status, content, processed_at,
                                       json_endpoint, pagination, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    metadata.url,
                    metadata.start,
                    metadata.status,
                    metadata.content,
                    metadata.processed_at,
                    metadata.json_endpoint,
                    metadata.pagination,
                    metadata.timestamp,
                ],
            )
            .map_err(persistence_error)?;

            tx.commit().map_err(persistence_error)?;
            debug!("Inserted 1 record(s) into response");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, records), fields(count = records.len()))]
    async fn insert_poi_batch(&self, records: &[PoiRecord]) -> Result<usize, ApplicationError> {
        if records.is_empty() {
            debug!("No records to insert into poi");
            return Ok(0);
        }

        let pool = Arc::clone(&self.pool);
        let records = records.to_vec();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(persistence_error)?;
            let tx = conn.transaction().map_err(persistence_error)?;

            {
                let mut stmt = tx
                    .prepare(
                        "INSERT INTO poi (services, coordinates, title, address, search_type,
                                          return_type, rating, reviews_original, reviews, price,
                                          description, place_id, place_id_search, lsig, timestamp)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                    )
                    .map_err(persistence_error)?;

                for record in &records {
                    stmt.execute(params![
                        record.services,
                        record.coordinates,
                        record.title,
                        record.address,
                        record.search_type,
                        record.return_type,
                        record.rating,
                        record.reviews_original,
                        record.reviews,
                        record.price,
                        record.description,
                        record.place_id,
                        record.place_id_search,
                        record.lsig,
                        record.timestamp,
                    ])
                    .map_err(persistence_error)?;
                }
            }

            tx.commit().map_err(persistence_error)?;
            info!(count = records.len(), "Inserted records into poi");
            Ok(records.len())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
