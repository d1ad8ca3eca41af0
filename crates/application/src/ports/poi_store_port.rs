//! POI store port
//!
//! Append-only persistence for response metadata and POI records.

use async_trait::async_trait;
use domain::{PoiRecord, ResponseMetadata};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the two fixed relations, `response` and `poi`
///
/// Every call is a pure append; there is no update, delete or upsert path.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PoiStorePort: Send + Sync {
    /// Append one response metadata record
    async fn insert_metadata(&self, metadata: &ResponseMetadata) -> Result<(), ApplicationError>;

    /// Append a batch of POI records in one transaction
    ///
    /// Returns the number of rows written. An empty batch is a no-op.
    async fn insert_poi_batch(&self, records: &[PoiRecord]) -> Result<usize, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PoiStorePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PoiStorePort>();
    }

    #[tokio::test]
    async fn mock_counts_batch() {
        let mut mock = MockPoiStorePort::new();
        mock.expect_insert_poi_batch()
            .returning(|records| Ok(records.len()));

        let written = mock.insert_poi_batch(&[]).await.unwrap();
        assert_eq!(written, 0);
    }
}
