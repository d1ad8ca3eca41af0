//! Integration tests for the SQLite store using on-disk databases
//!
//! These tests drive the store through the application port, the way the
//! pagination driver does.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{PoiStorePort, RequestBuilder, normalize};
use infrastructure::{DatabaseConfig, SqlitePoiStore, create_pool};
use serde_json::json;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> SqlitePoiStore {
    let config = DatabaseConfig {
        path: dir.path().join("japan-poi.db").to_string_lossy().into_owned(),
        ..DatabaseConfig::default()
    };
    let pool = create_pool(&config).expect("Failed to create database");
    SqlitePoiStore::new(Arc::new(pool))
}

fn crafted_body(q: &str, results: usize) -> String {
    let local: Vec<_> = (0..results)
        .map(|i| {
            let latitude = 35.0 + f64::from(u32::try_from(i).unwrap()) / 100.0;
            json!({
                "title": format!("Place {i}"),
                "gps_coordinates": { "latitude": latitude, "longitude": 139.7 },
                "rating": 4.0,
                "reviews": 10
            })
        })
        .collect();
    json!({
        "search_metadata": { "status": "Success" },
        "search_parameters": { "q": q, "start": 0 },
        "serpapi_pagination": { "next": "" },
        "local_results": local
    })
    .to_string()
}

#[tokio::test]
async fn test_build_normalize_persist_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let query = RequestBuilder::new("izakaya near Shibuya station", "Tokyo", "k").build();
    let body = crafted_body(&query.q, 4);
    let page = normalize(200, &body, "https://serpapi.com/search?q=izakaya").unwrap();

    store.insert_metadata(&page.metadata).await.unwrap();
    let written = store.insert_poi_batch(&page.records).await.unwrap();

    assert_eq!(written, 4);
    assert_eq!(store.count_metadata().await.unwrap(), 1);
    assert_eq!(store.count_poi().await.unwrap(), 4);
}

#[tokio::test]
async fn test_empty_batch_leaves_counts_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let page = normalize(200, &crafted_body("ramen near Ueno station", 2), "u").unwrap();
    store.insert_poi_batch(&page.records).await.unwrap();
    let before = store.count_poi().await.unwrap();

    assert_eq!(store.insert_poi_batch(&[]).await.unwrap(), 0);
    assert_eq!(store.count_poi().await.unwrap(), before);
}

#[tokio::test]
async fn test_rows_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = file_store(&dir);
        let page = normalize(200, &crafted_body("cafe near Umeda station", 3), "u").unwrap();
        store.insert_metadata(&page.metadata).await.unwrap();
        store.insert_poi_batch(&page.records).await.unwrap();
    }

    let reopened = file_store(&dir);
    assert_eq!(reopened.count_metadata().await.unwrap(), 1);
    assert_eq!(reopened.count_poi().await.unwrap(), 3);
}

#[tokio::test]
async fn test_reset_then_insert() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    let page = normalize(200, &crafted_body("bar near Namba station", 1), "u").unwrap();
    store.insert_metadata(&page.metadata).await.unwrap();

    store.reset().await.unwrap();
    store.insert_metadata(&page.metadata).await.unwrap();

    assert_eq!(store.count_metadata().await.unwrap(), 1);
}
