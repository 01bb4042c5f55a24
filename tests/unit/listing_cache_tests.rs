//! Listing cache behavior against the real file-backed store.

use std::time::Duration;

use gitlost::cache::{FileStore, KeyValueStore};
use gitlost::constants::{LISTING_CACHE_KEY, LISTING_CACHE_TTL};
use gitlost::listing::list_all;
use gitlost::test_utils::StaticHost;
use tempfile::TempDir;

const API: &str = "https://api.test.invalid/contents/";

fn root_listing() -> String {
    serde_json::json!([
        {"type": "file", "name": "Node.gitignore", "path": "Node.gitignore",
         "download_url": "https://raw.test.invalid/Node.gitignore"},
        {"type": "file", "name": "Python.gitignore", "path": "Python.gitignore",
         "download_url": "https://raw.test.invalid/Python.gitignore"},
    ])
    .to_string()
}

#[tokio::test]
async fn listing_persists_to_disk_and_serves_from_cache() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let host = StaticHost::new().with_response(API, &root_listing());

    let first = list_all(&host, &store, API, LISTING_CACHE_TTL).await;
    assert_eq!(first.len(), 2);
    assert_eq!(host.request_count(), 3);
    assert!(store.path_for(LISTING_CACHE_KEY).exists());

    // Fresh cache: zero additional network calls.
    let second = list_all(&host, &store, API, LISTING_CACHE_TTL).await;
    assert_eq!(host.request_count(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn expired_entry_triggers_exactly_three_listing_calls() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let host = StaticHost::new().with_response(API, &root_listing());

    list_all(&host, &store, API, LISTING_CACHE_TTL).await;
    assert_eq!(host.request_count(), 3);

    list_all(&host, &store, API, Duration::ZERO).await;
    assert_eq!(host.request_count(), 6);
}

#[tokio::test]
async fn corrupt_on_disk_entry_is_treated_as_miss() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store.set(LISTING_CACHE_KEY, "}{ definitely not json").unwrap();

    let host = StaticHost::new().with_response(API, &root_listing());
    let templates = list_all(&host, &store, API, LISTING_CACHE_TTL).await;
    assert_eq!(templates.len(), 2);
    assert_eq!(host.request_count(), 3);
}

#[tokio::test]
async fn all_listings_unavailable_yields_empty_listing_not_error() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let host = StaticHost::new();

    let templates = list_all(&host, &store, API, LISTING_CACHE_TTL).await;
    assert!(templates.is_empty());
}
