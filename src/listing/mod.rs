//! Remote template listing with a TTL-bounded local cache.
//!
//! The full template listing comes from three directory listings against
//! the remote host: the repository root, the `Global` subdirectory, and
//! the `community` subdirectory. The three requests are issued
//! concurrently and joined before returning; the concatenation keeps
//! root, then global, then community order, with each sub-listing's
//! internal order preserved. A name appearing in more than one directory
//! yields multiple records — no cross-directory deduplication.
//!
//! The fetched listing persists through a [`KeyValueStore`] together
//! with a timestamp. A stored listing younger than the TTL is returned
//! without any network access; absent, corrupt, and expired entries are
//! treated identically as misses. Persistence is best-effort: a failed
//! write is logged and otherwise ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::KeyValueStore;
use crate::constants::LISTING_CACHE_KEY;
use crate::fetcher::ContentHost;

/// One entry of the remote directory-listing payload.
#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    path: String,
    download_url: Option<String>,
}

/// A template discovered through the remote listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicTemplateRecord {
    /// Template name with the `.gitignore` suffix stripped
    pub name: String,
    /// Path of the file inside the remote repository
    pub path: String,
    /// Direct download URL for the raw content
    pub download_url: String,
    /// Source directory tag: `Root`, `Global`, or `community`
    pub category: String,
}

/// The persisted cache record: a listing plus the instant it was
/// fetched, in epoch milliseconds.
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedListing {
    /// Fetch time in epoch milliseconds
    pub timestamp: i64,
    /// The listing as fetched
    pub templates: Vec<DynamicTemplateRecord>,
}

/// List `.gitignore` templates in one remote subdirectory.
///
/// An unavailable or unparsable listing contributes zero entries rather
/// than failing the caller.
async fn list_directory<H: ContentHost>(
    host: &H,
    api_base: &str,
    sub_path: &str,
) -> Vec<DynamicTemplateRecord> {
    let url = format!("{api_base}{sub_path}");
    let Some(body) = host.get_text(&url).await else {
        warn!(url, "directory listing unavailable");
        return Vec::new();
    };

    let entries: Vec<DirectoryEntry> = match serde_json::from_str(&body) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(url, error = %e, "unparsable directory listing");
            return Vec::new();
        }
    };

    let category =
        if sub_path.is_empty() { "Root".to_string() } else { sub_path.trim_end_matches('/').to_string() };

    entries
        .into_iter()
        .filter(|entry| entry.kind == "file" && entry.name.ends_with(".gitignore"))
        .filter_map(|entry| {
            let download_url = entry.download_url?;
            Some(DynamicTemplateRecord {
                name: entry.name.trim_end_matches(".gitignore").to_string(),
                path: entry.path,
                download_url,
                category: category.clone(),
            })
        })
        .collect()
}

/// Return the full remote template listing, consulting the local cache
/// first.
///
/// A cached listing younger than `ttl` is returned with zero network
/// calls; otherwise the three directory listings are fetched
/// concurrently, concatenated, persisted best-effort, and returned.
pub async fn list_all<H: ContentHost, S: KeyValueStore>(
    host: &H,
    store: &S,
    api_base: &str,
    ttl: Duration,
) -> Vec<DynamicTemplateRecord> {
    if let Some(templates) = read_fresh_cache(store, ttl) {
        debug!(count = templates.len(), "using cached template listing");
        return templates;
    }

    let (root, global, community) = futures::join!(
        list_directory(host, api_base, ""),
        list_directory(host, api_base, "Global"),
        list_directory(host, api_base, "community"),
    );

    let mut templates = root;
    templates.extend(global);
    templates.extend(community);

    let record =
        CachedListing { timestamp: chrono::Utc::now().timestamp_millis(), templates };
    match serde_json::to_string(&record) {
        Ok(json) => {
            if let Err(e) = store.set(LISTING_CACHE_KEY, &json) {
                debug!(error = %e, "failed to persist template listing; proceeding uncached");
            }
        }
        Err(e) => debug!(error = %e, "failed to serialize template listing"),
    }

    record.templates
}

/// Read the persisted listing if it exists, parses, and is younger than
/// the TTL. All other outcomes are cache misses.
fn read_fresh_cache<S: KeyValueStore>(store: &S, ttl: Duration) -> Option<Vec<DynamicTemplateRecord>> {
    let raw = match store.get(LISTING_CACHE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            debug!(error = %e, "failed to read listing cache; treating as miss");
            return None;
        }
    };

    let cached: CachedListing = match serde_json::from_str(&raw) {
        Ok(cached) => cached,
        Err(e) => {
            debug!(error = %e, "corrupt listing cache entry; treating as miss");
            return None;
        }
    };

    let age_ms = chrono::Utc::now().timestamp_millis().saturating_sub(cached.timestamp);
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    (age_ms < ttl_ms).then_some(cached.templates)
}
