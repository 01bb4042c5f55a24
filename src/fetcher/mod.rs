//! Template content fetching with per-process memoization.
//!
//! The fetch path is deliberately lenient: any failure to retrieve a
//! template (unresolved name, non-success HTTP status, transport error)
//! yields `None` rather than an error, and nothing is cached for the
//! failed URL so a later call retries the network. This skip-on-failure
//! policy is load-bearing — the aggregator renders whatever subset of
//! templates it could fetch instead of failing the whole merge.
//!
//! The HTTP layer sits behind the [`ContentHost`] trait so tests can
//! substitute an in-memory host and count issued requests; the cache is
//! an explicit [`FetchCache`] value owned by the [`TemplateFetcher`],
//! not a module-level singleton.

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::constants::USER_AGENT;

/// Abstraction over plain fetch-by-URL against the remote content host.
///
/// Implementations return the response body on success and `None` on any
/// failure, folding transport errors and non-success statuses together.
pub trait ContentHost {
    /// Retrieve the text at `url`, or `None` if unavailable.
    fn get_text(&self, url: &str) -> impl Future<Output = Option<String>> + Send;
}

/// HTTP implementation of [`ContentHost`] backed by `reqwest`.
///
/// No timeout is configured: a hung request hangs the corresponding
/// operation, and the surrounding CLI shows a perpetual spinner. No
/// retry either; callers that want a retry simply call again.
#[derive(Debug, Clone)]
pub struct HttpHost {
    client: reqwest::Client,
}

impl HttpHost {
    /// Create a host with the crate's user agent.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHost for HttpHost {
    async fn get_text(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(url, error = %e, "failed to read response body");
                    None
                }
            },
            Ok(response) => {
                warn!(url, status = %response.status(), "non-success response");
                None
            }
            Err(e) => {
                warn!(url, error = %e, "request failed");
                None
            }
        }
    }
}

/// In-memory memoization of fetched template text, keyed by URL.
///
/// Grows monotonically for the process lifetime with no eviction; the
/// catalog is finite so the bound is a few hundred small entries. A
/// populated mapping never mutates, and the concurrent map keeps it safe
/// on the multi-threaded runtime.
#[derive(Debug, Default)]
pub struct FetchCache {
    entries: DashMap<String, String>,
}

impl FetchCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up previously fetched text for a URL.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<String> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    /// Memoize fetched text. First write wins; a repeat insert for the
    /// same URL leaves the original value in place.
    pub fn insert(&self, url: &str, text: &str) {
        self.entries.entry(url.to_string()).or_insert_with(|| text.to_string());
    }

    /// Number of memoized URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetches raw template text by catalog name, memoizing per URL.
#[derive(Debug)]
pub struct TemplateFetcher<H> {
    host: H,
    raw_base: String,
    cache: FetchCache,
}

impl<H: ContentHost> TemplateFetcher<H> {
    /// Create a fetcher resolving template paths against `raw_base`.
    pub fn new(host: H, raw_base: impl Into<String>) -> Self {
        Self { host, raw_base: raw_base.into(), cache: FetchCache::new() }
    }

    /// Fetch the raw text of a named template.
    ///
    /// Resolution order:
    /// 1. unresolved catalog name → `None`, no network call;
    /// 2. cache hit → cached text, no network call (at most one fetch
    ///    per URL per process lifetime);
    /// 3. network fetch → memoize and return on success, `None` on any
    ///    failure with nothing cached.
    pub async fn fetch(&self, catalog: &Catalog, name: &str) -> Option<String> {
        let record = catalog.get(name)?;
        let url = record.download_url(&self.raw_base);

        if let Some(text) = self.cache.get(&url) {
            debug!(name, "template cache hit");
            return Some(text);
        }

        let text = self.host.get_text(&url).await?;
        self.cache.insert(&url, &text);
        Some(text)
    }

    /// The cache owned by this fetcher, for inspection.
    #[must_use]
    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    /// The content host behind this fetcher, for inspection in tests.
    #[must_use]
    pub fn host_ref(&self) -> &H {
        &self.host
    }
}
