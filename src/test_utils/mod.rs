//! Shared test fixtures: in-memory fakes for the content host and the
//! key-value store.
//!
//! Available to unit tests via `#[cfg(test)]` and to the integration
//! suites through the `test-utils` feature. Both fakes count or record
//! the operations performed on them so tests can assert on network and
//! storage traffic, not just on results.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};

use crate::cache::KeyValueStore;
use crate::catalog::Catalog;
use crate::fetcher::{ContentHost, TemplateFetcher};

/// Base URL used by [`static_fetcher`] fixtures.
pub const TEST_RAW_BASE: &str = "https://raw.test.invalid/";

/// In-memory [`ContentHost`] serving canned responses and counting
/// every request issued, including misses.
#[derive(Debug, Default)]
pub struct StaticHost {
    responses: HashMap<String, String>,
    requests: AtomicUsize,
}

impl StaticHost {
    /// Create a host with no responses: every request fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the body served for a URL.
    #[must_use]
    pub fn with_response(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    /// Total requests issued against this host.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ContentHost for StaticHost {
    async fn get_text(&self, url: &str) -> Option<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.responses.get(url).cloned()
    }
}

/// In-memory [`KeyValueStore`], optionally failing every write to
/// exercise the best-effort persistence paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `set` call fail, simulating unavailable storage.
    #[must_use]
    pub fn with_write_failures(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().expect("store poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("storage unavailable"));
        }
        self.entries.lock().expect("store poisoned").insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().expect("store poisoned").remove(key);
        Ok(())
    }
}

/// Build a [`TemplateFetcher`] whose host serves `content` for each
/// named built-in catalog template. Names missing from `templates`
/// fail to fetch, which is how tests exercise the skip-on-failure path.
#[must_use]
pub fn static_fetcher(templates: &[(&str, &str)]) -> TemplateFetcher<StaticHost> {
    let catalog = Catalog::builtin();
    let mut host = StaticHost::new();
    for (name, content) in templates {
        let record = catalog
            .get(name)
            .unwrap_or_else(|| panic!("fixture references unknown template {name}"));
        host = host.with_response(&record.download_url(TEST_RAW_BASE), content);
    }
    TemplateFetcher::new(host, TEST_RAW_BASE)
}
