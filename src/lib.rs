//! gitlost - compose merged `.gitignore` files from the GitHub gitignore
//! template catalog.
//!
//! The tool lets a user select templates by name (or auto-detect them
//! from a dependency manifest), fetches each template's raw text, and
//! merges everything into a single deduplicated `.gitignore` document.
//!
//! # Architecture Overview
//!
//! Data flows one way: a selection of names goes into the aggregator,
//! which resolves each name against the static catalog, fetches content
//! through a memoizing fetcher, concatenates the sections, and dedups
//! lines across the whole merged text.
//!
//! ```text
//! selection → aggregate::combine → fetcher (per name, cached)
//!           → concatenation → line dedup → merged .gitignore
//! ```
//!
//! Failure policy throughout is degrade-not-fail: an unfetchable
//! template is skipped, an unavailable directory listing contributes
//! zero entries, and a broken cache is a miss. The only hard errors are
//! the ones a user must act on (unsupported or malformed manifests,
//! invalid configuration, refusing to overwrite output).
//!
//! # Core Modules
//!
//! - [`catalog`] - the static template catalog (name → repository path)
//! - [`aggregate`] - template combination and line-level deduplication
//! - [`fetcher`] - content retrieval with per-process memoization
//! - [`listing`] - remote template listing with a TTL-bounded cache
//! - [`manifest`] - manifest classification and template detection
//!
//! # Supporting Modules
//!
//! - [`cache`] - key-value persistence for the listing cache
//! - [`cli`] - command-line interface
//! - [`config`] - global configuration (`config.toml`)
//! - [`core`] - error types and user-friendly error reporting
//! - [`utils`] - progress spinners
//!
//! # Example
//!
//! ```rust,no_run
//! use gitlost::aggregate;
//! use gitlost::catalog::Catalog;
//! use gitlost::constants::RAW_BASE_URL;
//! use gitlost::fetcher::{HttpHost, TemplateFetcher};
//!
//! # async fn example() {
//! let catalog = Catalog::builtin();
//! let fetcher = TemplateFetcher::new(HttpHost::new(), RAW_BASE_URL);
//! let selected = vec!["Node".to_string(), "Python".to_string()];
//! let merged = aggregate::combine(&fetcher, &catalog, &selected).await;
//! println!("{merged}");
//! # }
//! ```

// Core functionality
pub mod aggregate;
pub mod catalog;
pub mod fetcher;
pub mod listing;
pub mod manifest;

// Supporting modules
pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod utils;

// test_utils is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
