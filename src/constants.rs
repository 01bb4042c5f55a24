//! Global constants used throughout the gitlost codebase.
//!
//! This module contains the remote host endpoints, cache parameters, and
//! environment variable names that are used across multiple modules.
//! Defining them centrally improves maintainability and makes magic
//! values more discoverable.

use std::time::Duration;

/// Base URL for raw template content.
///
/// Template download URLs are formed by appending a catalog record's
/// repository path to this base.
pub const RAW_BASE_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main/";

/// Base URL for remote directory listings.
///
/// Appending a sub-path (empty for the repository root, `Global`, or
/// `community`) yields a JSON array of directory entries.
pub const API_BASE_URL: &str = "https://api.github.com/repos/github/gitignore/contents/";

/// Storage key under which the remote template listing is persisted.
///
/// The `v1` suffix versions the on-disk format; bumping it invalidates
/// every previously written cache entry at once.
pub const LISTING_CACHE_KEY: &str = "gitignore_template_list_cache_v1";

/// Time-to-live for the persisted template listing (365 days).
///
/// The upstream catalog changes rarely, so the listing is considered
/// fresh for a year. Entries are invalidated by age only, never by
/// content change.
pub const LISTING_CACHE_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// User agent sent with every outbound HTTP request.
pub const USER_AGENT: &str = concat!("gitlost/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the global configuration file path.
pub const ENV_CONFIG_PATH: &str = "GITLOST_CONFIG";

/// Environment variable overriding the cache directory.
pub const ENV_CACHE_DIR: &str = "GITLOST_CACHE_DIR";

/// Environment variable disabling progress indicators.
pub const ENV_NO_PROGRESS: &str = "GITLOST_NO_PROGRESS";
