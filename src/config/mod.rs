//! Global configuration management for gitlost.
//!
//! Settings load from an optional TOML file (`config.toml` under the
//! platform config directory, overridable with the `GITLOST_CONFIG`
//! environment variable). Every field is optional; a missing file means
//! pure defaults. This carries the overrides that matter for testing and
//! for pointing the tool at a mirror of the template repository:
//!
//! ```toml
//! # ~/.config/gitlost/config.toml
//! cache_dir = "/var/cache/gitlost"
//! listing_ttl_days = 30
//! raw_base_url = "https://mirror.example.com/raw/"
//! api_base_url = "https://mirror.example.com/contents/"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::FileStore;
use crate::constants::{API_BASE_URL, ENV_CONFIG_PATH, LISTING_CACHE_TTL, RAW_BASE_URL};
use crate::core::GitlostError;

/// Optional user-level overrides, all defaulting to the built-in
/// constants when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Directory for the persisted listing cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Listing cache time-to-live in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_ttl_days: Option<u64>,

    /// Base URL for raw template content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_base_url: Option<String>,

    /// Base URL for remote directory listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl GlobalConfig {
    /// The configuration file path: `GITLOST_CONFIG` if set, otherwise
    /// `config.toml` under the platform config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map_or_else(|| PathBuf::from("gitlost.toml"), |base| base.join("gitlost").join("config.toml"))
    }

    /// Load the configuration from the default path.
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// invalid file is an error, since silently ignoring a typo would be
    /// worse than failing loudly.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(GitlostError::Io(e).into()),
        };

        let config = toml::from_str(&contents).map_err(|e| GitlostError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Effective raw-content base URL.
    #[must_use]
    pub fn raw_base(&self) -> &str {
        self.raw_base_url.as_deref().unwrap_or(RAW_BASE_URL)
    }

    /// Effective directory-listing base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(API_BASE_URL)
    }

    /// Effective listing TTL.
    #[must_use]
    pub fn listing_ttl(&self) -> Duration {
        self.listing_ttl_days
            .map_or(LISTING_CACHE_TTL, |days| Duration::from_secs(days * 24 * 60 * 60))
    }

    /// Effective cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(FileStore::default_dir)
    }
}
