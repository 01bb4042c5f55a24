//! Local key-value persistence for cached data.
//!
//! The listing cache persists through the [`KeyValueStore`] trait rather
//! than a hard-coded file path so tests can substitute an in-memory
//! fake. The production implementation, [`FileStore`], keeps one JSON
//! file per key under the platform cache directory.
//!
//! Storage failures are never fatal anywhere in the crate: callers treat
//! a read error as a cache miss and a write error as "proceed uncached".

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::constants::ENV_CACHE_DIR;

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Deleting a missing key is not an
    /// error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed [`KeyValueStore`]: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The default cache directory.
    ///
    /// Resolution order: `GITLOST_CACHE_DIR`, then the platform cache
    /// directory, then `.gitlost-cache` in the working directory as a
    /// last resort.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(ENV_CACHE_DIR) {
            return PathBuf::from(dir);
        }
        dirs::cache_dir()
            .map_or_else(|| PathBuf::from(".gitlost-cache"), |base| base.join("gitlost"))
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The on-disk path for a key.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read cache entry {}", path.display()))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create cache dir {}", self.dir.display()))?;

        // Write-then-rename so a crash mid-write never leaves a corrupt
        // entry behind; corrupt entries would otherwise count as misses
        // anyway, but a clean rename keeps readers simple.
        let path = self.path_for(key);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .context("failed to create temporary cache file")?;
        tmp.write_all(value.as_bytes()).context("failed to write cache entry")?;
        tmp.persist(&path)
            .with_context(|| format!("failed to persist cache entry {}", path.display()))?;
        debug!(key, path = %path.display(), "cache entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to remove cache entry {}", path.display()))
            }
        }
    }
}
