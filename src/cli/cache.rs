//! Manage the local listing cache.
//!
//! ```bash
//! gitlost cache info    # location, age, entry count
//! gitlost cache clean   # drop the cached listing
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::cache::{FileStore, KeyValueStore};
use crate::config::GlobalConfig;
use crate::constants::LISTING_CACHE_KEY;
use crate::listing::CachedListing;

/// Command to inspect or clear the local listing cache.
#[derive(Args)]
pub struct CacheCommand {
    #[command(subcommand)]
    command: CacheSubcommand,
}

#[derive(Subcommand)]
enum CacheSubcommand {
    /// Show the cache location, age, and entry count
    Info,
    /// Remove the cached template listing
    Clean,
}

impl CacheCommand {
    /// Execute the cache command.
    pub fn execute(self, config: &GlobalConfig) -> Result<()> {
        let store = FileStore::new(config.cache_dir());
        match self.command {
            CacheSubcommand::Info => info(&store),
            CacheSubcommand::Clean => clean(&store),
        }
    }
}

fn info(store: &FileStore) -> Result<()> {
    let path = store.path_for(LISTING_CACHE_KEY);
    println!("Cache file: {}", path.display());

    let Some(raw) = store.get(LISTING_CACHE_KEY)? else {
        println!("Status: {}", "empty".dimmed());
        return Ok(());
    };

    match serde_json::from_str::<CachedListing>(&raw) {
        Ok(cached) => {
            let age_ms =
                chrono::Utc::now().timestamp_millis().saturating_sub(cached.timestamp);
            let age_days = age_ms / (24 * 60 * 60 * 1000);
            println!("Templates:  {}", cached.templates.len());
            println!("Age:        {age_days} day(s)");
        }
        Err(_) => println!("Status: {}", "corrupt (will be refetched)".yellow()),
    }
    Ok(())
}

fn clean(store: &FileStore) -> Result<()> {
    store.remove(LISTING_CACHE_KEY)?;
    println!("{} removed cached template listing", "Success:".green().bold());
    Ok(())
}
