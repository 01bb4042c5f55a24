//! List available templates from the remote catalog.
//!
//! ```bash
//! gitlost list                      # cached listing, table output
//! gitlost list --refresh            # drop the cache and refetch
//! gitlost list --category Global    # one source directory only
//! gitlost list --format json        # machine-readable
//! gitlost list --builtin            # static catalog, fully offline
//! ```
//!
//! The remote listing is served from the local cache when it is younger
//! than the configured TTL; `--refresh` removes the cached entry first
//! so all three directory listings are refetched. `--builtin` skips the
//! remote listing entirely and shows the curated static catalog.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use tracing::debug;

use crate::cache::{FileStore, KeyValueStore};
use crate::catalog::Catalog;
use crate::config::GlobalConfig;
use crate::constants::LISTING_CACHE_KEY;
use crate::fetcher::HttpHost;
use crate::listing;
use crate::utils::ProgressSpinner;

/// Output format for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array of records
    Json,
}

/// Command to list templates from the remote catalog.
#[derive(Args)]
pub struct ListCommand {
    /// Bypass the local cache and refetch the listing
    #[arg(long)]
    refresh: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Only show templates from this source directory (Root, Global, community)
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Show the built-in static catalog instead of the remote listing
    #[arg(long, conflicts_with = "refresh")]
    builtin: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        if self.builtin {
            return self.print_builtin();
        }

        let store = FileStore::new(config.cache_dir());
        if self.refresh {
            // Best-effort: an unremovable entry just means a cache hit.
            if let Err(e) = store.remove(LISTING_CACHE_KEY) {
                debug!(error = %e, "failed to drop listing cache before refresh");
            }
        }

        let host = HttpHost::new();
        let spinner = ProgressSpinner::start("Fetching template listing...");
        let mut templates =
            listing::list_all(&host, &store, config.api_base(), config.listing_ttl()).await;
        spinner.finish();

        if let Some(category) = &self.category {
            templates.retain(|t| t.category.eq_ignore_ascii_case(category));
        }

        if templates.is_empty() {
            eprintln!("{} no templates available", "Warning:".yellow());
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&templates)?),
            OutputFormat::Table => {
                for template in &templates {
                    println!("{:<32} {}", template.name.bold(), template.category.dimmed());
                }
                println!("\n{} template(s)", templates.len());
            }
        }

        Ok(())
    }

    /// Print the static catalog without touching cache or network.
    fn print_builtin(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let records: Vec<_> = catalog
            .iter()
            .filter(|record| {
                self.category
                    .as_ref()
                    .is_none_or(|c| record.category.as_str().eq_ignore_ascii_case(c))
            })
            .collect();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            OutputFormat::Table => {
                for record in &records {
                    println!("{:<32} {}", record.name.bold(), record.category.as_str().dimmed());
                }
                println!("\n{} template(s)", records.len());
            }
        }

        Ok(())
    }
}
