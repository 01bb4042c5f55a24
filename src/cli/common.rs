//! Helpers shared between CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::aggregate;
use crate::catalog::Catalog;
use crate::config::GlobalConfig;
use crate::core::GitlostError;
use crate::fetcher::{HttpHost, TemplateFetcher};
use crate::utils::ProgressSpinner;

/// Fetch and combine the selected templates, with spinner feedback and a
/// stderr warning for each name that does not resolve in the catalog.
///
/// The merge itself follows the library's skip-on-failure policy, so the
/// result may cover fewer templates than were asked for.
pub(crate) async fn fetch_and_combine(config: &GlobalConfig, selected: &[String]) -> String {
    let catalog = Catalog::builtin();
    for name in selected {
        if !catalog.contains(name) {
            eprintln!("{} unknown template: {name}", "Warning:".yellow());
        }
    }

    let fetcher = TemplateFetcher::new(HttpHost::new(), config.raw_base());
    let spinner = ProgressSpinner::start(format!("Fetching {} template(s)...", selected.len()));
    let merged = aggregate::combine(&fetcher, &catalog, selected).await;
    spinner.finish();
    debug!(bytes = merged.len(), "aggregation complete");
    merged
}

/// Print the merged text to stdout, or write it to `output`.
///
/// Refuses to overwrite an existing file unless `force` is set; callers
/// check this *before* fetching so the failure comes without network
/// traffic.
pub(crate) fn write_output(merged: &str, output: Option<&Path>, force: bool) -> Result<()> {
    match output {
        None => {
            if !merged.is_empty() {
                println!("{merged}");
            }
            Ok(())
        }
        Some(path) => {
            if path.exists() && !force {
                return Err(GitlostError::OutputExists { path: path.to_path_buf() }.into());
            }
            std::fs::write(path, format!("{merged}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} wrote {}", "Success:".green().bold(), path.display());
            Ok(())
        }
    }
}

/// Pre-flight check for `--output`: fail early, before any fetch.
pub(crate) fn ensure_writable(output: Option<&Path>, force: bool) -> Result<()> {
    if let Some(path) = output {
        if path.exists() && !force {
            return Err(GitlostError::OutputExists { path: path.to_path_buf() }.into());
        }
    }
    Ok(())
}
