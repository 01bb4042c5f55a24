//! Generate a merged `.gitignore` from named templates.
//!
//! ```bash
//! # Print to stdout
//! gitlost generate Node Python
//!
//! # Write to a file, refusing to clobber without --force
//! gitlost generate Node Python macOS -o .gitignore
//! gitlost generate Node --output .gitignore --force
//! ```
//!
//! Unknown template names produce a warning and are skipped; templates
//! whose content cannot be fetched are skipped silently, so the output
//! is always the best available merge rather than an error.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{ensure_writable, fetch_and_combine, write_output};
use crate::config::GlobalConfig;

/// Command to generate a merged, deduplicated .gitignore.
#[derive(Args)]
pub struct GenerateCommand {
    /// Template names to combine, in output order
    #[arg(required = true, value_name = "NAME")]
    templates: Vec<String>,

    /// Write to this file instead of stdout (conventionally `.gitignore`)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    force: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        ensure_writable(self.output.as_deref(), self.force)?;

        let merged = fetch_and_combine(config, &self.templates).await;
        if merged.is_empty() {
            eprintln!(
                "{} no template content available for this selection",
                "Warning:".yellow()
            );
            return Ok(());
        }

        write_output(&merged, self.output.as_deref(), self.force)
    }
}
