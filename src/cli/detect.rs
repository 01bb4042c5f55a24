//! Suggest templates from a dependency manifest.
//!
//! ```bash
//! # Print suggestions only
//! gitlost detect package.json
//!
//! # Suggestions straight into a merged .gitignore
//! gitlost detect requirements.txt --generate -o .gitignore
//! ```
//!
//! The manifest is classified by its exact file name; anything other
//! than `package.json` or `requirements.txt` is rejected with a typed
//! error before the file is even read. Detection is best-effort and the
//! suggestions should be reviewed before use.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::common::{ensure_writable, fetch_and_combine, write_output};
use crate::catalog::Catalog;
use crate::config::GlobalConfig;
use crate::core::GitlostError;
use crate::manifest::{ManifestKind, suggest_templates};

/// Command to suggest (and optionally generate from) manifest-detected
/// templates.
#[derive(Args)]
pub struct DetectCommand {
    /// Path to a package.json or requirements.txt
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Generate the merged .gitignore from the suggestions
    #[arg(long)]
    generate: bool,

    /// Write generated output to this file instead of stdout
    #[arg(short, long, value_name = "PATH", requires = "generate")]
    output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long, requires = "generate")]
    force: bool,
}

impl DetectCommand {
    /// Execute the detect command.
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let file_name = self
            .manifest
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| GitlostError::UnsupportedManifest {
                file_name: self.manifest.display().to_string(),
            })?;
        let kind = ManifestKind::classify(file_name)?;

        let contents = std::fs::read_to_string(&self.manifest)
            .with_context(|| format!("failed to read {}", self.manifest.display()))?;

        let catalog = Catalog::builtin();
        let suggested = suggest_templates(kind, &contents, &catalog)?;

        if suggested.is_empty() {
            println!("No relevant templates detected.");
            return Ok(());
        }

        println!("{} {}", "Smart suggestion:".cyan().bold(), suggested.join(", "));
        println!("{}", "Auto-detection isn't 100% accurate. Review before using.".dimmed());

        if self.generate {
            ensure_writable(self.output.as_deref(), self.force)?;
            let merged = fetch_and_combine(config, &suggested).await;
            if merged.is_empty() {
                eprintln!(
                    "{} no template content available for the suggestions",
                    "Warning:".yellow()
                );
                return Ok(());
            }
            write_output(&merged, self.output.as_deref(), self.force)?;
        }

        Ok(())
    }
}
