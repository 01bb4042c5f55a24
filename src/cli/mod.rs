//! Command-line interface for gitlost.
//!
//! Each command lives in its own module with its own argument struct and
//! execution logic:
//!
//! - `list` - print the remote template listing (cache-backed)
//! - `generate` - fetch, combine, and deduplicate selected templates
//! - `detect` - suggest templates from a dependency manifest
//! - `cache` - inspect or clear the local listing cache
//!
//! All commands support the global options `--verbose`, `--quiet`,
//! `--no-progress`, and `--config <PATH>`.
//!
//! # Usage
//!
//! ```bash
//! # Browse what can be selected
//! gitlost list --category Global
//!
//! # Compose a .gitignore from three templates
//! gitlost generate Node Python macOS -o .gitignore
//!
//! # Let a manifest drive the selection
//! gitlost detect package.json --generate -o .gitignore
//!
//! # Cache maintenance
//! gitlost cache info
//! gitlost cache clean
//! ```

mod cache;
mod common;
mod detect;
mod generate;
mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;
use crate::constants::{ENV_CONFIG_PATH, ENV_NO_PROGRESS};

/// Runtime configuration derived from the global CLI flags.
///
/// Kept separate from the parsed arguments so tests can inject a
/// configuration without going through `clap`.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` disables logging entirely (quiet).
    pub log_level: Option<String>,
    /// Disable progress spinners.
    pub no_progress: bool,
    /// Custom global configuration file path.
    pub config_path: Option<String>,
}

impl CliConfig {
    /// Apply this configuration to the process environment.
    ///
    /// Called once at the start of execution, before the command spawns
    /// any work that reads these variables.
    pub fn apply_to_env(&self) {
        // SAFETY: called once during startup from the main task, before
        // any concurrent reads of the environment.
        if self.no_progress {
            unsafe { std::env::set_var(ENV_NO_PROGRESS, "1") };
        }
        if let Some(path) = &self.config_path {
            unsafe { std::env::set_var(ENV_CONFIG_PATH, path) };
        }
    }
}

/// Main CLI application structure for gitlost.
#[derive(Parser)]
#[command(
    name = "gitlost",
    about = "Compose merged .gitignore files from the GitHub gitignore template catalog",
    version,
    long_about = "gitlost composes a merged .gitignore from named templates, with \
                  optional auto-detection from a package.json or requirements.txt."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable progress spinners (automatically disabled without a TTY)
    #[arg(long, global = true)]
    no_progress: bool,

    /// Path to a custom configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,
}

/// Available gitlost commands.
#[derive(Subcommand)]
enum Commands {
    /// List available templates from the remote catalog
    List(list::ListCommand),

    /// Generate a merged .gitignore from the named templates
    Generate(generate::GenerateCommand),

    /// Suggest templates from a dependency manifest
    Detect(detect::DetectCommand),

    /// Manage the local listing cache
    Cache(cache::CacheCommand),
}

impl Cli {
    /// Build a [`CliConfig`] from the parsed global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig { log_level, no_progress: self.no_progress, config_path: self.config.clone() }
    }

    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let cli_config = self.build_config();
        cli_config.apply_to_env();
        init_logging(cli_config.log_level.as_deref());

        let config = GlobalConfig::load()?;

        match self.command {
            Commands::List(cmd) => cmd.execute(&config).await,
            Commands::Generate(cmd) => cmd.execute(&config).await,
            Commands::Detect(cmd) => cmd.execute(&config).await,
            Commands::Cache(cmd) => cmd.execute(&config),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags; quiet mode
/// (`level == None`) installs no subscriber at all.
fn init_logging(level: Option<&str>) {
    let directive = match std::env::var("RUST_LOG") {
        Ok(env) => env,
        Err(_) => match level {
            Some(level) => level.to_string(),
            None => return,
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .try_init();
}
