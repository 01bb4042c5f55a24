//! gitlost CLI entry point.
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The commands:
//! - `list` - list templates from the remote catalog
//! - `generate` - compose a merged .gitignore from named templates
//! - `detect` - suggest templates from a dependency manifest
//! - `cache` - manage the local listing cache

use anyhow::Result;
use clap::Parser;
use gitlost::cli;
use gitlost::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
