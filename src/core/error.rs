//! Error handling for gitlost.
//!
//! The error system is built around two types:
//! - [`GitlostError`] - enumerated error types for all failure cases
//! - [`ErrorContext`] - wrapper that adds user-friendly messages and
//!   actionable suggestions for CLI display
//!
//! Only failures that must reach the user become errors. Per-template
//! fetch failures, listing failures, and cache read/write failures are
//! deliberately *not* represented here: the fetcher and listing modules
//! degrade to "absent" on those paths (see the crate-level policy notes)
//! so that the worst observable outcome is a shorter merged output,
//! never a crash.
//!
//! Use [`user_friendly_error`] at the CLI boundary to convert any
//! `anyhow::Error` into an [`ErrorContext`] with a suggestion attached.

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gitlost operations.
///
/// Each variant represents a specific failure mode and carries enough
/// context (file names, paths, reasons) for a useful message.
#[derive(Error, Debug)]
pub enum GitlostError {
    /// A manifest file was supplied whose name is not recognized.
    ///
    /// Only `package.json` and `requirements.txt` are supported; the
    /// dispatch is by exact file name, with no content sniffing.
    #[error("unsupported manifest file: {file_name}")]
    UnsupportedManifest {
        /// The file name that failed classification
        file_name: String,
    },

    /// A recognized manifest could not be parsed.
    ///
    /// Distinct from "parsed but nothing recognized", which yields an
    /// empty suggestion list and no error.
    #[error("could not parse {file_name}: {reason}")]
    ManifestParse {
        /// The manifest file name
        file_name: String,
        /// Why parsing failed
        reason: String,
    },

    /// The global configuration file exists but is not valid TOML.
    #[error("invalid configuration file {path}: {reason}")]
    ConfigParse {
        /// Path of the offending config file
        path: PathBuf,
        /// Parse error detail
        reason: String,
    },

    /// An output file already exists and `--force` was not given.
    #[error("output file already exists: {path}")]
    OutputExists {
        /// The path that would have been overwritten
        path: PathBuf,
    },

    /// I/O error wrapper for std::io operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error context wrapper providing user-friendly messages and suggestions.
///
/// Wraps any error with an optional suggestion and details section so the
/// CLI can print something actionable instead of a bare error chain.
pub struct ErrorContext {
    /// The underlying error
    pub error: anyhow::Error,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from any error type.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self { error: error.into(), suggestion: None, details: None }
    }

    /// Attach a suggestion for how to resolve the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach additional details about the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error to stderr with colors and formatting.
    pub fn display(&self) {
        eprintln!("{} {}", "Error:".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("\n{} {}", "Details:".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{} {}", "Suggestion:".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Convert any error into a user-friendly [`ErrorContext`] with
/// contextual suggestions.
///
/// Known [`GitlostError`] variants get targeted suggestions; everything
/// else passes through unchanged.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast_ref::<GitlostError>() {
        Some(GitlostError::UnsupportedManifest { .. }) => ErrorContext::new(error)
            .with_suggestion("Supply a package.json or requirements.txt file")
            .with_details("Manifest files are recognized by exact file name"),
        Some(GitlostError::ManifestParse { file_name, .. }) => {
            let suggestion = format!("Check that {file_name} is well-formed");
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        Some(GitlostError::ConfigParse { path, .. }) => {
            let details = format!("Configuration is read from {}", path.display());
            ErrorContext::new(error)
                .with_suggestion("Fix or delete the configuration file and retry")
                .with_details(details)
        }
        Some(GitlostError::OutputExists { .. }) => {
            ErrorContext::new(error).with_suggestion("Pass --force to overwrite the existing file")
        }
        _ => ErrorContext::new(error),
    }
}
