//! Spinner feedback for network-bound operations.
//!
//! There are no timeouts on network calls, so the spinner is the only
//! signal the user gets while a slow host is consulted. Spinners are
//! suppressed when `GITLOST_NO_PROGRESS` is set (the `--no-progress`
//! flag sets it) or when stderr is not a terminal, so piped and CI
//! output stays clean.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::ENV_NO_PROGRESS;

/// Whether progress indicators should be shown at all.
#[must_use]
pub fn progress_enabled() -> bool {
    std::env::var_os(ENV_NO_PROGRESS).is_none() && std::io::stderr().is_terminal()
}

/// A transient spinner that clears itself when finished or dropped.
#[derive(Debug)]
pub struct ProgressSpinner {
    bar: Option<ProgressBar>,
}

impl ProgressSpinner {
    /// Start a spinner with the given message, or a no-op handle when
    /// progress output is disabled.
    #[must_use]
    pub fn start(message: impl Into<String>) -> Self {
        if !progress_enabled() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Update the spinner message.
    pub fn set_message(&self, message: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.into());
        }
    }

    /// Stop the spinner and erase it from the terminal.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}
