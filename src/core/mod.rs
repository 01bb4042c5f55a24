//! Core types and error handling for gitlost.
//!
//! This module hosts the error taxonomy shared by the library and the
//! CLI. See [`error`] for the full design notes on which failures are
//! errors and which degrade silently.

pub mod error;

pub use error::{ErrorContext, GitlostError, user_friendly_error};
