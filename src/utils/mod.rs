//! Shared CLI utilities.
//!
//! Currently just the progress spinner; file and cache I/O live with
//! their owning modules.

pub mod progress;

pub use progress::ProgressSpinner;
