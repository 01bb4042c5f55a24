//! Integration test suite driving the compiled binary with `assert_cmd`.
//!
//! Every test here is offline: each one either exercises a path that
//! fails before any network call or isolates the cache and config under
//! a temporary directory.

mod cli_cache;
mod cli_detect;
mod cli_generate;
mod cli_list;
mod common;
