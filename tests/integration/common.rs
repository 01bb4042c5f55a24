//! Shared helpers for the CLI integration tests.

use assert_cmd::Command;
use tempfile::TempDir;

/// A `gitlost` command isolated from the user's real cache and config:
/// both are pointed into `sandbox` so tests never touch `$HOME`.
pub fn gitlost(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitlost").expect("binary builds");
    cmd.env("GITLOST_CACHE_DIR", sandbox.path().join("cache"));
    cmd.env("GITLOST_CONFIG", sandbox.path().join("config.toml"));
    cmd.env("GITLOST_NO_PROGRESS", "1");
    cmd
}
