//! CLI tests for `gitlost list --builtin`, the only listing mode that
//! works without network access.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::gitlost;

#[test]
fn list_builtin_shows_the_static_catalog() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox)
        .args(["list", "--builtin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node"))
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("template(s)"));
}

#[test]
fn list_builtin_category_filter_is_case_insensitive() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox)
        .args(["list", "--builtin", "--category", "operating system"])
        .assert()
        .success()
        .stdout(predicate::str::contains("macOS"))
        .stdout(predicate::str::contains("Node").not());
}

#[test]
fn list_builtin_json_output_is_parseable() {
    let sandbox = TempDir::new().unwrap();

    let output = gitlost(&sandbox)
        .args(["list", "--builtin", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.as_array().unwrap().len() > 50);
}

#[test]
fn list_builtin_conflicts_with_refresh() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox).args(["list", "--builtin", "--refresh"]).assert().failure();
}
