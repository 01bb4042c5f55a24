//! CLI tests for `gitlost detect`. Detection is fully local, so these
//! run without network access.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::gitlost;

#[test]
fn detect_package_json_suggests_node_and_react() {
    let sandbox = TempDir::new().unwrap();
    let manifest = sandbox.path().join("package.json");
    std::fs::write(&manifest, r#"{"dependencies": {"react": "^18.0.0"}}"#).unwrap();

    gitlost(&sandbox)
        .args(["detect"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Smart suggestion:"))
        .stdout(predicate::str::contains("Node"))
        .stdout(predicate::str::contains("React"));
}

#[test]
fn detect_requirements_suggests_python_and_django() {
    let sandbox = TempDir::new().unwrap();
    let manifest = sandbox.path().join("requirements.txt");
    std::fs::write(&manifest, "django==4.2\nrequests==2.31\n").unwrap();

    gitlost(&sandbox)
        .args(["detect"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("Django"))
        .stdout(predicate::str::contains("Requests").not());
}

#[test]
fn detect_rejects_unsupported_manifest_without_reading_it() {
    let sandbox = TempDir::new().unwrap();
    let manifest = sandbox.path().join("Gemfile");
    std::fs::write(&manifest, "gem 'rails'").unwrap();

    gitlost(&sandbox)
        .args(["detect"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported manifest file"))
        .stderr(predicate::str::contains("package.json or requirements.txt"));
}

#[test]
fn detect_malformed_package_json_fails_with_parse_error() {
    let sandbox = TempDir::new().unwrap();
    let manifest = sandbox.path().join("package.json");
    std::fs::write(&manifest, "{ this is not json").unwrap();

    gitlost(&sandbox)
        .args(["detect"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse package.json"));
}

#[test]
fn detect_empty_requirements_still_suggests_python_baseline() {
    let sandbox = TempDir::new().unwrap();
    let manifest = sandbox.path().join("requirements.txt");
    std::fs::write(&manifest, "").unwrap();

    gitlost(&sandbox)
        .args(["detect"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"));
}
