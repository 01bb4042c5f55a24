//! CLI tests for `gitlost generate`. Only offline paths are exercised:
//! output-collision checks happen before any fetch, and selections with
//! no resolvable names never issue a request.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::gitlost;

#[test]
fn generate_refuses_to_overwrite_without_force() {
    let sandbox = TempDir::new().unwrap();
    let output = sandbox.path().join(".gitignore");
    std::fs::write(&output, "existing content\n").unwrap();

    gitlost(&sandbox)
        .args(["generate", "Node", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    // The original file is untouched.
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing content\n");
}

#[test]
fn generate_with_only_unknown_names_warns_and_succeeds() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox)
        .args(["generate", "DefinitelyNotATemplate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown template: DefinitelyNotATemplate"))
        .stderr(predicate::str::contains("no template content available"));
}

#[test]
fn generate_requires_at_least_one_template() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox).args(["generate"]).assert().failure();
}

#[test]
fn help_lists_all_commands() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("cache"));
}
