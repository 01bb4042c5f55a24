//! CLI tests for `gitlost cache`, against an isolated cache directory.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::gitlost;

fn seed_listing(sandbox: &TempDir, template_count: usize) -> std::path::PathBuf {
    let cache_dir = sandbox.path().join("cache");
    std::fs::create_dir_all(&cache_dir).unwrap();

    let templates: Vec<serde_json::Value> = (0..template_count)
        .map(|i| {
            serde_json::json!({
                "name": format!("Template{i}"),
                "path": format!("Template{i}.gitignore"),
                "download_url": format!("https://raw.test.invalid/Template{i}.gitignore"),
                "category": "Root",
            })
        })
        .collect();
    let record = serde_json::json!({
        "timestamp": chrono::Utc::now().timestamp_millis(),
        "templates": templates,
    });

    let path = cache_dir.join("gitignore_template_list_cache_v1.json");
    std::fs::write(&path, record.to_string()).unwrap();
    path
}

#[test]
fn cache_info_reports_empty_when_nothing_cached() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox)
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn cache_info_reports_entry_count_and_age() {
    let sandbox = TempDir::new().unwrap();
    seed_listing(&sandbox, 3);

    gitlost(&sandbox)
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates:  3"))
        .stdout(predicate::str::contains("Age:"));
}

#[test]
fn cache_clean_removes_the_listing_file() {
    let sandbox = TempDir::new().unwrap();
    let path = seed_listing(&sandbox, 1);
    assert!(path.exists());

    gitlost(&sandbox)
        .args(["cache", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed cached template listing"));
    assert!(!path.exists());
}

#[test]
fn cache_clean_on_empty_cache_succeeds() {
    let sandbox = TempDir::new().unwrap();

    gitlost(&sandbox).args(["cache", "clean"]).assert().success();
}

#[test]
fn cache_info_flags_corrupt_entries() {
    let sandbox = TempDir::new().unwrap();
    let cache_dir = sandbox.path().join("cache");
    std::fs::create_dir_all(&cache_dir).unwrap();
    std::fs::write(cache_dir.join("gitignore_template_list_cache_v1.json"), "not json").unwrap();

    gitlost(&sandbox)
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corrupt"));
}
