//! Aggregation properties over the public API.

use std::collections::HashSet;

use gitlost::aggregate::{combine, dedup_lines};
use gitlost::catalog::Catalog;
use gitlost::test_utils::static_fetcher;

fn selection(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Non-blank, non-comment lines never repeat in any combine output.
#[tokio::test]
async fn combined_output_has_no_duplicate_content_lines() {
    let fetcher = static_fetcher(&[
        ("Node", "node_modules/\n*.log\ndist/"),
        ("Python", "__pycache__/\n*.log\ndist/\n*.pyc"),
        ("Go", "bin/\n*.log\n*.test"),
    ]);
    let catalog = Catalog::builtin();

    let merged = combine(&fetcher, &catalog, &selection(&["Node", "Python", "Go"])).await;
    let mut seen = HashSet::new();
    for line in merged.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        assert!(seen.insert(line), "duplicate content line: {line}");
    }
}

#[tokio::test]
async fn empty_selection_is_empty_string() {
    let fetcher = static_fetcher(&[("Node", "node_modules/")]);
    let catalog = Catalog::builtin();
    assert_eq!(combine(&fetcher, &catalog, &[]).await, "");
}

/// The canonical merge example: the second `*.log` is dropped,
/// everything else survives in first-occurrence order.
#[tokio::test]
async fn node_python_log_line_merge() {
    let fetcher = static_fetcher(&[
        ("Node", "node_modules/\n*.log"),
        ("Python", "__pycache__/\n*.log"),
    ]);
    let catalog = Catalog::builtin();

    let merged = combine(&fetcher, &catalog, &selection(&["Node", "Python"])).await;
    let content: Vec<&str> =
        merged.lines().filter(|l| !l.starts_with('#') && !l.trim().is_empty()).collect();
    assert_eq!(content, vec!["node_modules/", "*.log", "__pycache__/"]);
}

/// Warm-cache repetition: identical output, a single network fetch.
#[tokio::test]
async fn repeated_combine_uses_cache() {
    let fetcher = static_fetcher(&[("Rust", "target/\nCargo.lock")]);
    let catalog = Catalog::builtin();
    let names = selection(&["Rust"]);

    let first = combine(&fetcher, &catalog, &names).await;
    let second = combine(&fetcher, &catalog, &names).await;

    assert_eq!(first, second);
    assert_eq!(fetcher.host_ref().request_count(), 1);
}

#[tokio::test]
async fn duplicate_selection_collapses_to_one_section() {
    let fetcher = static_fetcher(&[("Node", "node_modules/"), ("Python", "__pycache__/")]);
    let catalog = Catalog::builtin();

    let merged =
        combine(&fetcher, &catalog, &selection(&["Node", "Python", "Node"])).await;
    assert_eq!(merged.matches("# ===== Node =====").count(), 1);
    assert_eq!(merged.matches("# ===== Python =====").count(), 1);
    assert_eq!(fetcher.host_ref().request_count(), 2);
}

/// dedup_lines is idempotent: running it twice changes nothing.
#[test]
fn dedup_is_idempotent() {
    let text = "# comment\na\nb\na\n\nb\nc\n# comment";
    let once = dedup_lines(text);
    let twice = dedup_lines(&once);
    assert_eq!(once, twice);
}
