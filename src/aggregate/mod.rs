//! Template aggregation and line-level deduplication.
//!
//! Given a selection of template names, [`combine`] fetches each one
//! (duplicate names collapse to a single section), concatenates the
//! results under `# ===== <name> =====` headers, and then removes
//! duplicate content lines across the whole merged text. Blank lines and
//! comment lines are kept verbatim so section structure survives; any
//! other line is kept only at its first occurrence.
//!
//! Templates whose fetch fails are skipped entirely — no placeholder and
//! no error line in the output. This mirrors the fetcher's documented
//! skip-on-failure policy: a partially available selection still yields
//! a usable `.gitignore`.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::fetcher::{ContentHost, TemplateFetcher};

/// Combine the selected templates into one deduplicated document.
///
/// Section order strictly follows the deduplicated selection order, and
/// line dedup runs only after every fetch for this call has completed —
/// callers never observe partial output. An empty selection (or one
/// where nothing resolves or fetches) yields the empty string, not an
/// empty-but-headered document.
pub async fn combine<H: ContentHost>(
    fetcher: &TemplateFetcher<H>,
    catalog: &Catalog,
    selected: &[String],
) -> String {
    let mut seen_names = HashSet::new();
    let mut sections: Vec<String> = Vec::new();

    for name in selected {
        // Duplicate names collapse to one fetch; unresolved names are
        // dropped without a network call.
        if !seen_names.insert(name.as_str()) || !catalog.contains(name) {
            continue;
        }
        match fetcher.fetch(catalog, name).await {
            Some(content) => {
                sections.push(format!("# ===== {name} =====\n{}", content.trim()));
            }
            None => {
                debug!(name, "skipping template with failed fetch");
            }
        }
    }

    if sections.is_empty() {
        return String::new();
    }

    dedup_lines(&sections.join("\n\n"))
}

/// Remove duplicate content lines across a merged document.
///
/// A line that is empty after trimming or starts with `#` is always kept
/// regardless of repetition, preserving blank separators, section
/// headers, and comments. Every other line survives only at its first
/// occurrence, in order, across the entire text.
#[must_use]
pub fn dedup_lines(text: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let deduped: Vec<&str> = text
        .lines()
        .filter(|line| {
            if line.trim().is_empty() || line.starts_with('#') {
                return true;
            }
            seen.insert(line)
        })
        .collect();
    deduped.join("\n")
}
