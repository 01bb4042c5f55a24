//! Manifest classification, parsing, and template detection.
//!
//! Uploading a dependency manifest is the "smart suggestion" path: the
//! file is classified by exact file name into a [`ManifestKind`], its
//! dependency names are extracted, and each is looked up in the static
//! detection map ([`detection`]) to produce a set of suggested catalog
//! template names.
//!
//! Detection is explicitly best-effort: keyword lookup is exact-match
//! only, unknown dependencies are ignored, and suggested names that no
//! longer exist in the catalog are dropped silently. A malformed
//! manifest is a distinct [`GitlostError::ManifestParse`] error so the
//! caller can tell "parse failed" apart from "parsed but nothing
//! recognized" (an empty suggestion list).

pub mod detection;

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::core::GitlostError;

/// The supported manifest formats, classified by exact file name.
///
/// Anything that is not one of these is rejected up front with a typed
/// [`GitlostError::UnsupportedManifest`]; there is no content sniffing
/// or extension-based fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// A `package.json` with `dependencies`/`devDependencies` maps
    PackageJson,
    /// A line-oriented `requirements.txt` with `name==version` entries
    RequirementsTxt,
}

impl ManifestKind {
    /// Classify a manifest by its exact file name.
    pub fn classify(file_name: &str) -> Result<Self, GitlostError> {
        match file_name {
            "package.json" => Ok(Self::PackageJson),
            "requirements.txt" => Ok(Self::RequirementsTxt),
            other => Err(GitlostError::UnsupportedManifest { file_name: other.to_string() }),
        }
    }

    /// The canonical file name for this manifest kind.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::RequirementsTxt => "requirements.txt",
        }
    }

    /// The baseline template every manifest of this kind implies,
    /// reflecting the ecosystem the format belongs to.
    #[must_use]
    pub const fn baseline_template(self) -> &'static str {
        match self {
            Self::PackageJson => "Node",
            Self::RequirementsTxt => "Python",
        }
    }
}

/// The subset of `package.json` relevant to detection.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Produce suggested catalog template names for a manifest's contents.
///
/// The result is ordered: the kind's baseline template first, then
/// mapped templates in keyword-extraction order, each name at most once,
/// filtered down to names present in `catalog`. An empty vec means the
/// manifest parsed fine but nothing was recognized.
///
/// # Errors
///
/// Returns [`GitlostError::ManifestParse`] when the contents cannot be
/// parsed as the classified format.
pub fn suggest_templates(
    kind: ManifestKind,
    contents: &str,
    catalog: &Catalog,
) -> Result<Vec<String>, GitlostError> {
    let keywords = extract_keywords(kind, contents)?;
    debug!(manifest = kind.file_name(), keywords = keywords.len(), "extracted keywords");

    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut candidates: Vec<&'static str> = vec![kind.baseline_template()];
    seen.insert(kind.baseline_template());
    for keyword in &keywords {
        for &name in detection::templates_for_keyword(keyword) {
            if seen.insert(name) {
                candidates.push(name);
            }
        }
    }

    // Unknown or retired template names are dropped silently.
    Ok(candidates
        .into_iter()
        .filter(|name| catalog.contains(name))
        .map(String::from)
        .collect())
}

/// Extract lowercase dependency keywords from manifest contents.
fn extract_keywords(kind: ManifestKind, contents: &str) -> Result<Vec<String>, GitlostError> {
    match kind {
        ManifestKind::PackageJson => {
            let manifest: PackageManifest =
                serde_json::from_str(contents).map_err(|e| GitlostError::ManifestParse {
                    file_name: kind.file_name().to_string(),
                    reason: e.to_string(),
                })?;

            let mut seen = HashSet::new();
            let mut keywords = Vec::new();
            for name in manifest.dependencies.keys().chain(manifest.dev_dependencies.keys()) {
                let lower = name.to_lowercase();
                if seen.insert(lower.clone()) {
                    keywords.push(lower);
                }
            }
            Ok(keywords)
        }
        ManifestKind::RequirementsTxt => {
            let mut keywords = Vec::new();
            for line in contents.lines() {
                let name = requirement_name(line);
                if !name.is_empty() {
                    keywords.push(name);
                }
            }
            Ok(keywords)
        }
    }
}

/// Take the package name from a requirements line: everything left of
/// the first `==`, `>=`, or `<=`, trimmed and lowercased.
fn requirement_name(line: &str) -> String {
    let mut name = line;
    for op in ["==", ">=", "<="] {
        if let Some((lhs, _)) = name.split_once(op) {
            name = lhs;
        }
    }
    name.trim().to_lowercase()
}
