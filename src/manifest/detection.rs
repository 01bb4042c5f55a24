//! Keyword-to-template detection lookup.
//!
//! A fixed, many-to-many mapping from lowercase dependency keywords to
//! the catalog template names they imply. One keyword may imply several
//! templates (`react` pulls in both `Node` and `React`) and one template
//! may be implied by several keywords. Lookup is case-insensitive exact
//! match only; there is no fuzzy matching.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The static detection map.
///
/// Keys must be lowercase; callers lowercase extracted keywords before
/// lookup. Values reference template names that are expected to exist in
/// the catalog, but membership is re-checked at suggestion time so a
/// retired name degrades to "no suggestion" rather than an error.
static DETECTION_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let entries: &[(&str, &[&str])] = &[
            // Node.js ecosystem
            ("node", &["Node"]),
            ("react", &["Node", "React"]),
            ("next", &["Node", "Nextjs"]),
            ("next.js", &["Node", "Nextjs"]),
            ("vue", &["Node", "Vue"]),
            ("angular", &["Node", "Angular"]),
            ("svelte", &["Node", "Svelte"]),
            ("typescript", &["Node", "TypeScript"]),
            ("jest", &["Node", "Jest"]),
            ("express", &["Node", "Express"]),
            ("electron", &["Node", "Electron"]),
            ("gatsby", &["Node", "Gatsby"]),
            ("nuxt", &["Node", "Nuxt"]),
            ("nuxt.js", &["Node", "Nuxt"]),
            ("cordova", &["Node", "Cordova"]),
            ("expo", &["Node", "Expo"]),
            ("react-native", &["Node", "ReactNative"]),
            ("flutter", &["Flutter"]),
            // Python ecosystem
            ("python", &["Python"]),
            ("django", &["Python", "Django"]),
            ("flask", &["Python", "Flask"]),
            ("fastapi", &["Python", "FastAPI"]),
            ("pytorch", &["Python"]),
            ("torch", &["Python"]),
            ("notebook", &["Python", "JupyterNotebook"]),
            ("jupyter", &["Python", "JupyterNotebook"]),
            ("scipy", &["Python"]),
            ("numpy", &["Python"]),
            ("pandas", &["Python"]),
            ("pytest", &["Python", "Pytest"]),
            ("poetry", &["Python", "Poetry"]),
            ("pipenv", &["Python"]),
        ];
        entries.iter().copied().collect()
    });

/// Look up the template names implied by a dependency keyword.
///
/// Returns an empty slice when the keyword has no mapping.
#[must_use]
pub fn templates_for_keyword(keyword: &str) -> &'static [&'static str] {
    DETECTION_MAP.get(keyword).copied().unwrap_or(&[])
}
