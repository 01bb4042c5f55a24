//! The static template catalog.
//!
//! The catalog is the curated, ordered list of `.gitignore` templates the
//! tool knows how to fetch. Each record pairs a human-readable name (no
//! `.gitignore` extension) with its path inside the upstream template
//! repository; the download URL derives from the raw-content base URL
//! plus that path.
//!
//! The catalog is immutable at runtime and treated as a given data
//! source: selection names that do not resolve here are silently dropped
//! from aggregation, and manifest-detection suggestions are filtered
//! against it so retired template names never surface.

use serde::Serialize;

/// Broad grouping used when displaying the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Programming languages and runtimes
    Language,
    /// Web and application frameworks
    Framework,
    /// Editors and IDEs
    Ide,
    /// Operating systems
    OperatingSystem,
    /// Build and deployment tools
    Tool,
    /// App platforms and mobile targets
    Platform,
}

impl Category {
    /// Human-readable label for table output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Language => "Programming Language",
            Self::Framework => "Framework",
            Self::Ide => "IDE",
            Self::OperatingSystem => "Operating System",
            Self::Tool => "Tool",
            Self::Platform => "App Platform",
        }
    }
}

/// One entry of the static template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    /// Unique template name, without the `.gitignore` extension
    pub name: &'static str,
    /// Path of the template file inside the upstream repository
    pub path: &'static str,
    /// Display grouping
    pub category: Category,
}

impl TemplateRecord {
    /// Build the download URL for this record against a raw-content base.
    #[must_use]
    pub fn download_url(&self, raw_base: &str) -> String {
        format!("{raw_base}{}", self.path)
    }
}

/// The static template catalog: an ordered, immutable set of records.
///
/// Lookup is by exact name match. The catalog owns nothing mutable, so a
/// single instance can be shared freely.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: &'static [TemplateRecord],
}

impl Catalog {
    /// The built-in catalog shipped with the crate.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { records: BUILTIN_TEMPLATES }
    }

    /// Resolve a template name to its record. Exact match only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Whether a template name exists in the catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.records.iter()
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty. Never true for the built-in catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

macro_rules! record {
    ($name:literal, $path:literal, $category:ident) => {
        TemplateRecord { name: $name, path: $path, category: Category::$category }
    };
}

/// The built-in template records.
///
/// Curated from the upstream template repository: root-level templates
/// use their file name directly, editor/OS templates live under
/// `Global/`, and ecosystem-specific ones under `community/`.
static BUILTIN_TEMPLATES: &[TemplateRecord] = &[
    // Languages and runtimes
    record!("C", "C.gitignore", Language),
    record!("C++", "C++.gitignore", Language),
    record!("Dart", "Dart.gitignore", Language),
    record!("Elixir", "Elixir.gitignore", Language),
    record!("Erlang", "Erlang.gitignore", Language),
    record!("Go", "Go.gitignore", Language),
    record!("Haskell", "Haskell.gitignore", Language),
    record!("Java", "Java.gitignore", Language),
    record!("Julia", "Julia.gitignore", Language),
    record!("Kotlin", "Kotlin.gitignore", Language),
    record!("Lua", "Lua.gitignore", Language),
    record!("Node", "Node.gitignore", Language),
    record!("Objective-C", "Objective-C.gitignore", Language),
    record!("OCaml", "OCaml.gitignore", Language),
    record!("Perl", "Perl.gitignore", Language),
    record!("PHP", "PHP.gitignore", Language),
    record!("Python", "Python.gitignore", Language),
    record!("R", "R.gitignore", Language),
    record!("Ruby", "Ruby.gitignore", Language),
    record!("Rust", "Rust.gitignore", Language),
    record!("Scala", "Scala.gitignore", Language),
    record!("Swift", "Swift.gitignore", Language),
    record!("TypeScript", "community/JavaScript/TypeScript.gitignore", Language),
    record!("Zig", "Zig.gitignore", Language),
    // Frameworks
    record!("Angular", "community/JavaScript/Angular.gitignore", Framework),
    record!("Astro", "community/JavaScript/Astro.gitignore", Framework),
    record!("Django", "community/Python/Django.gitignore", Framework),
    record!("Express", "community/JavaScript/Express.gitignore", Framework),
    record!("FastAPI", "community/Python/FastAPI.gitignore", Framework),
    record!("Flask", "community/Python/Flask.gitignore", Framework),
    record!("Gatsby", "community/JavaScript/Gatsby.gitignore", Framework),
    record!("Jest", "community/JavaScript/Jest.gitignore", Framework),
    record!("JupyterNotebook", "community/Python/JupyterNotebooks.gitignore", Framework),
    record!("Laravel", "Laravel.gitignore", Framework),
    record!("Nextjs", "community/JavaScript/Nextjs.gitignore", Framework),
    record!("Nuxt", "community/JavaScript/Nuxt.gitignore", Framework),
    record!("Pytest", "community/Python/Pytest.gitignore", Framework),
    record!("Rails", "Rails.gitignore", Framework),
    record!("React", "community/JavaScript/React.gitignore", Framework),
    record!("Spring", "community/Java/Spring.gitignore", Framework),
    record!("Svelte", "community/JavaScript/Svelte.gitignore", Framework),
    record!("Vue", "community/JavaScript/Vue.gitignore", Framework),
    record!("WordPress", "WordPress.gitignore", Framework),
    // App platforms
    record!("Android", "Android.gitignore", Platform),
    record!("Cordova", "community/JavaScript/Cordova.gitignore", Platform),
    record!("Electron", "community/JavaScript/Electron.gitignore", Platform),
    record!("Expo", "community/JavaScript/Expo.gitignore", Platform),
    record!("Flutter", "community/Dart/Flutter.gitignore", Platform),
    record!("iOS", "community/Swift/iOS.gitignore", Platform),
    record!("ReactNative", "community/JavaScript/ReactNative.gitignore", Platform),
    record!("Unity", "Unity.gitignore", Platform),
    record!("UnrealEngine", "UnrealEngine.gitignore", Platform),
    // Editors and IDEs
    record!("Eclipse", "Global/Eclipse.gitignore", Ide),
    record!("Emacs", "Global/Emacs.gitignore", Ide),
    record!("JetBrains", "Global/JetBrains.gitignore", Ide),
    record!("SublimeText", "Global/SublimeText.gitignore", Ide),
    record!("Vim", "Global/Vim.gitignore", Ide),
    record!("VisualStudio", "VisualStudio.gitignore", Ide),
    record!("VSCode", "Global/VisualStudioCode.gitignore", Ide),
    record!("Xcode", "Global/Xcode.gitignore", Ide),
    // Operating systems
    record!("Linux", "Global/Linux.gitignore", OperatingSystem),
    record!("macOS", "Global/macOS.gitignore", OperatingSystem),
    record!("Windows", "Global/Windows.gitignore", OperatingSystem),
    // Tools
    record!("CMake", "CMake.gitignore", Tool),
    record!("Docker", "community/Docker.gitignore", Tool),
    record!("Godot", "Godot.gitignore", Tool),
    record!("Gradle", "Gradle.gitignore", Tool),
    record!("Maven", "Maven.gitignore", Tool),
    record!("Poetry", "community/Python/Poetry.gitignore", Tool),
    record!("Terraform", "Terraform.gitignore", Tool),
    record!("TeX", "TeX.gitignore", Tool),
];
