//! Manifest detection properties over the public API.

use gitlost::catalog::Catalog;
use gitlost::core::GitlostError;
use gitlost::manifest::{ManifestKind, suggest_templates};

#[test]
fn react_dependency_suggests_node_and_react() {
    let catalog = Catalog::builtin();
    let contents = r#"{"dependencies": {"react": "^18.0.0"}}"#;
    let suggested = suggest_templates(ManifestKind::PackageJson, contents, &catalog).unwrap();
    assert!(suggested.contains(&"Node".to_string()));
    assert!(suggested.contains(&"React".to_string()));
}

#[test]
fn requirements_suggest_python_and_django_but_not_requests() {
    let catalog = Catalog::builtin();
    let contents = "django==4.2\nrequests==2.31";
    let suggested =
        suggest_templates(ManifestKind::RequirementsTxt, contents, &catalog).unwrap();
    assert_eq!(suggested, vec!["Python".to_string(), "Django".to_string()]);
}

#[test]
fn unsupported_file_name_is_typed_error() {
    let err = ManifestKind::classify("Gemfile").unwrap_err();
    assert!(matches!(err, GitlostError::UnsupportedManifest { file_name } if file_name == "Gemfile"));
}

#[test]
fn malformed_json_is_parse_failure_not_empty_result() {
    let catalog = Catalog::builtin();
    let result = suggest_templates(ManifestKind::PackageJson, "{", &catalog);
    assert!(matches!(result, Err(GitlostError::ManifestParse { .. })));
}

#[test]
fn parsed_but_unrecognized_yields_baseline_only() {
    let catalog = Catalog::builtin();
    let contents = r#"{"dependencies": {"left-pad": "1.3.0"}}"#;
    let suggested = suggest_templates(ManifestKind::PackageJson, contents, &catalog).unwrap();
    assert_eq!(suggested, vec!["Node".to_string()]);
}

#[test]
fn suggestions_are_insertion_order_stable() {
    let catalog = Catalog::builtin();
    let contents = "flask==3.0\ndjango==4.2";
    let suggested =
        suggest_templates(ManifestKind::RequirementsTxt, contents, &catalog).unwrap();
    // Baseline first, then keyword order from the manifest.
    assert_eq!(
        suggested,
        vec!["Python".to_string(), "Flask".to_string(), "Django".to_string()]
    );
}
