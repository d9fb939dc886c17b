//! Config loading and normalization across formats

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use nav_core::{DiagnosticKind, Diagnostics, MappingKind, NavConfig};
use nav_fs::NormalizedPath;

fn load(path: &Path) -> (NavConfig, Diagnostics) {
    let mut diags = Diagnostics::new();
    let config = NavConfig::load(&NormalizedPath::new(path), &mut diags).unwrap();
    (config, diags)
}

#[test]
fn test_toml_and_yaml_agree() {
    let temp = TempDir::new().unwrap();

    let toml_path = temp.path().join("nav.toml");
    fs::write(
        &toml_path,
        r#"
["/2024/"]
levels = 2
exclude = ["*draft*"]
special-mappings = [
    "/syllabus.qmd",
    { path = "/index.qmd", title = "Home", order = 1.0 },
]
"#,
    )
    .unwrap();

    let yaml_path = temp.path().join("nav.yml");
    fs::write(
        &yaml_path,
        r#"
"/2024/":
  levels: 2
  exclude: ["*draft*"]
  special-mappings:
    - "/syllabus.qmd"
    - path: "/index.qmd"
      title: Home
      order: 1.0
"#,
    )
    .unwrap();

    let (from_toml, d1) = load(&toml_path);
    let (from_yaml, d2) = load(&yaml_path);
    assert!(d1.is_empty() && d2.is_empty());

    let a = &from_toml.scopes()["/2024/"];
    let b = &from_yaml.scopes()["/2024/"];
    assert_eq!(a.levels, b.levels);
    assert_eq!(a.mappings, b.mappings);
    assert_eq!(a.mappings[0].path, "syllabus.qmd");
    assert_eq!(a.mappings[0].kind, MappingKind::File);
    assert_eq!(a.mappings[1].title.as_deref(), Some("Home"));
}

#[test]
fn test_invalid_scope_disabled_others_survive() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nav.json");
    fs::write(
        &path,
        r#"{
            "/bad/": { "levels": -1 },
            "/worse/": { "levels": "many" },
            "/good/": { "levels": 4 }
        }"#,
    )
    .unwrap();

    let (config, diags) = load(&path);
    assert_eq!(config.scopes().len(), 1);
    assert!(config.scopes().contains_key("/good/"));
    assert_eq!(diags.of_kind(DiagnosticKind::ConfigInvalid).count(), 2);
}

#[test]
fn test_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let mut diags = Diagnostics::new();
    let result = NavConfig::load(
        &NormalizedPath::new(temp.path().join("absent.toml")),
        &mut diags,
    );
    assert!(result.is_err());
}
