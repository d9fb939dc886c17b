//! End-to-end resolution over a real content tree
//!
//! Builds an actual course directory in a temp dir, loads the config
//! from a TOML file, and resolves navigation with the filesystem-backed
//! lister and metadata provider.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use nav_core::{DiagnosticKind, Diagnostics, HierarchyNode, NavConfig, Resolver};
use nav_fs::{FsDirectoryLister, NormalizedPath};
use nav_meta::FileMetadataProvider;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small course site: autumn term with front matter, weeks, and a
/// draft that should never surface.
fn setup_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(
        root,
        "2024/autumn-term/index.qmd",
        "---\nnav-title: Home\nnav-order: 1\n---\n# Welcome\n",
    );
    write(
        root,
        "2024/autumn-term/syllabus.qmd",
        "---\ntitle: Syllabus\n---\nRead this first.\n",
    );
    write(
        root,
        "2024/autumn-term/draft-notes.qmd",
        "---\ntitle: Scratch\n---\nNot ready.\n",
    );
    write(
        root,
        "2024/autumn-term/weeks/week01/lecture.qmd",
        "# Week one\n",
    );
    write(
        root,
        "2024/autumn-term/weeks/week01/w01-practice.qmd",
        "# Practice\n",
    );
    write(root, "2024/autumn-term/weeks/week02/lab.qmd", "# Lab\n");
    // Not a content file; must be invisible to the scanner.
    write(root, "2024/autumn-term/weeks/data.csv", "a,b\n1,2\n");

    write(
        root,
        "nav.toml",
        r#"
["/2024/autumn-term/"]
levels = 3
exclude = ["*draft*"]
special-mappings = [
    { path = "weeks/", title = "Weeks" },
]
"#,
    );

    temp
}

fn load_config(root: &Path) -> NavConfig {
    let mut diags = Diagnostics::new();
    let config = NavConfig::load(&NormalizedPath::new(root.join("nav.toml")), &mut diags).unwrap();
    assert!(diags.is_empty(), "config should normalize cleanly");
    config
}

fn titles(node: &HierarchyNode) -> Vec<&str> {
    node.children.iter().map(|c| c.title.as_str()).collect()
}

#[test]
fn test_full_course_resolution() {
    let temp = setup_site();
    let config = load_config(temp.path());
    let lister = FsDirectoryLister::new();
    let metadata = FileMetadataProvider::new();
    let resolver = Resolver::new(
        &config,
        NormalizedPath::new(temp.path()),
        &lister,
        &metadata,
    );

    let resolution = resolver
        .resolve(&NormalizedPath::new("/2024/autumn-term/index.html"))
        .expect("scope should match");

    // Home first (order 1), then the unordered directory, then the
    // unordered file.
    assert_eq!(titles(&resolution.tree), vec!["Home", "Weeks", "Syllabus"]);

    let weeks = &resolution.tree.children[1];
    assert!(weeks.is_dir());
    assert_eq!(weeks.collapsed, Some(false));
    assert_eq!(titles(weeks), vec!["Week 01", "Week 02"]);

    let week01 = &weeks.children[0];
    assert_eq!(titles(week01), vec!["Lecture", "W01 Practice"]);

    // The draft was excluded; the csv was never scanned.
    assert!(resolution.diagnostics.is_empty());
    let all_paths = {
        fn collect<'n>(n: &'n HierarchyNode, out: &mut Vec<&'n str>) {
            out.push(n.path.as_str());
            n.children.iter().for_each(|c| collect(c, out));
        }
        let mut v = Vec::new();
        collect(&resolution.tree, &mut v);
        v
    };
    assert!(all_paths.iter().all(|p| !p.contains("draft")));
    assert!(all_paths.iter().all(|p| !p.contains("csv")));
}

#[test]
fn test_active_item_marking() {
    let temp = setup_site();
    let config = load_config(temp.path());
    let lister = FsDirectoryLister::new();
    let metadata = FileMetadataProvider::new();
    let resolver = Resolver::new(
        &config,
        NormalizedPath::new(temp.path()),
        &lister,
        &metadata,
    );

    let page = NormalizedPath::new("/2024/autumn-term/syllabus.html");
    let resolution = resolver.resolve(&page).unwrap();
    let active: Vec<_> = resolution
        .tree
        .children
        .iter()
        .filter(|c| c.is_active(&resolution.current_path))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Syllabus");
}

#[test]
fn test_depth_limit_bounds_tree() {
    let temp = setup_site();
    let mut diags = Diagnostics::new();
    let config = NavConfig::from_value(
        serde_json::json!({ "/2024/autumn-term/": { "levels": 1 } }),
        &mut diags,
    );
    let lister = FsDirectoryLister::new();
    let metadata = FileMetadataProvider::new();
    let resolver = Resolver::new(
        &config,
        NormalizedPath::new(temp.path()),
        &lister,
        &metadata,
    );

    let resolution = resolver
        .resolve(&NormalizedPath::new("/2024/autumn-term/index.html"))
        .unwrap();

    fn depth(node: &HierarchyNode) -> usize {
        node.children.iter().map(depth).max().map_or(0, |d| d + 1)
    }
    assert!(depth(&resolution.tree) <= 1);
    assert_eq!(titles(&resolution.tree), vec!["Home", "Syllabus"]);
}

#[test]
fn test_runs_are_isolated_and_idempotent() {
    let temp = setup_site();
    let config = load_config(temp.path());
    let lister = FsDirectoryLister::new();
    let page = NormalizedPath::new("/2024/autumn-term/index.html");

    // Fresh provider per run, the intended per-run cache lifetime.
    let first = {
        let metadata = FileMetadataProvider::new();
        Resolver::new(
            &config,
            NormalizedPath::new(temp.path()),
            &lister,
            &metadata,
        )
        .resolve(&page)
        .unwrap()
    };
    let second = {
        let metadata = FileMetadataProvider::new();
        Resolver::new(
            &config,
            NormalizedPath::new(temp.path()),
            &lister,
            &metadata,
        )
        .resolve(&page)
        .unwrap()
    };

    assert_eq!(first.tree, second.tree);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_malformed_front_matter_degrades_to_name_conversion() {
    let temp = setup_site();
    write(
        temp.path(),
        "2024/autumn-term/broken_page.qmd",
        "---\ntitle: [unclosed\n---\nBody.\n",
    );

    let config = load_config(temp.path());
    let lister = FsDirectoryLister::new();
    let metadata = FileMetadataProvider::new();
    let resolver = Resolver::new(
        &config,
        NormalizedPath::new(temp.path()),
        &lister,
        &metadata,
    );

    let resolution = resolver
        .resolve(&NormalizedPath::new("/2024/autumn-term/index.html"))
        .unwrap();
    assert!(
        resolution
            .tree
            .children
            .iter()
            .any(|c| c.title == "Broken Page")
    );
}

#[test]
fn test_scope_prefix_selection_on_disk() {
    let temp = setup_site();
    write(temp.path(), "2024/spring/plan.qmd", "# Plan\n");
    let mut diags = Diagnostics::new();
    let config = NavConfig::from_value(
        serde_json::json!({
            "/2024/": {},
            "/2024/autumn-term/": {},
        }),
        &mut diags,
    );
    let lister = FsDirectoryLister::new();
    let metadata = FileMetadataProvider::new();
    let resolver = Resolver::new(
        &config,
        NormalizedPath::new(temp.path()),
        &lister,
        &metadata,
    );

    let autumn = resolver
        .resolve(&NormalizedPath::new("/2024/autumn-term/index.html"))
        .unwrap();
    assert_eq!(autumn.scope_key, "/2024/autumn-term/");

    let spring = resolver
        .resolve(&NormalizedPath::new("/2024/spring/plan.html"))
        .unwrap();
    assert_eq!(spring.scope_key, "/2024/");
}

#[test]
fn test_unmatched_directory_mapping_reports_and_continues() {
    let temp = setup_site();
    let mut diags = Diagnostics::new();
    let config = NavConfig::from_value(
        serde_json::json!({
            "/2024/autumn-term/": {
                "special-mappings": [{ "path": "archive/", "title": "Archive" }],
            }
        }),
        &mut diags,
    );
    let lister = FsDirectoryLister::new();
    let metadata = FileMetadataProvider::new();
    let resolver = Resolver::new(
        &config,
        NormalizedPath::new(temp.path()),
        &lister,
        &metadata,
    );

    let resolution = resolver
        .resolve(&NormalizedPath::new("/2024/autumn-term/index.html"))
        .unwrap();
    // The archive/ directory mapping points at nothing on disk.
    assert!(
        resolution
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnmatchedSpecialMapping)
    );
    // Everything real still resolved.
    assert!(!resolution.tree.children.is_empty());
}
