//! Recursive content discovery
//!
//! Walks a scope's content directory through the `DirectoryLister`
//! seam, up to the configured depth, producing a flat list of
//! `ContentItem`s. A directory that cannot be listed loses only its own
//! subtree; sibling subtrees are unaffected.

use nav_fs::{DirectoryLister, EntryKind, NormalizedPath};
use nav_meta::{DocMeta, MetadataProvider};

use crate::config::ScopeConfig;
use crate::diag::{DiagnosticKind, Diagnostics};

/// File extensions recognized as content documents.
pub const CONTENT_EXTENSIONS: &[&str] = &["qmd", "md", "markdown", "html"];

/// Extension of the rendered form content paths are normalized to.
pub const RENDERED_EXTENSION: &str = "html";

/// A leaf document discovered during scanning. Read-only after the
/// scanner produces it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// Absolute on-disk path of the source document.
    pub source_path: NormalizedPath,
    /// Scope prefix + source-relative path, extension as authored.
    /// Special-mapping targets are matched against this.
    pub nav_path: NormalizedPath,
    /// `nav_path` with the extension normalized to the rendered form.
    /// Exclusion patterns are matched against this.
    pub output_path: NormalizedPath,
    /// Path segments from the scope root to the item; directory names
    /// followed by the file stem.
    pub hierarchy_path: Vec<String>,
    /// File stem, input to title resolution.
    pub raw_name: String,
    /// Embedded front-matter metadata; empty when absent.
    pub meta: DocMeta,
}

impl ContentItem {
    /// Depth below the scope root; an immediate child is level 1.
    pub fn level(&self) -> usize {
        self.hierarchy_path.len()
    }
}

/// Recursive, depth-limited content discovery over a scope root.
pub struct Scanner<'a> {
    lister: &'a dyn DirectoryLister,
    metadata: &'a dyn MetadataProvider,
}

impl<'a> Scanner<'a> {
    pub fn new(lister: &'a dyn DirectoryLister, metadata: &'a dyn MetadataProvider) -> Self {
        Self { lister, metadata }
    }

    /// Enumerate all content items under the scope root.
    ///
    /// `scope_dir` is the on-disk directory the scope key corresponds
    /// to. Items come back in listing order; ordering is the sorter's
    /// concern, not the scanner's.
    pub fn scan(
        &self,
        scope: &ScopeConfig,
        scope_dir: &NormalizedPath,
        diags: &mut Diagnostics,
    ) -> Vec<ContentItem> {
        let mut items = Vec::new();
        let mut segments = Vec::new();
        self.scan_dir(scope, scope_dir, &mut segments, 1, &mut items, diags);
        items
    }

    fn scan_dir(
        &self,
        scope: &ScopeConfig,
        dir: &NormalizedPath,
        segments: &mut Vec<String>,
        level: usize,
        items: &mut Vec<ContentItem>,
        diags: &mut Diagnostics,
    ) {
        if let Some(levels) = scope.levels {
            if level > levels {
                return;
            }
        }

        let entries = match self.lister.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                diags.push(
                    DiagnosticKind::DirectoryUnlistable,
                    format!("skipping subtree {dir}: {e}"),
                );
                return;
            }
        };

        for entry in entries {
            match entry.kind {
                EntryKind::File => {
                    let Some(stem) = content_file_stem(&entry.name) else {
                        continue;
                    };
                    let source_path = dir.join(&entry.name);
                    let meta = match self.metadata.resolve(&source_path) {
                        Some(meta) => meta,
                        None => {
                            diags.push(
                                DiagnosticKind::MetadataUnreadable,
                                format!("metadata unreadable for {source_path}"),
                            );
                            DocMeta::default()
                        }
                    };

                    let mut rel = segments.join("/");
                    if !rel.is_empty() {
                        rel.push('/');
                    }
                    rel.push_str(&entry.name);
                    let nav_path =
                        NormalizedPath::new(format!("{}/{rel}", scope.key.trim_end_matches('/')));

                    let mut hierarchy_path = segments.clone();
                    hierarchy_path.push(stem.to_string());

                    items.push(ContentItem {
                        output_path: nav_path.with_extension(RENDERED_EXTENSION),
                        nav_path,
                        source_path,
                        raw_name: stem.to_string(),
                        hierarchy_path,
                        meta,
                    });
                }
                EntryKind::Directory => {
                    let subdir = dir.join(&entry.name);
                    segments.push(entry.name);
                    self.scan_dir(scope, &subdir, segments, level + 1, items, diags);
                    segments.pop();
                }
                EntryKind::Other => {
                    // Sockets, fifos, broken links: not content.
                }
            }
        }
    }
}

/// The file stem when `name` has a recognized content extension,
/// `None` otherwise.
fn content_file_stem(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if idx == 0 {
        return None;
    }
    let ext = &name[idx + 1..];
    CONTENT_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
        .then(|| &name[..idx])
}
