//! Per-run resolution pipeline
//!
//! Wires the stages together for one target page: match scope, scan,
//! filter, build, sort, report. Every run constructs its own state and
//! discards it; nothing is shared between runs.

use nav_fs::{DirectoryLister, NormalizedPath};
use nav_meta::MetadataProvider;

use crate::config::NavConfig;
use crate::diag::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::filter::ExclusionFilter;
use crate::matcher::match_scope;
use crate::scan::Scanner;
use crate::sort::sort_tree;
use crate::tree::{HierarchyNode, TreeBuilder};

/// The finished product of one resolution run, handed to the renderer.
#[derive(Debug)]
pub struct Resolution {
    /// Key of the scope that matched the current page.
    pub scope_key: String,
    /// Fully resolved, fully sorted tree. Contains no excluded items;
    /// depth is bounded by the scope's `levels`.
    pub tree: HierarchyNode,
    /// The page this run was resolved for, for active-item marking.
    pub current_path: NormalizedPath,
    /// Everything that degraded during the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// One-shot navigation resolver.
///
/// Borrowed collaborators keep the resolver cheap to construct per
/// run; constructing one per page is the intended usage.
pub struct Resolver<'a> {
    config: &'a NavConfig,
    source_root: NormalizedPath,
    lister: &'a dyn DirectoryLister,
    metadata: &'a dyn MetadataProvider,
}

impl<'a> Resolver<'a> {
    /// `source_root` is the on-disk directory the scope keys are
    /// relative to.
    pub fn new(
        config: &'a NavConfig,
        source_root: NormalizedPath,
        lister: &'a dyn DirectoryLister,
        metadata: &'a dyn MetadataProvider,
    ) -> Self {
        Self {
            config,
            source_root,
            lister,
            metadata,
        }
    }

    /// Resolve the navigation tree for the page at `current_path`.
    ///
    /// `None` means no configured scope applies; the page renders
    /// without generated navigation and that is not an error.
    pub fn resolve(&self, current_path: &NormalizedPath) -> Option<Resolution> {
        let scope = match_scope(self.config, current_path)?;
        let mut diags = Diagnostics::new();

        let scope_dir = match scope.key.trim_matches('/') {
            "" => self.source_root.clone(),
            rel => self.source_root.join(rel),
        };
        let items = Scanner::new(self.lister, self.metadata).scan(scope, &scope_dir, &mut diags);

        let filter = ExclusionFilter::new(&scope.exclusions);
        let mappings = filter.active_mappings(scope, &mut diags);
        let items = filter.filter(items);

        let built = TreeBuilder::new(scope, &mappings).build(&items);
        let mut tree = built.root;
        sort_tree(&mut tree);

        for (mapping, matched) in mappings.iter().zip(&built.matched_mappings) {
            if !matched {
                diags.push(
                    DiagnosticKind::UnmatchedSpecialMapping,
                    format!(
                        "special mapping target {} matched nothing",
                        mapping.target(&scope.key)
                    ),
                );
            }
        }

        Some(Resolution {
            scope_key: scope.key.clone(),
            tree,
            current_path: current_path.clone(),
            diagnostics: diags.into_vec(),
        })
    }
}
