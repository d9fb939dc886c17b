//! Exclusion filtering
//!
//! Applies the scope's exclusion patterns to the discovered items and
//! cross-checks special-mapping targets against the same patterns.
//! Exclusion always wins over mapping: a mapping whose target is
//! excluded is reported and disabled for the rest of the run.

use crate::config::{ExclusionPattern, ScopeConfig, SpecialMapping};
use crate::diag::{DiagnosticKind, Diagnostics};
use crate::scan::{ContentItem, RENDERED_EXTENSION};

/// Compiled view of a scope's exclusion patterns.
pub struct ExclusionFilter<'a> {
    patterns: &'a [ExclusionPattern],
}

impl<'a> ExclusionFilter<'a> {
    pub fn new(patterns: &'a [ExclusionPattern]) -> Self {
        Self { patterns }
    }

    /// Whether any pattern matches the given resolved path.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    /// Drop every item whose resolved output path is excluded.
    pub fn filter(&self, items: Vec<ContentItem>) -> Vec<ContentItem> {
        items
            .into_iter()
            .filter(|item| !self.is_excluded(item.output_path.as_str()))
            .collect()
    }

    /// Cross-check mapping targets against the exclusion patterns.
    ///
    /// Returns the mappings that survive. A mapping whose target is
    /// excluded emits a `MappingExcludedConflict` diagnostic and
    /// becomes a no-op. Targets are checked both as authored and in
    /// their rendered form, since patterns are written against
    /// resolved output paths.
    pub fn active_mappings(
        &self,
        scope: &ScopeConfig,
        diags: &mut Diagnostics,
    ) -> Vec<SpecialMapping> {
        scope
            .mappings
            .iter()
            .filter(|mapping| {
                let target = mapping.target(&scope.key);
                let rendered = target.with_extension(RENDERED_EXTENSION);
                let excluded =
                    self.is_excluded(target.as_str()) || self.is_excluded(rendered.as_str());
                if excluded {
                    diags.push(
                        DiagnosticKind::MappingExcludedConflict,
                        format!(
                            "special mapping for {target} conflicts with an exclusion pattern; exclusion wins"
                        ),
                    );
                }
                !excluded
            })
            .cloned()
            .collect()
    }
}
