//! Run diagnostics
//!
//! Nothing inside a resolution run aborts the page render. Every
//! degradation is recorded here and mirrored to `tracing::warn!`, so a
//! host (or a test) can inspect the full set a run emitted.

/// Classification of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Malformed scope configuration; the scope is disabled for the run.
    ConfigInvalid,
    /// A document's metadata could not be read; fields treated as absent.
    MetadataUnreadable,
    /// A directory could not be listed; its subtree is skipped.
    DirectoryUnlistable,
    /// A special mapping's target matched nothing that was discovered.
    UnmatchedSpecialMapping,
    /// A special mapping's target is also excluded; exclusion wins.
    MappingExcludedConflict,
}

/// A single collected diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Ordered collection of the diagnostics one run emitted.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(?kind, "{message}");
        self.entries.push(Diagnostic { kind, message });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
