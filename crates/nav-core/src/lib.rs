//! Configuration-driven navigation tree resolution
//!
//! Given a scope configuration, a content tree, and per-document front
//! matter, resolves an ordered hierarchy ready for rendering: which
//! items appear, what each is titled, how siblings are ordered, and
//! whether sections start collapsed.
//!
//! The pipeline runs once per target page: the matcher selects a scope,
//! the scanner discovers content items, the exclusion filter drops
//! unwanted ones, the attribute resolver assigns title/order/collapsed,
//! the tree builder assembles the hierarchy, and the sorter fixes every
//! sibling order. No state survives a run.

pub mod attributes;
pub mod config;
pub mod diag;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod resolve;
pub mod scan;
pub mod sort;
pub mod tree;

pub use config::{ExclusionPattern, MappingKind, NavConfig, ScopeConfig, SpecialMapping};
pub use diag::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{Error, Result};
pub use filter::ExclusionFilter;
pub use matcher::match_scope;
pub use resolve::{Resolution, Resolver};
pub use scan::{ContentItem, Scanner};
pub use sort::sort_tree;
pub use tree::{HierarchyNode, NodeKind, TreeBuilder};
