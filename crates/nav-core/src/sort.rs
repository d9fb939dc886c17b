//! Deterministic sibling ordering
//!
//! Runs as a separate pass once the whole tree is built, depth-first,
//! so an ancestor's position is decided only after its own subtree is
//! final. Comparison: explicit orders ascending; an ordered node beats
//! an unordered one regardless of kind; among unordered nodes
//! directories come before files; the final tie-break is ordinal
//! comparison of raw names, not display titles.

use std::cmp::Ordering;

use crate::tree::HierarchyNode;

/// Sort every directory's children, depth-first.
pub fn sort_tree(node: &mut HierarchyNode) {
    for child in &mut node.children {
        sort_tree(child);
    }
    node.children.sort_by(compare_siblings);
}

/// The sibling comparator.
pub fn compare_siblings(a: &HierarchyNode, b: &HierarchyNode) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.raw_name.cmp(&b.raw_name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            // Directories before files, then raw-name ordinal.
            match (a.is_dir(), b.is_dir()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => a.raw_name.cmp(&b.raw_name),
            }
        }
    }
}
