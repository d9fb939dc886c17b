//! Hierarchy construction
//!
//! Merges the filtered, attribute-resolved flat item list into a tree.
//! Built top-down from path components: intermediate directory nodes
//! are created exactly once, receive their attributes at creation time,
//! and exclusively own their children. The name lookup index is an
//! auxiliary structure discarded when building finishes.

use std::collections::HashMap;

use nav_fs::NormalizedPath;

use crate::attributes::{find_mapping, resolve_dir_attrs, resolve_file_attrs};
use crate::config::{MappingKind, ScopeConfig, SpecialMapping};
use crate::scan::ContentItem;

/// Kind of a hierarchy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// A tree element after full resolution, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub kind: NodeKind,
    pub raw_name: String,
    pub title: String,
    pub order: Option<f64>,
    /// Directories only; files carry `None`.
    pub collapsed: Option<bool>,
    /// Resolved output path (files) or scope-relative directory path.
    pub path: NormalizedPath,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Whether this node represents the page currently being rendered.
    pub fn is_active(&self, current: &NormalizedPath) -> bool {
        self.path == *current
    }

    /// Total number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// Result of tree construction.
pub struct BuiltTree {
    pub root: HierarchyNode,
    /// Per-mapping flag: did any item or directory match it?
    pub matched_mappings: Vec<bool>,
}

/// Building frame: a directory node plus its name lookup index.
struct Slot {
    node: HierarchyNode,
    children: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl Slot {
    fn new(node: HierarchyNode) -> Self {
        Self {
            node,
            children: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn into_node(self) -> HierarchyNode {
        let mut node = self.node;
        node.children = self.children.into_iter().map(Slot::into_node).collect();
        node
    }
}

/// Merges flat content items into a `HierarchyNode` tree.
pub struct TreeBuilder<'a> {
    scope: &'a ScopeConfig,
    mappings: &'a [SpecialMapping],
}

impl<'a> TreeBuilder<'a> {
    /// `mappings` are the scope's surviving (non-excluded) mappings.
    pub fn new(scope: &'a ScopeConfig, mappings: &'a [SpecialMapping]) -> Self {
        Self { scope, mappings }
    }

    /// Build the full tree from the filtered item list.
    pub fn build(&self, items: &[ContentItem]) -> BuiltTree {
        let scope_path = NormalizedPath::new(&self.scope.key);
        let mut root = Slot::new(HierarchyNode {
            kind: NodeKind::Directory,
            raw_name: String::new(),
            title: String::new(),
            order: None,
            collapsed: Some(false),
            path: scope_path,
            children: Vec::new(),
        });
        let mut matched = vec![false; self.mappings.len()];

        for item in items {
            self.insert(&mut root, item, &mut matched);
        }

        BuiltTree {
            root: root.into_node(),
            matched_mappings: matched,
        }
    }

    fn insert(&self, root: &mut Slot, item: &ContentItem, matched: &mut [bool]) {
        let Some((leaf_name, dir_segments)) = item.hierarchy_path.split_last() else {
            return;
        };

        let mut current = root;
        let mut dir_path = String::from(self.scope.key.trim_end_matches('/'));
        for segment in dir_segments {
            dir_path.push('/');
            dir_path.push_str(segment);
            let pos = match current.index.get(segment) {
                Some(&pos) => pos,
                None => {
                    let node = self.new_directory(segment, &dir_path, matched);
                    current.children.push(Slot::new(node));
                    let pos = current.children.len() - 1;
                    current.index.insert(segment.clone(), pos);
                    pos
                }
            };
            current = &mut current.children[pos];
        }

        let mapping = find_mapping(
            self.mappings,
            MappingKind::File,
            &self.scope.key,
            &item.nav_path,
        );
        if let Some((idx, _)) = mapping {
            matched[idx] = true;
        }
        let attrs = resolve_file_attrs(item, mapping.map(|(_, m)| m));

        current.children.push(Slot::new(HierarchyNode {
            kind: NodeKind::File,
            raw_name: item.raw_name.clone(),
            title: attrs.title,
            order: attrs.order,
            collapsed: None,
            path: item.output_path.clone(),
            children: Vec::new(),
        }));
    }

    /// A directory node gets its attributes the moment it is created.
    fn new_directory(&self, raw_name: &str, dir_path: &str, matched: &mut [bool]) -> HierarchyNode {
        let path = NormalizedPath::new(dir_path);
        let mapping = find_mapping(self.mappings, MappingKind::Directory, &self.scope.key, &path);
        if let Some((idx, _)) = mapping {
            matched[idx] = true;
        }
        let attrs = resolve_dir_attrs(raw_name, mapping.map(|(_, m)| m));

        HierarchyNode {
            kind: NodeKind::Directory,
            raw_name: raw_name.to_string(),
            title: attrs.title,
            order: attrs.order,
            collapsed: attrs.collapsed,
            path,
            children: Vec::new(),
        }
    }
}
