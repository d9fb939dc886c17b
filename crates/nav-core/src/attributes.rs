//! Attribute resolution: title, order, collapsed state
//!
//! Each attribute resolves through a strict, short-circuiting priority
//! chain. Title: embedded nav-title, exact-path special mapping,
//! embedded title, smart name conversion, cleaned raw name. Order:
//! mapping order, embedded nav-order, absent. Collapsed (directories):
//! mapping collapsed, expanded.

use std::sync::LazyLock;

use regex::Regex;

use nav_fs::NormalizedPath;

use crate::config::{MappingKind, SpecialMapping};
use crate::scan::ContentItem;

/// `w01-practice` style shorthand, files only.
static WEEK_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^w(\d+)(?:-(.+))?$").unwrap());

/// Resolved display attributes for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttrs {
    pub title: String,
    pub order: Option<f64>,
    pub collapsed: Option<bool>,
}

/// Find the special mapping whose normalized target exactly equals
/// `target`, together with its index (for unmatched-mapping reporting).
pub fn find_mapping<'m>(
    mappings: &'m [SpecialMapping],
    kind: MappingKind,
    scope_key: &str,
    target: &NormalizedPath,
) -> Option<(usize, &'m SpecialMapping)> {
    mappings
        .iter()
        .enumerate()
        .find(|(_, m)| m.kind == kind && &m.target(scope_key) == target)
}

/// Resolve attributes for a content file.
pub fn resolve_file_attrs(item: &ContentItem, mapping: Option<&SpecialMapping>) -> ResolvedAttrs {
    ResolvedAttrs {
        title: resolve_file_title(item, mapping),
        order: mapping
            .and_then(|m| m.order)
            .or_else(|| item.meta.nav_order_number()),
        collapsed: None,
    }
}

/// Resolve attributes for a directory encountered during tree building.
pub fn resolve_dir_attrs(raw_name: &str, mapping: Option<&SpecialMapping>) -> ResolvedAttrs {
    let title = mapping
        .and_then(|m| m.title.clone())
        .or_else(|| mapping.map(|m| derived_mapping_title(m)))
        .unwrap_or_else(|| convert_name(raw_name, false));
    ResolvedAttrs {
        title,
        order: mapping.and_then(|m| m.order),
        collapsed: Some(mapping.and_then(|m| m.collapsed).unwrap_or(false)),
    }
}

fn resolve_file_title(item: &ContentItem, mapping: Option<&SpecialMapping>) -> String {
    if let Some(nav_title) = non_empty(item.meta.nav_title.as_deref()) {
        return nav_title.to_string();
    }
    if let Some(mapping) = mapping {
        return mapping
            .title
            .clone()
            .unwrap_or_else(|| derived_mapping_title(mapping));
    }
    if let Some(title) = non_empty(item.meta.title.as_deref()) {
        return title.to_string();
    }
    convert_name(&item.raw_name, true)
}

/// Title derived from a mapping's own path segment when it carries no
/// explicit title.
fn derived_mapping_title(mapping: &SpecialMapping) -> String {
    let segment = mapping.leaf_segment();
    let stem = match mapping.kind {
        MappingKind::File => segment.rsplit_once('.').map_or(segment, |(s, _)| s),
        MappingKind::Directory => segment,
    };
    convert_name(stem, mapping.kind == MappingKind::File)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Smart name conversion with a cleaned-name fallback.
///
/// Applied identically to files and directories except for the
/// file-only `w<digits>` shorthand.
pub fn convert_name(raw: &str, is_file: bool) -> String {
    if is_file {
        if let Some(title) = week_shorthand(raw) {
            return title;
        }
    }
    let converted = smart_conversion(raw);
    if converted.is_empty() {
        return clean_name(raw);
    }
    converted
}

/// `w01-practice` -> `W01 Practice`.
fn week_shorthand(raw: &str) -> Option<String> {
    let caps = WEEK_SHORTHAND.captures(raw)?;
    let digits = &caps[1];
    let mut title = format!("W{digits}");
    if let Some(rest) = caps.get(2) {
        let rest = title_case(&rest.as_str().replace(['_', '-'], " "));
        if !rest.is_empty() {
            title.push(' ');
            title.push_str(&rest);
        }
    }
    Some(title)
}

/// The generic conversion: separators become spaces, camelCase and
/// letter/digit boundaries split, repeated spaces collapse, and every
/// word is capitalized.
fn smart_conversion(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    let mut spaced = String::with_capacity(replaced.len() + 4);
    let mut prev: Option<char> = None;
    for c in replaced.chars() {
        if let Some(p) = prev {
            let boundary = (p.is_lowercase() && c.is_uppercase())
                || (p.is_ascii_digit() && c.is_uppercase())
                || (p.is_alphabetic() && c.is_ascii_digit());
            if boundary {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&collapsed)
}

/// Cleaned raw name: strip extension, separators to spaces, capitalize
/// the first letter.
pub fn clean_name(raw: &str) -> String {
    let stem = match raw.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => raw,
    };
    let spaced = stem.replace(['_', '-'], " ");
    capitalize_first(&spaced)
}

/// Capitalize the first letter of the string and of every word.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
