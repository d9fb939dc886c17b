//! Scope configuration: raw shapes and normalization
//!
//! Host configuration is dynamically typed (a mapping entry may be a
//! bare path string or a full table; `levels` may arrive as anything).
//! All of that is normalized exactly once, here, into typed values.
//! Deeper pipeline stages never inspect raw config. A scope that fails
//! validation is disabled for the run with a `ConfigInvalid`
//! diagnostic; other scopes are unaffected.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use nav_fs::{ConfigStore, NormalizedPath};

use crate::diag::{DiagnosticKind, Diagnostics};
use crate::error::Result;

/// Raw per-scope shape as the host writes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawScopeConfig {
    #[serde(default)]
    levels: Option<Value>,
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    special_mappings: Vec<RawMappingEntry>,
}

/// A mapping entry is either a bare target path or a full table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawMappingEntry {
    Path(String),
    Full {
        path: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        order: Option<f64>,
        #[serde(default)]
        collapsed: Option<bool>,
    },
}

/// An exclusion pattern, classified at normalization time.
///
/// Literal patterns (no `*`) match by substring containment anywhere in
/// the resolved path. Glob patterns compile to an anchored regex
/// (metacharacters escaped, `*` as "any sequence") and must match the
/// full path.
#[derive(Debug, Clone)]
pub enum ExclusionPattern {
    Literal(String),
    Glob { source: String, regex: Regex },
}

impl ExclusionPattern {
    /// Classify and, for globs, compile a pattern.
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        if !pattern.contains('*') {
            return Ok(Self::Literal(pattern.to_string()));
        }
        let anchored = format!(
            "^{}$",
            pattern
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*")
        );
        Ok(Self::Glob {
            source: pattern.to_string(),
            regex: Regex::new(&anchored)?,
        })
    }

    /// The pattern as configured.
    pub fn source(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Glob { source, .. } => source,
        }
    }

    /// Whether a resolved path is excluded by this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Literal(s) => path.contains(s.as_str()),
            Self::Glob { regex, .. } => regex.is_match(path),
        }
    }
}

/// Whether a mapping targets a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    File,
    Directory,
}

/// An explicit, path-keyed override for title, order, or collapsed
/// state. A trailing separator on the configured path marks a
/// directory target.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialMapping {
    /// Target path relative to the scope, without surrounding slashes.
    pub path: String,
    pub kind: MappingKind,
    pub title: Option<String>,
    pub order: Option<f64>,
    pub collapsed: Option<bool>,
}

impl SpecialMapping {
    /// Full normalized target path: scope prefix + mapping path.
    pub fn target(&self, scope_key: &str) -> NormalizedPath {
        NormalizedPath::new(format!(
            "{}/{}",
            scope_key.trim_end_matches('/'),
            self.path
        ))
    }

    /// Last segment of the target path, used for derived titles.
    pub fn leaf_segment(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A validated, normalized scope configuration.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    /// The path section this scope applies to, as configured.
    pub key: String,
    /// Maximum tree depth; `None` is unbounded.
    pub levels: Option<usize>,
    pub exclusions: Vec<ExclusionPattern>,
    pub mappings: Vec<SpecialMapping>,
}

/// The full navigation configuration: scope key to scope config.
#[derive(Debug, Clone, Default)]
pub struct NavConfig {
    scopes: BTreeMap<String, ScopeConfig>,
}

impl NavConfig {
    /// Load and normalize configuration from a TOML/JSON/YAML file.
    pub fn load(path: &NormalizedPath, diags: &mut Diagnostics) -> Result<Self> {
        let value: Value = ConfigStore::new().load(path)?;
        Ok(Self::from_value(value, diags))
    }

    /// Normalize a dynamically-typed configuration value.
    ///
    /// Scopes that fail validation are dropped with a diagnostic; the
    /// rest of the configuration stays usable.
    pub fn from_value(value: Value, diags: &mut Diagnostics) -> Self {
        let Value::Object(map) = value else {
            diags.push(
                DiagnosticKind::ConfigInvalid,
                "navigation config must be a mapping of scope keys",
            );
            return Self::default();
        };

        let mut scopes = BTreeMap::new();
        for (key, raw) in map {
            match normalize_scope(&key, raw, diags) {
                Some(scope) => {
                    scopes.insert(key, scope);
                }
                None => {
                    // Diagnostic already emitted; scope disabled.
                }
            }
        }
        Self { scopes }
    }

    pub fn scopes(&self) -> &BTreeMap<String, ScopeConfig> {
        &self.scopes
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

/// Validate one scope. Any malformed field disables the whole scope.
fn normalize_scope(key: &str, raw: Value, diags: &mut Diagnostics) -> Option<ScopeConfig> {
    let raw: RawScopeConfig = match serde_json::from_value(raw) {
        Ok(raw) => raw,
        Err(e) => {
            diags.push(
                DiagnosticKind::ConfigInvalid,
                format!("scope {key}: {e}; scope disabled"),
            );
            return None;
        }
    };

    let levels = match raw.levels {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) if v >= 1 => Some(v as usize),
            _ => {
                diags.push(
                    DiagnosticKind::ConfigInvalid,
                    format!("scope {key}: levels must be a positive integer, got {n}; scope disabled"),
                );
                return None;
            }
        },
        Some(other) => {
            diags.push(
                DiagnosticKind::ConfigInvalid,
                format!("scope {key}: levels must be a positive integer, got {other}; scope disabled"),
            );
            return None;
        }
    };

    let mut exclusions = Vec::with_capacity(raw.exclude.len());
    for pattern in &raw.exclude {
        match ExclusionPattern::new(pattern) {
            Ok(p) => exclusions.push(p),
            Err(e) => {
                diags.push(
                    DiagnosticKind::ConfigInvalid,
                    format!("scope {key}: bad exclude pattern {pattern:?}: {e}; scope disabled"),
                );
                return None;
            }
        }
    }

    let mut mappings = Vec::with_capacity(raw.special_mappings.len());
    for entry in raw.special_mappings {
        let (path, title, order, collapsed) = match entry {
            RawMappingEntry::Path(path) => (path, None, None, None),
            RawMappingEntry::Full {
                path,
                title,
                order,
                collapsed,
            } => (path, title, order, collapsed),
        };

        let kind = if path.ends_with('/') {
            MappingKind::Directory
        } else {
            MappingKind::File
        };
        let trimmed = path.trim_matches('/').to_string();
        if trimmed.is_empty() {
            diags.push(
                DiagnosticKind::ConfigInvalid,
                format!("scope {key}: special mapping with empty path; scope disabled"),
            );
            return None;
        }
        if let Some(order) = order {
            if !order.is_finite() {
                diags.push(
                    DiagnosticKind::ConfigInvalid,
                    format!("scope {key}: special mapping {trimmed:?} has non-finite order; scope disabled"),
                );
                return None;
            }
        }

        mappings.push(SpecialMapping {
            path: trimmed,
            kind,
            title,
            order,
            collapsed,
        });
    }

    Some(ScopeConfig {
        key: key.to_string(),
        levels,
        exclusions,
        mappings,
    })
}
