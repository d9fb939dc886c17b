//! Scope selection for the current page
//!
//! Exact key match wins outright. Otherwise the longest scope key that
//! is a genuine path prefix of the page wins (most specific scope).
//! Substring-anywhere matching is deliberately not supported: a scope
//! `/201` must never capture `/2015/notes.html`.

use nav_fs::NormalizedPath;

use crate::config::{NavConfig, ScopeConfig};

/// Select the scope that applies to `path`, if any.
///
/// `None` means navigation is inactive for this page; it is not an
/// error.
pub fn match_scope<'a>(config: &'a NavConfig, path: &NormalizedPath) -> Option<&'a ScopeConfig> {
    let scopes = config.scopes();

    if let Some(scope) = scopes.get(path.as_str()) {
        return Some(scope);
    }
    // Keys may be written with or without the trailing separator.
    if let Some(scope) = scopes.get(&format!("{}/", path.as_str())) {
        return Some(scope);
    }

    scopes
        .values()
        .filter(|scope| path.starts_with(&scope.key))
        .max_by_key(|scope| scope.key.trim_end_matches('/').len())
}
