//! Normalized path handling for cross-platform comparisons
//!
//! Scope keys, exclusion patterns, and special-mapping targets are all
//! compared as strings, so every path entering the pipeline is normalized
//! to forward slashes once and compared in that form.

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Conversion to the platform-native form happens only at I/O
/// boundaries; everything inside the resolution pipeline compares the
/// normalized string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Replace (or add) the extension, returning a new path.
    pub fn with_extension(&self, extension: &str) -> Self {
        let stem_end = match (self.file_name(), self.extension()) {
            (Some(_), Some(ext)) => self.inner.len() - ext.len() - 1,
            _ => self.inner.len(),
        };
        Self {
            inner: format!("{}.{}", &self.inner[..stem_end], extension),
        }
    }

    /// Whether this path starts with `prefix` at a segment boundary.
    ///
    /// `/2024/notes` starts with `/2024/` and with `/2024`, but not with
    /// `/20` — a prefix only counts if it ends at a `/` or consumes whole
    /// segments.
    pub fn starts_with(&self, prefix: &str) -> bool {
        let prefix = prefix.replace('\\', "/");
        if !self.inner.starts_with(&prefix) {
            return false;
        }
        if prefix.ends_with('/') || self.inner.len() == prefix.len() {
            return true;
        }
        self.inner[prefix.len()..].starts_with('/')
    }

    /// Strip a leading prefix, returning the remainder without its
    /// leading slash. Returns `None` if `starts_with(prefix)` is false.
    pub fn strip_prefix(&self, prefix: &str) -> Option<&str> {
        if !self.starts_with(prefix) {
            return None;
        }
        let prefix = prefix.trim_end_matches('/');
        Some(self.inner[prefix.len()..].trim_start_matches('/'))
    }

    /// Iterate the non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
