//! Directory listing behind a trait seam
//!
//! The scanner never touches `std::fs` directly; it asks a
//! `DirectoryLister` for entries so tests can substitute an in-memory
//! tree and listing failures stay contained to one subtree.

use std::collections::BTreeMap;
use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, fifos, broken symlinks — skipped by the scanner.
    Other,
}

/// A single entry returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

/// Source of directory listings for the scanner.
pub trait DirectoryLister {
    /// List the entries of `path`.
    ///
    /// A failure applies to this directory only; the caller decides how
    /// far the degradation spreads.
    fn list(&self, path: &NormalizedPath) -> Result<Vec<DirEntryInfo>>;
}

/// Filesystem-backed lister.
#[derive(Debug, Default)]
pub struct FsDirectoryLister;

impl FsDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, path: &NormalizedPath) -> Result<Vec<DirEntryInfo>> {
        let native = path.to_native();
        if !native.is_dir() {
            return Err(Error::NotADirectory { path: native });
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                tracing::debug!("non-regular entry {:?} will be skipped", entry.path());
                EntryKind::Other
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        // read_dir order is platform-dependent; sort for determinism.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// In-memory lister for tests: maps a normalized directory path to its
/// entries.
#[derive(Debug, Default)]
pub struct StaticDirectoryLister {
    dirs: BTreeMap<String, Vec<DirEntryInfo>>,
}

impl StaticDirectoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and its entries.
    pub fn insert(&mut self, path: impl Into<String>, entries: Vec<DirEntryInfo>) {
        self.dirs.insert(path.into(), entries);
    }
}

impl DirectoryLister for StaticDirectoryLister {
    fn list(&self, path: &NormalizedPath) -> Result<Vec<DirEntryInfo>> {
        self.dirs
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| Error::NotADirectory {
                path: path.to_native(),
            })
    }
}
