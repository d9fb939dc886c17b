//! Metadata providers
//!
//! A `MetadataProvider` turns an absolute document path into `DocMeta`.
//! Providers are infallible by contract: anything that cannot be read
//! or parsed resolves to `None` and the pipeline carries on without
//! metadata for that item.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

use nav_fs::NormalizedPath;

use crate::front_matter::{DocMeta, parse_front_matter};

/// Source of per-document metadata.
pub trait MetadataProvider {
    /// Resolve metadata for the document at `path`.
    ///
    /// `None` means the document could not be read at all; a readable
    /// document with no front matter resolves to empty metadata.
    /// Neither case is an error.
    fn resolve(&self, path: &NormalizedPath) -> Option<DocMeta>;
}

/// Filesystem-backed provider with a per-run read-through cache.
///
/// The cache lives only as long as the provider, and a provider is
/// constructed per resolution run. Nothing leaks across runs.
#[derive(Debug, Default)]
pub struct FileMetadataProvider {
    cache: RefCell<HashMap<String, Option<DocMeta>>>,
}

impl FileMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataProvider for FileMetadataProvider {
    fn resolve(&self, path: &NormalizedPath) -> Option<DocMeta> {
        if let Some(cached) = self.cache.borrow().get(path.as_str()) {
            return cached.clone();
        }

        let meta = match fs::read_to_string(path.to_native()) {
            Ok(source) => Some(parse_front_matter(&source)),
            Err(e) => {
                tracing::warn!("cannot read metadata from {path}: {e}");
                None
            }
        };

        self.cache
            .borrow_mut()
            .insert(path.as_str().to_string(), meta.clone());
        meta
    }
}

/// Fixed path-to-metadata table for tests.
#[derive(Debug, Default)]
pub struct StaticMetadataProvider {
    entries: HashMap<String, DocMeta>,
}

impl StaticMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, meta: DocMeta) {
        self.entries.insert(path.into(), meta);
    }
}

impl MetadataProvider for StaticMetadataProvider {
    fn resolve(&self, path: &NormalizedPath) -> Option<DocMeta> {
        self.entries.get(path.as_str()).cloned()
    }
}
