//! Filesystem abstraction for navtree
//!
//! Provides normalized path handling, directory listing behind a trait
//! seam, and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod list;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use list::{DirEntryInfo, DirectoryLister, EntryKind, FsDirectoryLister, StaticDirectoryLister};
pub use path::NormalizedPath;
