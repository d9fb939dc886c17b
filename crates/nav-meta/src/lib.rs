//! Document front-matter metadata for navtree
//!
//! Extracts the three navigation-relevant fields (`title`, `nav-title`,
//! `nav-order`) from YAML front matter and exposes them behind the
//! `MetadataProvider` seam. Providers never fail: unreadable or
//! unparsable documents yield no metadata.

pub mod front_matter;
pub mod provider;

pub use front_matter::{DocMeta, OrderValue, parse_front_matter};
pub use provider::{FileMetadataProvider, MetadataProvider, StaticMetadataProvider};
