//! Error types for nav-core
//!
//! Hard errors exist only at the loading boundary. Inside a resolution
//! run every failure degrades to a diagnostic (see [`crate::diag`]).

/// Result type for nav-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nav-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] nav_fs::Error),

    #[error("Config value error: {0}")]
    ConfigValue(#[from] serde_json::Error),
}
