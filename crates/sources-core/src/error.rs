//! Error types for sources-core

use std::path::PathBuf;

/// Result type for sources-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading sources or writing side outputs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sources file could not be read as text
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A side-output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
