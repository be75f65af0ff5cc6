//! Error types for memory persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for memory operations.
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Errors that can occur while reading or writing the memory file.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The memory file could not be read or written.
    #[error("memory file {}: {source}", path.display())]
    Io {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The memory file did not contain a valid record.
    #[error("malformed memory record: {0}")]
    Json(#[from] serde_json::Error),
}
