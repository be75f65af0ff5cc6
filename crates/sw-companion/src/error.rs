use sw_memory::MemoryError;

/// Result type for companion operations.
pub type CompanionResult<T> = Result<T, CompanionError>;

/// Errors surfaced by explicit companion operations. The tick never fails.
#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    /// The companion has no memory store attached.
    #[error("no memory store attached")]
    NoStore,

    /// Persisting the memory record failed.
    #[error("memory: {0}")]
    Memory(#[from] MemoryError),
}
