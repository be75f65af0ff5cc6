//! Persistent behavioral memory for the Stickwander companion.
//!
//! The memory record holds click counters, window and site observation
//! counts, derived favorites, and a small personality vector. It is loaded
//! once at startup and flushed periodically and at exit. Loading is
//! tolerant: missing keys are back-filled, unknown keys are preserved, and
//! an unreadable file falls back to the default record.

/// Error types for the memory crate.
pub mod error;
/// Insertion-ordered observation counters.
pub mod observations;
/// The memory record and personality vector.
pub mod record;
/// Browser title recognition for site tracking.
pub mod sites;
/// Loading and saving the record on disk.
pub mod store;

/// Re-exports of [`error::MemoryError`] and [`error::MemoryResult`].
pub use error::{MemoryError, MemoryResult};
/// Re-export of [`observations::ObservationCounts`].
pub use observations::ObservationCounts;
/// Re-exports of [`record::MemoryRecord`] and [`record::Personality`].
pub use record::{MemoryRecord, Personality};
/// Re-export of [`store::MemoryStore`].
pub use store::{DEFAULT_FILE_NAME, MemoryStore};
