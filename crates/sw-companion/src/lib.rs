//! Tick-based animation, physics, and decision loop for the Stickwander
//! desktop companion.
//!
//! A [`Companion`] owns the character state, its [`sw_memory::MemoryRecord`],
//! and a [`RandomSource`]. The host calls [`Companion::tick`] every 30 ms
//! with the cursor position and the current time, passing in the platform
//! services (window lookup, click injection). Poses are derived on demand
//! at render time through [`Companion::render_pose`].

/// The character's physical and behavioral state.
pub mod character;
/// Wall-clock abstraction.
pub mod clock;
/// Top-level companion loop.
pub mod companion;
/// Tunable constants for movement, perception, and timing.
pub mod config;
/// Error types for the companion crate.
pub mod error;
/// Points, rectangles, and rotation.
pub mod geometry;
/// Flush-on-exit guard.
pub mod guard;
/// Platform collision against the active surface.
pub mod physics;
/// External services the loop calls into.
pub mod platform;
/// Procedural limb posing.
pub mod pose;
/// Injectable randomness.
pub mod random;

/// Re-exports of [`character::Action`], [`character::CharacterState`], and [`character::Mood`].
pub use character::{Action, CharacterState, Mood};
/// Re-exports of [`clock::Clock`], [`clock::ManualClock`], and [`clock::SystemClock`].
pub use clock::{Clock, ManualClock, SystemClock};
/// Re-exports of [`companion::Companion`] and [`companion::TickOutcome`].
pub use companion::{Companion, TickOutcome};
/// Re-export of [`config::CompanionConfig`].
pub use config::CompanionConfig;
/// Re-exports of [`error::CompanionError`] and [`error::CompanionResult`].
pub use error::{CompanionError, CompanionResult};
/// Re-exports of [`geometry::Point`], [`geometry::Rect`], and [`geometry::rotate_point`].
pub use geometry::{Point, Rect, rotate_point};
/// Re-export of [`guard::FlushOnDrop`].
pub use guard::FlushOnDrop;
/// Re-export of [`pose::Pose`].
pub use pose::Pose;
/// Re-exports of the random source trait and implementations.
pub use random::{RandomSource, SeededRandom, ThreadRandom};
/// Re-export of [`random::ScriptedRandom`], available to tests.
#[cfg(any(test, feature = "test-support"))]
pub use random::ScriptedRandom;
