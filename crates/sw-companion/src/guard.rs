use std::ops::{Deref, DerefMut};

use crate::clock::Clock;
use crate::companion::Companion;
use crate::random::{RandomSource, ThreadRandom};

/// Owns a [`Companion`] and flushes its memory when dropped.
///
/// Hosts hold one of these for the life of the process so that memory is
/// written on every exit path that unwinds, including early returns.
pub struct FlushOnDrop<C: Clock, R: RandomSource = ThreadRandom> {
    companion: Companion<R>,
    clock: C,
}

impl<C: Clock, R: RandomSource> FlushOnDrop<C, R> {
    /// Wrap `companion`, stamping the final flush with `clock`.
    pub fn new(companion: Companion<R>, clock: C) -> Self {
        Self { companion, clock }
    }

    /// The clock used for the final flush.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock, R: RandomSource> Deref for FlushOnDrop<C, R> {
    type Target = Companion<R>;

    fn deref(&self) -> &Self::Target {
        &self.companion
    }
}

impl<C: Clock, R: RandomSource> DerefMut for FlushOnDrop<C, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.companion
    }
}

impl<C: Clock, R: RandomSource> Drop for FlushOnDrop<C, R> {
    fn drop(&mut self) {
        let now = self.clock.now();
        if self.companion.flush(now) {
            log::info!("Memory saved on exit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::CompanionConfig;
    use crate::random::ScriptedRandom;
    use sw_memory::{MemoryRecord, MemoryStore};

    #[test]
    fn drop_flushes_memory() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::new(dir.path().join("memory.json"));
        let clock = ManualClock::new(500.0);
        {
            let companion = Companion::new(
                CompanionConfig::default(),
                MemoryRecord::default(),
                ScriptedRandom::default(),
                500.0,
            )
            .with_store(store.clone());
            let mut guard = FlushOnDrop::new(companion, &clock);
            guard.memory_mut().record_click();
            clock.advance(12.5);
        }

        let saved = store.load();
        assert_eq!(saved.clicks, 1);
        assert_eq!(saved.last_saved, Some(512.5));
    }

    #[test]
    fn drop_without_store_is_quiet() {
        let companion = Companion::new(
            CompanionConfig::default(),
            MemoryRecord::default(),
            ScriptedRandom::default(),
            0.0,
        );
        let guard = FlushOnDrop::new(companion, ManualClock::new(1.0));
        assert!(guard.store().is_none());
        drop(guard);
    }
}
