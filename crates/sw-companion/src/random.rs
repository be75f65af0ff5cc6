#[cfg(any(test, feature = "test-support"))]
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random draws behind every behavioral decision.
///
/// The loop only ever asks for a uniform value in `[0, 1)` or an index into
/// a small slice, so a scripted source can drive it through an exact
/// sequence of branches.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn chance(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Bernoulli trial that succeeds with probability `p`.
    fn roll(&mut self, p: f64) -> bool {
        self.chance() < p
    }
}

/// Pick an element of `options`, or `None` if it is empty.
pub fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, options: &'a [T]) -> Option<&'a T> {
    if options.is_empty() {
        None
    } else {
        options.get(rng.pick_index(options.len()))
    }
}

/// Entropy-seeded randomness for normal runs.
#[derive(Debug)]
pub struct ThreadRandom(StdRng);

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadRandom {
    /// Seed from the operating system.
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl RandomSource for ThreadRandom {
    fn chance(&mut self) -> f64 {
        self.0.random()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Deterministic randomness from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Seed with `seed`. Equal seeds produce equal sequences.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn chance(&mut self) -> f64 {
        self.0.random()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed list of draws, for tests.
///
/// Each call consumes one value. `pick_index` maps the value onto
/// `0..len`. Running out of values panics, which surfaces any draw the
/// test did not expect. Only built for tests and the `test-support`
/// feature.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f64>,
    consumed: usize,
}

#[cfg(any(test, feature = "test-support"))]
impl ScriptedRandom {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Queue more values.
    pub fn extend(&mut self, values: impl IntoIterator<Item = f64>) {
        self.values.extend(values);
    }

    /// Number of values drawn so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of values still queued.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next(&mut self) -> f64 {
        match self.values.pop_front() {
            Some(v) => {
                self.consumed += 1;
                v
            }
            None => panic!(
                "scripted random source exhausted after {} draws",
                self.consumed
            ),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl RandomSource for ScriptedRandom {
    fn chance(&mut self) -> f64 {
        self.next()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let v = self.next().clamp(0.0, 1.0);
        ((v * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn chance(&mut self) -> f64 {
        (**self).chance()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
