use std::cell::Cell;

use chrono::Utc;

/// Supplies wall-clock time as fractional seconds since the Unix epoch.
pub trait Clock {
    /// Current time in epoch seconds.
    fn now(&self) -> f64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `seconds`. Returns the new time.
    pub fn advance(&self, seconds: f64) -> f64 {
        let next = self.now.get() + seconds;
        self.now.set(next);
        next
    }

    /// Jump to `time`.
    pub fn set(&self, time: f64) {
        self.now.set(time);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}
