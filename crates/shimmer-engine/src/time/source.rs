use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time provider.
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Reads `Instant::now()`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same timeline: keep one handle in the test (or host
/// frame pump) and give another to the drawable.
#[derive(Debug, Clone)]
pub struct ManualClock {
    epoch: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(by));
    }

    #[inline]
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Time elapsed since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.epoch + self.elapsed.get()
    }
}
