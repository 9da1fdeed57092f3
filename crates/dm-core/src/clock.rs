use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic time in seconds.
///
/// The core never reads wall-clock time; whoever embeds it decides what a second is (real time,
/// simulation time, fixed-step ticks).
pub trait Clock: 'static {
    fn now(&self) -> f32;
}

/// Real monotonic clock, measured from construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }
}

/// Hand-driven clock.
///
/// Clones share the same underlying time, so a test can keep one handle and give the other to a
/// `DecisionMaker`.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: Rc<Cell<f32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(time: f32) -> Self {
        let clock = Self::default();
        clock.set(time);
        clock
    }

    pub fn set(&self, time: f32) {
        self.time.set(time);
    }

    pub fn advance(&self, seconds: f32) {
        self.time.set(self.time.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f32 {
        self.time.get()
    }
}
