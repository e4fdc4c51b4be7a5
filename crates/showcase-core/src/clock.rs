//! Time sources and frame scheduling seams.

use std::cell::Cell;
use std::rc::Rc;

use instant::Instant;

/// Monotonic seconds since some fixed start.
pub trait Clock {
    fn elapsed_secs(&self) -> f64;
}

/// Wall clock backed by `instant` (delegates to `performance.now()` on wasm).
#[derive(Clone, Debug)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle and give another to the code under test.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn elapsed_secs(&self) -> f64 {
        self.now.get()
    }
}

/// Whether the frame loop should keep going after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Recurring "next frame" primitive. The browser build implements it with
/// `requestAnimationFrame`; tests use [`SyncScheduler`].
pub trait FrameScheduler {
    fn run<F>(self, tick: F)
    where
        F: FnMut() -> LoopControl + 'static;
}

/// Calls the tick synchronously up to `frames` times.
#[derive(Clone, Copy, Debug)]
pub struct SyncScheduler {
    pub frames: usize,
}

impl SyncScheduler {
    pub fn new(frames: usize) -> Self {
        Self { frames }
    }
}

impl FrameScheduler for SyncScheduler {
    fn run<F>(self, mut tick: F)
    where
        F: FnMut() -> LoopControl + 'static,
    {
        for _ in 0..self.frames {
            if tick() == LoopControl::Stop {
                break;
            }
        }
    }
}
