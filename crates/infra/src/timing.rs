// crates/infra/src/timing.rs
use std::time::{Duration, Instant};

/// Monotonic wall-clock timer for one run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the watch, returning the elapsed duration.
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}
