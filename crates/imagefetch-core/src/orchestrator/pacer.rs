//! Fixed idle gap between successive download attempts.

use std::time::{Duration, Instant};

/// Keeps the transport idle for `delay` after each attempt finishes.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    finished: Option<Instant>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            finished: None,
        }
    }

    /// Blocks until `delay` has passed since the last [`Pacer::done`].
    /// Returns at once before the first attempt.
    pub fn wait(&mut self) {
        if let Some(finished) = self.finished {
            let idle = finished.elapsed();
            if idle < self.delay {
                std::thread::sleep(self.delay - idle);
            }
        }
    }

    /// Marks the end of an attempt, successful or not.
    pub fn done(&mut self) {
        self.finished = Some(Instant::now());
    }
}
