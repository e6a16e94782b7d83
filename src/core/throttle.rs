// src/core/throttle.rs
use std::{thread, time::Duration};

/// Fixed pause before every request, first one included, regardless of how the last
/// one went. The only rate limiting there is.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn wait(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay); // be polite
        }
    }
}
