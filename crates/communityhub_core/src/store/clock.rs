//! Time source for creation timestamps.

use chrono::Utc;
use std::cell::Cell;

/// Supplies "now" as Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall clock, UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for deterministic tests and replays.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    pub fn new(now_epoch_ms: i64) -> Self {
        Self {
            now: Cell::new(now_epoch_ms),
        }
    }

    pub fn set(&self, now_epoch_ms: i64) {
        self.now.set(now_epoch_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_epoch_ms(&self) -> i64 {
        (**self).now_epoch_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};

    #[test]
    fn fixed_clock_only_moves_when_told() {
        let clock = FixedClock::new(1_000);
        assert_eq!(clock.now_epoch_ms(), 1_000);
        clock.advance(250);
        assert_eq!(clock.now_epoch_ms(), 1_250);
        clock.set(5);
        assert_eq!(clock.now_epoch_ms(), 5);
    }
}
