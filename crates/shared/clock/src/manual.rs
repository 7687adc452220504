use std::sync::Mutex;

use chrono::Duration;
use helios_core::Timestamp;
use helios_ports::Clock;

/// Manually driven clock for deterministic tests
///
/// Time only moves when `set` or `advance` is called. Used to exercise
/// behavior that depends on the calendar date, such as the daily ledger
/// rollover across UTC midnight.
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, time: Timestamp) {
        *self.now.lock().unwrap() = time;
    }

    /// Move forward by a duration
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
