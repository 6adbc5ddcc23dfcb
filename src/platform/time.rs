//! Fixed-cadence tick pacing

use std::thread;
use std::time::{Duration, Instant};

/// How far behind schedule the clock may fall before it gives up catching up
pub const MAX_LAG_TICKS: u32 = 8;

/// Paces ticks to evenly spaced deadlines
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    deadline: Instant,
    /// Times the schedule was abandoned and restarted from "now"
    pub resyncs: u64,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            deadline: start + interval,
            resyncs: 0,
        }
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        if let Some(delay) = self.advance(Instant::now()) {
            thread::sleep(delay);
        }
    }

    /// Move to the next deadline, returning how long to sleep from `now`
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        if now > self.deadline + self.interval * MAX_LAG_TICKS {
            log::warn!(
                "Tick loop {:.1}ms behind - resyncing",
                (now - self.deadline).as_secs_f64() * 1000.0
            );
            self.deadline = now;
            self.resyncs += 1;
        }

        let delay = self.deadline.saturating_duration_since(now);
        self.deadline += self.interval;
        (!delay.is_zero()).then_some(delay)
    }
}
