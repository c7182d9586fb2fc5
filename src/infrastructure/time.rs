// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, Duration, DurationRound, Utc};

/// Wall clock truncated to microseconds, the resolution of `TIMESTAMPTZ`, so
/// a stamp written to the store compares equal to the one read back.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.duration_trunc(Duration::microseconds(1)).unwrap_or(now)
    }
}
