use std::time::Instant;

pub use warden_ledger::time::now_unix_secs;

/// When the process came up, on both the monotonic and the wall clock.
#[derive(Clone, Copy, Debug)]
pub struct StartTime {
    monotonic: Instant,
    unix_secs: u64,
}

impl StartTime {
    pub fn now() -> Self {
        Self {
            monotonic: Instant::now(),
            unix_secs: now_unix_secs(),
        }
    }

    pub fn unix_secs(&self) -> u64 {
        self.unix_secs
    }

    /// Seconds since start, immune to wall-clock adjustments.
    pub fn uptime_secs(&self) -> u64 {
        self.monotonic.elapsed().as_secs()
    }
}
