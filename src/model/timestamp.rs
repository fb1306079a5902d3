use chrono::prelude::*;

// Unix timestamp in milliseconds.
pub type Timestamp = i64;

/// Source of the capture time stamped onto every sample of a run.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Timestamp {
        self.0
    }
}
