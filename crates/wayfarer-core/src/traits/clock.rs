use chrono::{DateTime, Utc};

/// Source of "now" for recency checks and `last_updated` stamps.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Used in tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl IClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
