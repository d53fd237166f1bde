//! Shared helpers for board unit tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Deterministic clock advancing one second per reading.
///
/// Guarantees strictly increasing timestamps, so tests can assert
/// `updated_at > created_at` without racing the wall clock.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        let base = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid base instant");
        Self::starting_at(base)
    }

    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}
