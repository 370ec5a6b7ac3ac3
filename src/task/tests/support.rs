//! Shared fixtures for task unit tests.

use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl FixedClock {
    /// Returns the pinned instant shifted by `delta`, as a fixed-offset time.
    pub fn offset_by(&self, delta: Duration) -> DateTime<FixedOffset> {
        (self.0 + delta).fixed_offset()
    }
}

#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0)
            .single()
            .expect("valid fixed timestamp"),
    )
}
