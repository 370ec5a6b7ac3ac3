//! Shared clock and service fixtures for integration tests.

use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Utc};
use docket::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;

/// Service type backed by the in-memory store and a pinned clock.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

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

/// Provides a clock pinned to 2026-05-04T10:00:00Z.
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0)
            .single()
            .expect("valid fixed timestamp"),
    )
}

/// Builds a service over the given repository and clock.
pub fn service_with(repository: &Arc<InMemoryTaskRepository>, clock: FixedClock) -> TestService {
    TaskLifecycleService::new(Arc::clone(repository), Arc::new(clock))
}
