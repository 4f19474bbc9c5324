//! In-memory store adapters.
//!
//! Each adapter implements a domain port over a `tokio::sync::RwLock`
//! snapshot of seed data and pauses for a configurable artificial latency
//! before touching state, simulating the upstream call a real backend
//! would make. Operations always complete and apply; there is no
//! cancellation, no conflict detection, and the last write wins.

mod affiliates;
mod billing;
mod directory;
mod notifications;
mod roles;
mod sales;
mod stats;
mod subscriptions;

pub use affiliates::InMemoryAffiliateStore;
pub use billing::InMemoryBillingStore;
pub use directory::InMemoryDirectory;
pub use notifications::InMemoryNotificationStore;
pub use roles::InMemoryRoleStore;
pub use sales::{InMemoryLeadStore, InMemoryOfferStore};
pub use stats::InMemoryStatsQuery;
pub use subscriptions::InMemorySubscriptionService;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::time::Duration;

/// Artificial upstream latency applied by every store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLatency(Duration);

impl StoreLatency {
    /// No pause at all; the default for tests.
    pub const NONE: Self = Self(Duration::ZERO);

    /// Pause for the given duration before each store operation.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Pause from a millisecond count.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Wait out the configured latency.
    pub(crate) async fn pause(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Midnight-UTC timestamp for seed records.
pub(crate) fn seed_timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(|| Utc.timestamp_nanos(0))
}

/// Calendar date for seed records.
pub(crate) fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
