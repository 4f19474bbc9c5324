//! In-memory dashboard statistics.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::admin::DashboardStats;
use crate::domain::ports::StatsQuery;

use super::StoreLatency;

/// Fixed platform statistics for the admin dashboards.
pub struct InMemoryStatsQuery {
    latency: StoreLatency,
    stats: DashboardStats,
}

impl InMemoryStatsQuery {
    /// Query over the demo environment's headline numbers.
    #[must_use]
    pub fn seeded(latency: StoreLatency) -> Self {
        Self {
            latency,
            stats: DashboardStats {
                total_users: 15_420,
                total_revenue: 2_847_500,
                active_subscriptions: 8_934,
                new_signups: 342,
                conversion_rate: 23.5,
                mrr: 245_000,
                arr: 2_940_000,
            },
        }
    }
}

#[async_trait]
impl StatsQuery for InMemoryStatsQuery {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        self.latency.pause().await;
        Ok(self.stats.clone())
    }
}
