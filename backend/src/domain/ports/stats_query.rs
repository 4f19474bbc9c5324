//! Driving port for dashboard statistics.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::admin::DashboardStats;

/// Read-side query for the admin dashboards' headline numbers.
#[async_trait]
pub trait StatsQuery: Send + Sync {
    /// Current platform statistics.
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error>;
}
