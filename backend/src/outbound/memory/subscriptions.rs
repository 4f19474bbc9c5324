//! In-memory subscription service over the static plan catalogue.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::Error;
use crate::domain::ports::SubscriptionService;
use crate::domain::subscription::{
    BillingCycle, PlanDetails, PlanTier, Subscription, find_plan, plan_catalogue,
};

use super::StoreLatency;

/// Plan catalogue and subscription pricing.
///
/// The catalogue is fixed at construction; there is no mutation surface.
pub struct InMemorySubscriptionService {
    latency: StoreLatency,
    catalogue: Vec<PlanDetails>,
}

impl InMemorySubscriptionService {
    /// Service over the standard three-tier catalogue.
    #[must_use]
    pub fn new(latency: StoreLatency) -> Self {
        Self {
            latency,
            catalogue: plan_catalogue(),
        }
    }
}

#[async_trait]
impl SubscriptionService for InMemorySubscriptionService {
    async fn plans(&self) -> Result<Vec<PlanDetails>, Error> {
        self.latency.pause().await;
        Ok(self.catalogue.clone())
    }

    async fn subscribe(&self, tier: PlanTier, cycle: BillingCycle) -> Result<Subscription, Error> {
        self.latency.pause().await;
        let plan = find_plan(&self.catalogue, tier)
            .ok_or_else(|| Error::not_found("no such plan tier"))?;
        Ok(Subscription::start(plan, cycle, Utc::now()))
    }
}
