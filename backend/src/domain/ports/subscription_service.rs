//! Driving port for the plan catalogue and subscribing.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::subscription::{BillingCycle, PlanDetails, PlanTier, Subscription};

/// Plan catalogue and subscription composition.
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    /// The purchasable plans, in ascending price order.
    async fn plans(&self) -> Result<Vec<PlanDetails>, Error>;

    /// Compose a new subscription on the chosen tier and cycle.
    ///
    /// The caller attaches the result to the account through the user
    /// directory; this service only prices and dates it.
    ///
    /// # Errors
    /// `not_found` when the tier is missing from the catalogue.
    async fn subscribe(&self, tier: PlanTier, cycle: BillingCycle) -> Result<Subscription, Error>;
}
