//! Driving port for affiliate programme reads.

use async_trait::async_trait;

use crate::domain::affiliate::{Affiliate, ReferralTransaction};
use crate::domain::{Error, UserId};

/// Read-side query for an affiliate's own records.
#[async_trait]
pub trait AffiliateQuery: Send + Sync {
    /// The caller's affiliate record, if enrolled.
    async fn summary(&self, user: UserId) -> Result<Option<Affiliate>, Error>;

    /// The caller's referral transactions, newest first.
    async fn referrals(&self, user: UserId) -> Result<Vec<ReferralTransaction>, Error>;
}
