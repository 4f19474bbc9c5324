//! In-memory affiliate programme store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::affiliate::{Affiliate, AffiliateStatus, ReferralTransaction};
use crate::domain::ports::AffiliateQuery;
use crate::domain::{Error, UserId};

use super::{StoreLatency, seed_timestamp};

/// In-memory affiliate records and referral ledger.
pub struct InMemoryAffiliateStore {
    latency: StoreLatency,
    affiliates: RwLock<Vec<Affiliate>>,
    referrals: RwLock<Vec<ReferralTransaction>>,
}

impl InMemoryAffiliateStore {
    /// Store seeded with the manufacturer and distributor programmes.
    ///
    /// The referral ledger starts empty; commissions accrue at runtime.
    #[must_use]
    pub fn seeded(latency: StoreLatency, manufacturer: UserId, distributor: UserId) -> Self {
        Self {
            latency,
            affiliates: RwLock::new(seed_affiliates(manufacturer, distributor)),
            referrals: RwLock::new(Vec::new()),
        }
    }
}

fn seed_affiliates(manufacturer: UserId, distributor: UserId) -> Vec<Affiliate> {
    let created_at = seed_timestamp(2024, 1, 1);
    vec![
        Affiliate {
            id: Uuid::new_v4(),
            user_id: manufacturer,
            code: "MANU2024".into(),
            discount_percent: 15,
            commission_percent: 10,
            total_referrals: 25,
            total_earnings: 15000,
            pending_earnings: 3000,
            status: AffiliateStatus::Active,
            created_at,
        },
        Affiliate {
            id: Uuid::new_v4(),
            user_id: distributor,
            code: "DIST2024".into(),
            discount_percent: 20,
            commission_percent: 15,
            total_referrals: 40,
            total_earnings: 35000,
            pending_earnings: 5000,
            status: AffiliateStatus::Active,
            created_at,
        },
    ]
}

#[async_trait]
impl AffiliateQuery for InMemoryAffiliateStore {
    async fn summary(&self, user: UserId) -> Result<Option<Affiliate>, Error> {
        self.latency.pause().await;
        let affiliates = self.affiliates.read().await;
        Ok(affiliates.iter().find(|entry| entry.user_id == user).cloned())
    }

    async fn referrals(&self, user: UserId) -> Result<Vec<ReferralTransaction>, Error> {
        self.latency.pause().await;
        let affiliates = self.affiliates.read().await;
        let Some(affiliate) = affiliates.iter().find(|entry| entry.user_id == user) else {
            return Ok(Vec::new());
        };
        let referrals = self.referrals.read().await;
        Ok(referrals
            .iter()
            .filter(|entry| entry.affiliate_id == affiliate.id)
            .cloned()
            .collect())
    }
}
