//! In-memory offer and lead stores.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{LeadRepository, OfferRepository};
use crate::domain::sales::{
    DiscountType, LeadDraft, LeadPatch, LeadStatus, Offer, OfferDraft, OfferPatch, OfferStatus,
    SalesLead,
};
use crate::domain::subscription::PlanTier;
use crate::domain::{Error, UserId};

use super::{StoreLatency, seed_date, seed_timestamp};

/// In-memory store of promotional offers.
pub struct InMemoryOfferStore {
    latency: StoreLatency,
    offers: RwLock<Vec<Offer>>,
}

impl InMemoryOfferStore {
    /// Store seeded with the standing promotional offers.
    ///
    /// `created_by` is stamped on every seed entry; in practice the super
    /// admin account.
    #[must_use]
    pub fn seeded(latency: StoreLatency, created_by: UserId) -> Self {
        Self {
            latency,
            offers: RwLock::new(seed_offers(created_by)),
        }
    }

    /// Store with no offers.
    #[must_use]
    pub fn empty(latency: StoreLatency) -> Self {
        Self {
            latency,
            offers: RwLock::new(Vec::new()),
        }
    }
}

fn seed_offers(created_by: UserId) -> Vec<Offer> {
    vec![
        Offer {
            id: Uuid::new_v4(),
            code: "WELCOME20".into(),
            name: "Welcome Offer".into(),
            description: "20% off on first subscription".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 20,
            min_order_amount: None,
            max_discount: Some(500),
            valid_from: seed_date(2024, 1, 1),
            valid_until: seed_date(2024, 12, 31),
            usage_limit: Some(1000),
            usage_count: 245,
            applicable_plans: vec![PlanTier::Basic, PlanTier::Professional, PlanTier::Enterprise],
            created_by,
            status: OfferStatus::Active,
            created_at: seed_timestamp(2024, 1, 1),
        },
        Offer {
            id: Uuid::new_v4(),
            code: "YEARLY50".into(),
            name: "Yearly Subscription Discount".into(),
            description: "Flat \u{20b9}500 off on yearly plans".into(),
            discount_type: DiscountType::Fixed,
            discount_value: 500,
            min_order_amount: None,
            max_discount: None,
            valid_from: seed_date(2024, 1, 1),
            valid_until: seed_date(2024, 12, 31),
            usage_limit: Some(500),
            usage_count: 89,
            applicable_plans: vec![PlanTier::Professional, PlanTier::Enterprise],
            created_by,
            status: OfferStatus::Active,
            created_at: seed_timestamp(2024, 1, 1),
        },
    ]
}

#[async_trait]
impl OfferRepository for InMemoryOfferStore {
    async fn list(&self) -> Result<Vec<Offer>, Error> {
        self.latency.pause().await;
        Ok(self.offers.read().await.clone())
    }

    async fn create(&self, draft: OfferDraft, created_by: UserId) -> Result<Offer, Error> {
        self.latency.pause().await;
        let offer = Offer::from_draft(draft, created_by, Utc::now());
        self.offers.write().await.push(offer.clone());
        Ok(offer)
    }

    async fn update(&self, id: Uuid, patch: OfferPatch) -> Result<Offer, Error> {
        self.latency.pause().await;
        let mut offers = self.offers.write().await;
        let offer = offers
            .iter_mut()
            .find(|offer| offer.id == id)
            .ok_or_else(|| Error::not_found("no such offer"))?;
        offer.apply(patch);
        Ok(offer.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.latency.pause().await;
        let mut offers = self.offers.write().await;
        let before = offers.len();
        offers.retain(|offer| offer.id != id);
        if offers.len() == before {
            return Err(Error::not_found("no such offer"));
        }
        Ok(())
    }
}

/// In-memory store of sales leads.
pub struct InMemoryLeadStore {
    latency: StoreLatency,
    leads: RwLock<Vec<SalesLead>>,
}

impl InMemoryLeadStore {
    /// Store seeded with the standing pipeline, assigned to `assignee`.
    #[must_use]
    pub fn seeded(latency: StoreLatency, assignee: UserId) -> Self {
        Self {
            latency,
            leads: RwLock::new(seed_leads(assignee)),
        }
    }

    /// Store with no leads.
    #[must_use]
    pub fn empty(latency: StoreLatency) -> Self {
        Self {
            latency,
            leads: RwLock::new(Vec::new()),
        }
    }
}

fn seed_leads(assignee: UserId) -> Vec<SalesLead> {
    vec![
        SalesLead {
            id: Uuid::new_v4(),
            name: "Rahul Sharma".into(),
            email: "rahul@example.com".into(),
            phone: "+91 98765 43210".into(),
            company_name: Some("Sharma Traders".into()),
            source: "Website".into(),
            status: LeadStatus::Qualified,
            assigned_to: Some(assignee),
            notes: None,
            value: Some(2999),
            created_at: seed_timestamp(2024, 1, 15),
            updated_at: seed_timestamp(2024, 1, 20),
        },
        SalesLead {
            id: Uuid::new_v4(),
            name: "Priya Patel".into(),
            email: "priya@example.com".into(),
            phone: "+91 98765 43211".into(),
            company_name: Some("Patel Enterprises".into()),
            source: "Referral".into(),
            status: LeadStatus::Proposal,
            assigned_to: Some(assignee),
            notes: None,
            value: Some(9999),
            created_at: seed_timestamp(2024, 1, 10),
            updated_at: seed_timestamp(2024, 1, 18),
        },
    ]
}

#[async_trait]
impl LeadRepository for InMemoryLeadStore {
    async fn list(&self) -> Result<Vec<SalesLead>, Error> {
        self.latency.pause().await;
        Ok(self.leads.read().await.clone())
    }

    async fn create(&self, draft: LeadDraft) -> Result<SalesLead, Error> {
        self.latency.pause().await;
        let lead = SalesLead::from_draft(draft, Utc::now());
        self.leads.write().await.push(lead.clone());
        Ok(lead)
    }

    async fn update(&self, id: Uuid, patch: LeadPatch) -> Result<SalesLead, Error> {
        self.latency.pause().await;
        let mut leads = self.leads.write().await;
        let lead = leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .ok_or_else(|| Error::not_found("no such lead"))?;
        lead.apply(patch, Utc::now());
        Ok(lead.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn offer_draft(code: &str) -> OfferDraft {
        OfferDraft {
            code: code.into(),
            name: "Festive".into(),
            description: "Festive discount".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
            min_order_amount: None,
            max_discount: None,
            valid_from: seed_date(2024, 10, 1),
            valid_until: seed_date(2024, 11, 1),
            usage_limit: None,
            applicable_plans: vec![PlanTier::Basic],
        }
    }

    #[tokio::test]
    async fn seeded_offers_are_present() {
        let store = InMemoryOfferStore::seeded(StoreLatency::NONE, UserId::random());
        let offers = store.list().await.expect("list offers");
        let codes: Vec<_> = offers.iter().map(|offer| offer.code.as_str()).collect();
        assert_eq!(codes, ["WELCOME20", "YEARLY50"]);
    }

    #[tokio::test]
    async fn create_then_delete_round_trips() {
        let store = InMemoryOfferStore::empty(StoreLatency::NONE);
        let creator = UserId::random();
        let offer = store
            .create(offer_draft("FESTIVE10"), creator)
            .await
            .expect("create offer");
        assert_eq!(offer.usage_count, 0);
        store.delete(offer.id).await.expect("delete offer");
        assert!(store.list().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_an_unknown_offer_is_not_found() {
        let store = InMemoryOfferStore::empty(StoreLatency::NONE);
        let err = store.delete(Uuid::new_v4()).await.expect_err("must fail");
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn offer_update_applies_last_write() {
        let store = InMemoryOfferStore::empty(StoreLatency::NONE);
        let offer = store
            .create(offer_draft("FESTIVE10"), UserId::random())
            .await
            .expect("create offer");
        for status in [OfferStatus::Inactive, OfferStatus::Active] {
            store
                .update(
                    offer.id,
                    OfferPatch {
                        status: Some(status),
                        ..OfferPatch::default()
                    },
                )
                .await
                .expect("update offer");
        }
        let offers = store.list().await.expect("list");
        assert_eq!(offers[0].status, OfferStatus::Active);
    }

    #[tokio::test]
    async fn lead_update_bumps_timestamp_and_keeps_the_rest() {
        let store = InMemoryLeadStore::seeded(StoreLatency::NONE, UserId::random());
        let lead = store.list().await.expect("list")[0].clone();
        let updated = store
            .update(
                lead.id,
                LeadPatch {
                    status: Some(LeadStatus::Won),
                    ..LeadPatch::default()
                },
            )
            .await
            .expect("update lead");
        assert_eq!(updated.status, LeadStatus::Won);
        assert_eq!(updated.name, lead.name);
        assert!(updated.updated_at > lead.updated_at);
    }

    #[tokio::test]
    async fn unknown_lead_ids_are_not_found() {
        let store = InMemoryLeadStore::empty(StoreLatency::NONE);
        let err = store
            .update(Uuid::new_v4(), LeadPatch::default())
            .await
            .expect_err("must fail");
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
