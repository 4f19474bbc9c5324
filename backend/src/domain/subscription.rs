//! Subscription plans, quotas, and active subscriptions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Basic,
    Professional,
    Enterprise,
}

/// Billing cadence for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// A plan quota; the wire form is an integer where `-1` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl From<i64> for Quota {
    fn from(value: i64) -> Self {
        u32::try_from(value).map_or(Self::Unlimited, Self::Limited)
    }
}

impl From<Quota> for i64 {
    fn from(value: Quota) -> Self {
        match value {
            Quota::Limited(n) => Self::from(n),
            Quota::Unlimited => -1,
        }
    }
}

/// Quotas attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PlanLimits {
    #[schema(value_type = i64, example = 100)]
    pub invoices: Quota,
    #[schema(value_type = i64)]
    pub products: Quota,
    #[schema(value_type = i64)]
    pub businesses: Quota,
    #[schema(value_type = i64)]
    pub users: Quota,
}

/// A purchasable plan as shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PlanDetails {
    pub tier: PlanTier,
    pub name: String,
    pub description: String,
    pub monthly_price: i64,
    pub yearly_price: i64,
    pub features: Vec<String>,
    pub popular: bool,
    pub limits: PlanLimits,
}

impl PlanDetails {
    /// Price for the chosen billing cycle.
    #[must_use]
    pub fn price_for(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }
}

/// Lifecycle state of an active subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
}

/// A subscription attached to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Subscription {
    pub id: Uuid,
    pub plan: PlanTier,
    pub status: SubscriptionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: i64,
    pub billing_cycle: BillingCycle,
    pub features: Vec<String>,
}

impl Subscription {
    /// Start a one-year subscription on the given plan.
    #[must_use]
    pub fn start(plan: &PlanDetails, cycle: BillingCycle, now: DateTime<Utc>) -> Self {
        let start_date = now.date_naive();
        let end_date = start_date
            .checked_add_months(chrono::Months::new(12))
            .unwrap_or(start_date);
        Self {
            id: Uuid::new_v4(),
            plan: plan.tier,
            status: SubscriptionStatus::Active,
            start_date,
            end_date,
            amount: plan.price_for(cycle),
            billing_cycle: cycle,
            features: plan.features.clone(),
        }
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// The static plan catalogue shown on the pricing page.
///
/// Three tiers; the professional tier is flagged popular.
#[must_use]
pub fn plan_catalogue() -> Vec<PlanDetails> {
    vec![
        PlanDetails {
            tier: PlanTier::Basic,
            name: "Basic".into(),
            description: "Perfect for small businesses just getting started".into(),
            monthly_price: 99,
            yearly_price: 999,
            features: features(&[
                "Up to 100 invoices/month",
                "Up to 50 products",
                "1 business",
                "Basic reports",
                "Email support",
            ]),
            popular: false,
            limits: PlanLimits {
                invoices: Quota::Limited(100),
                products: Quota::Limited(50),
                businesses: Quota::Limited(1),
                users: Quota::Limited(1),
            },
        },
        PlanDetails {
            tier: PlanTier::Professional,
            name: "Professional".into(),
            description: "Best for growing businesses with multiple needs".into(),
            monthly_price: 299,
            yearly_price: 2999,
            features: features(&[
                "Unlimited invoices",
                "Unlimited products",
                "Up to 5 businesses",
                "Advanced reports & analytics",
                "GST filing integration",
                "Priority support",
                "Inventory management",
            ]),
            popular: true,
            limits: PlanLimits {
                invoices: Quota::Unlimited,
                products: Quota::Unlimited,
                businesses: Quota::Limited(5),
                users: Quota::Limited(3),
            },
        },
        PlanDetails {
            tier: PlanTier::Enterprise,
            name: "Enterprise".into(),
            description: "For large organisations with custom requirements".into(),
            monthly_price: 999,
            yearly_price: 9999,
            features: features(&[
                "Everything in Professional",
                "Unlimited businesses",
                "Unlimited users",
                "Custom integrations",
                "Dedicated account manager",
                "API access",
                "White-label options",
                "24/7 phone support",
            ]),
            popular: false,
            limits: PlanLimits {
                invoices: Quota::Unlimited,
                products: Quota::Unlimited,
                businesses: Quota::Unlimited,
                users: Quota::Unlimited,
            },
        },
    ]
}

/// Find a plan in the catalogue by tier.
#[must_use]
pub fn find_plan(catalogue: &[PlanDetails], tier: PlanTier) -> Option<&PlanDetails> {
    catalogue.iter().find(|plan| plan.tier == tier)
}
