//! Affiliate programme records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user::UserId;

/// Whether an affiliate account is earning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AffiliateStatus {
    Active,
    Inactive,
}

/// An affiliate account and its running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Affiliate {
    pub id: Uuid,
    pub user_id: UserId,
    pub code: String,
    pub discount_percent: u32,
    pub commission_percent: u32,
    pub total_referrals: u32,
    pub total_earnings: i64,
    pub pending_earnings: i64,
    pub status: AffiliateStatus,
    pub created_at: DateTime<Utc>,
}

/// Settlement state of a referral commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    Pending,
    Paid,
    Cancelled,
}

/// A single referral and the commission it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ReferralTransaction {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub referred_user_id: UserId,
    pub referred_user_name: String,
    pub amount: i64,
    pub commission: i64,
    pub status: ReferralStatus,
    pub created_at: DateTime<Utc>,
}
