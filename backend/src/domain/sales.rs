//! Sales records: promotional offers and leads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::subscription::PlanTier;
use super::user::UserId;

/// How an offer's discount is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Lifecycle state of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Active,
    Inactive,
    Expired,
}

/// A promotional offer/coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Offer {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<i64>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    pub usage_count: u32,
    pub applicable_plans: Vec<PlanTier>,
    pub created_by: UserId,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    /// Materialise a draft: fresh id, zero usage, active status.
    #[must_use]
    pub fn from_draft(draft: OfferDraft, created_by: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: draft.code,
            name: draft.name,
            description: draft.description,
            discount_type: draft.discount_type,
            discount_value: draft.discount_value,
            min_order_amount: draft.min_order_amount,
            max_discount: draft.max_discount,
            valid_from: draft.valid_from,
            valid_until: draft.valid_until,
            usage_limit: draft.usage_limit,
            usage_count: 0,
            applicable_plans: draft.applicable_plans,
            created_by,
            status: OfferStatus::Active,
            created_at: now,
        }
    }

    /// Apply a partial update; absent fields stay untouched.
    pub fn apply(&mut self, patch: OfferPatch) {
        let OfferPatch {
            name,
            description,
            discount_value,
            max_discount,
            valid_until,
            usage_limit,
            status,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(discount_value) = discount_value {
            self.discount_value = discount_value;
        }
        if let Some(max_discount) = max_discount {
            self.max_discount = Some(max_discount);
        }
        if let Some(valid_until) = valid_until {
            self.valid_until = valid_until;
        }
        if let Some(usage_limit) = usage_limit {
            self.usage_limit = Some(usage_limit);
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Creation payload for an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct OfferDraft {
    pub code: String,
    pub name: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<i64>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    pub applicable_plans: Vec<PlanTier>,
}

/// Partial update for an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct OfferPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OfferStatus>,
}

/// Pipeline state of a sales lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

/// A sales lead being worked through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SalesLead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub source: String,
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SalesLead {
    /// Materialise a draft with a fresh id and matching timestamps.
    #[must_use]
    pub fn from_draft(draft: LeadDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company_name: draft.company_name,
            source: draft.source,
            status: draft.status,
            assigned_to: draft.assigned_to,
            notes: draft.notes,
            value: draft.value,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`.
    pub fn apply(&mut self, patch: LeadPatch, now: DateTime<Utc>) {
        let LeadPatch {
            status,
            assigned_to,
            notes,
            value,
        } = patch;
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(assigned_to) = assigned_to {
            self.assigned_to = Some(assigned_to);
        }
        if let Some(notes) = notes {
            self.notes = Some(notes);
        }
        if let Some(value) = value {
            self.value = Some(value);
        }
        self.updated_at = now;
    }
}

/// Creation payload for a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub source: String,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// Partial update for a lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct LeadPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}
