//! Client billing records: invoices and inventory products.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

/// A single invoice line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct InvoiceItem {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: u32,
    pub rate: i64,
    pub amount: i64,
}

/// A client invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: i64,
    pub tax: i64,
    pub total: i64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Materialise a draft with a fresh id and creation timestamp.
    #[must_use]
    pub fn from_draft(draft: InvoiceDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_number: draft.invoice_number,
            client_name: draft.client_name,
            client_email: draft.client_email,
            amount: draft.amount,
            tax: draft.tax,
            total: draft.total,
            status: draft.status,
            due_date: draft.due_date,
            created_at: now,
            items: draft.items,
        }
    }
}

/// Creation payload for an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: i64,
    pub tax: i64,
    pub total: i64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItem>,
}

/// An inventory product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub price: i64,
    pub cost: i64,
    pub stock: u32,
    pub low_stock_alert: u32,
    pub unit: String,
    pub gst_rate: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materialise a draft with a fresh id and matching timestamps.
    #[must_use]
    pub fn from_draft(draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            sku: draft.sku,
            description: draft.description,
            category: draft.category,
            price: draft.price,
            cost: draft.cost,
            stock: draft.stock,
            low_stock_alert: draft.low_stock_alert,
            unit: draft.unit,
            gst_rate: draft.gst_rate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the stock level has fallen to the alert threshold.
    #[must_use]
    pub fn is_low_on_stock(&self) -> bool {
        self.stock <= self.low_stock_alert
    }
}

/// Creation payload for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub price: i64,
    pub cost: i64,
    pub stock: u32,
    pub low_stock_alert: u32,
    pub unit: String,
    pub gst_rate: u32,
}
