//! Driven port for sales leads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::sales::{LeadDraft, LeadPatch, SalesLead};

/// Store of sales leads.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// All leads, in insertion order.
    async fn list(&self) -> Result<Vec<SalesLead>, Error>;

    /// Create a lead from a draft.
    async fn create(&self, draft: LeadDraft) -> Result<SalesLead, Error>;

    /// Apply a partial update, bumping the lead's update timestamp.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn update(&self, id: Uuid, patch: LeadPatch) -> Result<SalesLead, Error>;
}
