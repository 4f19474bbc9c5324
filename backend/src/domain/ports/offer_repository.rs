//! Driven port for promotional offers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::sales::{Offer, OfferDraft, OfferPatch};
use crate::domain::{Error, UserId};

/// Store of promotional offers.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// All offers, in insertion order.
    async fn list(&self) -> Result<Vec<Offer>, Error>;

    /// Create an offer from a draft; usage starts at zero.
    async fn create(&self, draft: OfferDraft, created_by: UserId) -> Result<Offer, Error>;

    /// Apply a partial update. Last write wins.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn update(&self, id: Uuid, patch: OfferPatch) -> Result<Offer, Error>;

    /// Remove an offer.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<(), Error>;
}
