//! Driven port for role definitions (permission sets).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::admin::{RoleDefinition, RoleDraft, RolePatch};

/// Store of assignable permission sets.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// All definitions, in insertion order.
    async fn list(&self) -> Result<Vec<RoleDefinition>, Error>;

    /// Create a non-system definition from a draft.
    async fn create(&self, draft: RoleDraft) -> Result<RoleDefinition, Error>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn update(&self, id: Uuid, patch: RolePatch) -> Result<RoleDefinition, Error>;

    /// Remove a definition.
    ///
    /// # Errors
    /// `not_found` when the id is unknown; `forbidden` for system
    /// definitions.
    async fn delete(&self, id: Uuid) -> Result<(), Error>;
}
