//! In-memory role definition store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::admin::{RoleDefinition, RoleDraft, RolePatch};
use crate::domain::ports::RoleRepository;

use super::{StoreLatency, seed_timestamp};

/// In-memory store of assignable permission sets.
pub struct InMemoryRoleStore {
    latency: StoreLatency,
    roles: RwLock<Vec<RoleDefinition>>,
}

impl InMemoryRoleStore {
    /// Store seeded with the platform's standard definitions.
    #[must_use]
    pub fn seeded(latency: StoreLatency) -> Self {
        Self {
            latency,
            roles: RwLock::new(seed_roles()),
        }
    }
}

fn permission_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn seed_roles() -> Vec<RoleDefinition> {
    let created_at = seed_timestamp(2024, 1, 1);
    vec![
        RoleDefinition {
            id: Uuid::new_v4(),
            name: "Super Admin".into(),
            description: "Full system access".into(),
            permissions: permission_strings(&["*"]),
            is_system: true,
            created_at,
        },
        RoleDefinition {
            id: Uuid::new_v4(),
            name: "Sales Manager".into(),
            description: "Manage leads, offers, and clients".into(),
            permissions: permission_strings(&[
                "leads:read",
                "leads:write",
                "offers:read",
                "offers:write",
                "users:read",
                "payments:read",
            ]),
            is_system: true,
            created_at,
        },
        RoleDefinition {
            id: Uuid::new_v4(),
            name: "Support Agent".into(),
            description: "Handle customer support".into(),
            permissions: permission_strings(&["users:read", "tickets:read", "tickets:write"]),
            is_system: false,
            created_at,
        },
    ]
}

#[async_trait]
impl RoleRepository for InMemoryRoleStore {
    async fn list(&self) -> Result<Vec<RoleDefinition>, Error> {
        self.latency.pause().await;
        Ok(self.roles.read().await.clone())
    }

    async fn create(&self, draft: RoleDraft) -> Result<RoleDefinition, Error> {
        self.latency.pause().await;
        let definition = RoleDefinition::from_draft(draft, Utc::now());
        self.roles.write().await.push(definition.clone());
        Ok(definition)
    }

    async fn update(&self, id: Uuid, patch: RolePatch) -> Result<RoleDefinition, Error> {
        self.latency.pause().await;
        let mut roles = self.roles.write().await;
        let definition = roles
            .iter_mut()
            .find(|definition| definition.id == id)
            .ok_or_else(|| Error::not_found("no such role"))?;
        definition.apply(patch);
        Ok(definition.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.latency.pause().await;
        let mut roles = self.roles.write().await;
        let definition = roles
            .iter()
            .find(|definition| definition.id == id)
            .ok_or_else(|| Error::not_found("no such role"))?;
        if definition.is_system {
            return Err(Error::forbidden("system roles cannot be deleted"));
        }
        roles.retain(|definition| definition.id != id);
        Ok(())
    }
}
