//! Administration records: role definitions and platform statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A named permission set assignable to staff.
///
/// System definitions ship with the platform and cannot be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RoleDefinition {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Permission strings such as `leads:read`; `*` grants everything.
    pub permissions: Vec<String>,
    pub is_system: bool,
    pub created_at: DateTime<Utc>,
}

impl RoleDefinition {
    /// Materialise a draft as a non-system definition.
    #[must_use]
    pub fn from_draft(draft: RoleDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            permissions: draft.permissions,
            is_system: false,
            created_at: now,
        }
    }

    /// Apply a partial update; the system flag is immutable.
    pub fn apply(&mut self, patch: RolePatch) {
        let RolePatch {
            name,
            description,
            permissions,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(permissions) = permissions {
            self.permissions = permissions;
        }
    }
}

/// Creation payload for a role definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

/// Partial update for a role definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RolePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Headline numbers for the admin dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_revenue: i64,
    pub active_subscriptions: u64,
    pub new_signups: u64,
    pub conversion_rate: f64,
    /// Monthly recurring revenue.
    pub mrr: i64,
    /// Annual recurring revenue.
    pub arr: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn drafted_definitions_are_never_system() {
        let definition = RoleDefinition::from_draft(
            RoleDraft {
                name: "Support Agent".into(),
                description: "Handle customer support".into(),
                permissions: vec!["users:read".into(), "tickets:read".into()],
            },
            Utc::now(),
        );
        assert!(!definition.is_system);
    }

    #[rstest]
    fn patch_cannot_flip_the_system_flag() {
        let mut definition = RoleDefinition {
            id: Uuid::new_v4(),
            name: "Super Admin".into(),
            description: "Full system access".into(),
            permissions: vec!["*".into()],
            is_system: true,
            created_at: Utc::now(),
        };
        definition.apply(RolePatch {
            name: Some("Renamed".into()),
            ..RolePatch::default()
        });
        assert!(definition.is_system);
        assert_eq!(definition.name, "Renamed");
        assert_eq!(definition.permissions, vec!["*".to_owned()]);
    }
}
