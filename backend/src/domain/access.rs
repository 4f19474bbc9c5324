//! Role-based access decisions for dashboard subtrees.
//!
//! Every decision here is a synchronous lookup against static tables: a role
//! maps to exactly one dashboard portal, and each portal carries a fixed
//! allow-list. Adapters translate the resulting [`Access`] value into a
//! render or a redirect; nothing in this module knows about HTTP.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path of the login page, the redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/auth/login";

/// Actor category determining which dashboard subtree is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    SalesAdmin,
    Manufacturer,
    Distributor,
    Client,
    Affiliate,
}

impl Role {
    /// Wire identifier for the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::SalesAdmin => "sales_admin",
            Self::Manufacturer => "manufacturer",
            Self::Distributor => "distributor",
            Self::Client => "client",
            Self::Affiliate => "affiliate",
        }
    }

    /// The dashboard portal this role lands on.
    ///
    /// Manufacturers, distributors, and affiliates share the affiliate
    /// portal; every other role has a portal of its own.
    #[must_use]
    pub fn portal(self) -> Portal {
        match self {
            Self::SuperAdmin => Portal::SuperAdmin,
            Self::SalesAdmin => Portal::Sales,
            Self::Client => Portal::Client,
            Self::Manufacturer | Self::Distributor | Self::Affiliate => Portal::Affiliate,
        }
    }
}

/// Dashboard root per role family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Portal {
    SuperAdmin,
    Sales,
    Client,
    Affiliate,
}

impl Portal {
    /// All portals, in navigation order.
    pub const ALL: [Self; 4] = [Self::SuperAdmin, Self::Sales, Self::Client, Self::Affiliate];

    /// Path segment identifying the portal under `/dashboard`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Sales => "sales",
            Self::Client => "client",
            Self::Affiliate => "affiliate",
        }
    }

    /// Resolve a path segment back to a portal.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|portal| portal.slug() == slug)
    }

    /// Absolute path of the portal's dashboard root.
    #[must_use]
    pub fn base_path(self) -> &'static str {
        match self {
            Self::SuperAdmin => "/dashboard/super-admin",
            Self::Sales => "/dashboard/sales",
            Self::Client => "/dashboard/client",
            Self::Affiliate => "/dashboard/affiliate",
        }
    }

    /// Roles permitted to enter this portal's subtree.
    ///
    /// The super admin may also enter the sales portal; the remaining
    /// allow-lists are exactly the portal's own role family.
    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::SuperAdmin => &[Role::SuperAdmin],
            Self::Sales => &[Role::SalesAdmin, Role::SuperAdmin],
            Self::Client => &[Role::Client],
            Self::Affiliate => &[Role::Manufacturer, Role::Distributor, Role::Affiliate],
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The caller may see the requested subtree.
    Grant,
    /// No authenticated user: send the caller to the login page.
    RedirectToLogin,
    /// Authenticated but outside the allow-list: send the caller home.
    Redirect(Portal),
}

impl Access {
    /// Redirect target path, when the decision is a redirect.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Grant => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::Redirect(portal) => Some(portal.base_path()),
        }
    }
}

/// Guard for protected dashboard subtrees.
///
/// Unauthenticated callers are redirected to the login page; authenticated
/// callers outside the portal's allow-list are redirected to their own
/// dashboard root, never to the requested subtree.
#[must_use]
pub fn protected(role: Option<Role>, portal: Portal) -> Access {
    match role {
        None => Access::RedirectToLogin,
        Some(role) if portal.allowed_roles().contains(&role) => Access::Grant,
        Some(role) => Access::Redirect(role.portal()),
    }
}

/// Guard for public-only pages (login, signup).
///
/// Authenticated callers have no business on the auth pages and are
/// redirected to their dashboard root.
#[must_use]
pub fn public_only(role: Option<Role>) -> Access {
    match role {
        None => Access::Grant,
        Some(role) => Access::Redirect(role.portal()),
    }
}
