//! Well-known demo accounts.
//!
//! One account per dashboard family (plus a distributor, which shares the
//! affiliate dashboard) so every portal can be exercised out of the box.
//! All demo accounts authenticate with [`DEMO_PASSWORD`].

use serde::{Deserialize, Serialize};

/// Shared password sentinel accepted for every demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Actor role attached to a seed account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    SuperAdmin,
    SalesAdmin,
    Manufacturer,
    Distributor,
    Client,
    Affiliate,
}

impl AccountRole {
    /// Wire identifier matching the backend's role encoding.
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
}

/// Subscription plan a seed account starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSeed {
    Basic,
    Professional,
    Enterprise,
}

/// A fixed demo account seeded into the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoAccount {
    pub email: &'static str,
    pub name: &'static str,
    pub role: AccountRole,
    pub phone: &'static str,
    pub company_name: &'static str,
    pub gst_number: Option<&'static str>,
    pub referral_code: Option<&'static str>,
    pub plan: Option<PlanSeed>,
}

/// The fixed demo accounts, one per dashboard family.
#[must_use]
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            email: "superadmin@billbook.example",
            name: "Super Admin",
            role: AccountRole::SuperAdmin,
            phone: "+91 98765 43210",
            company_name: "Billbook",
            gst_number: None,
            referral_code: None,
            plan: None,
        },
        DemoAccount {
            email: "sales@billbook.example",
            name: "Sales Manager",
            role: AccountRole::SalesAdmin,
            phone: "+91 98765 43211",
            company_name: "Billbook Sales",
            gst_number: None,
            referral_code: None,
            plan: None,
        },
        DemoAccount {
            email: "client@billbook.example",
            name: "Demo Client",
            role: AccountRole::Client,
            phone: "+91 98765 43212",
            company_name: "Demo Business",
            gst_number: Some("27AABCU9603R1ZX"),
            referral_code: None,
            plan: Some(PlanSeed::Professional),
        },
        DemoAccount {
            email: "manufacturer@billbook.example",
            name: "Demo Manufacturer",
            role: AccountRole::Manufacturer,
            phone: "+91 98765 43213",
            company_name: "Demo Manufacturing Ltd",
            gst_number: Some("27AABCU9603R1ZY"),
            referral_code: Some("MANU2024"),
            plan: None,
        },
        DemoAccount {
            email: "distributor@billbook.example",
            name: "Demo Distributor",
            role: AccountRole::Distributor,
            phone: "+91 98765 43214",
            company_name: "Demo Distribution",
            gst_number: Some("27AABCU9603R1ZZ"),
            referral_code: Some("DIST2024"),
            plan: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn demo_account_emails_are_unique() {
        let accounts = demo_accounts();
        let emails: HashSet<_> = accounts.iter().map(|a| a.email).collect();
        assert_eq!(emails.len(), accounts.len());
    }

    #[rstest]
    #[case(AccountRole::SuperAdmin, "super_admin")]
    #[case(AccountRole::SalesAdmin, "sales_admin")]
    #[case(AccountRole::Manufacturer, "manufacturer")]
    #[case(AccountRole::Distributor, "distributor")]
    #[case(AccountRole::Client, "client")]
    #[case(AccountRole::Affiliate, "affiliate")]
    fn roles_encode_to_wire_identifiers(#[case] role: AccountRole, #[case] expected: &str) {
        assert_eq!(role.as_str(), expected);
    }

    #[rstest]
    fn every_dashboard_family_is_covered() {
        let roles: HashSet<_> = demo_accounts().iter().map(|a| a.role).collect();
        for required in [
            AccountRole::SuperAdmin,
            AccountRole::SalesAdmin,
            AccountRole::Client,
            AccountRole::Manufacturer,
        ] {
            assert!(roles.contains(&required), "missing account for {required:?}");
        }
    }

    #[rstest]
    fn only_the_client_account_carries_a_subscription() {
        for account in demo_accounts() {
            match account.role {
                AccountRole::Client => assert_eq!(account.plan, Some(PlanSeed::Professional)),
                _ => assert_eq!(account.plan, None),
            }
        }
    }
}
