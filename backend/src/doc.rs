//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and wire schema. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::access::{Portal, Role};
use crate::domain::admin::{DashboardStats, RoleDefinition, RoleDraft, RolePatch};
use crate::domain::affiliate::{Affiliate, AffiliateStatus, ReferralStatus, ReferralTransaction};
use crate::domain::billing::{
    Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus, Product, ProductDraft,
};
use crate::domain::error::{Error, ErrorCode};
use crate::domain::notification::{Notification, Severity};
use crate::domain::sales::{
    DiscountType, LeadDraft, LeadPatch, LeadStatus, Offer, OfferDraft, OfferPatch, OfferStatus,
    SalesLead,
};
use crate::domain::subscription::{
    BillingCycle, PlanDetails, PlanTier, PlanLimits, Subscription, SubscriptionStatus,
};
use crate::domain::user::{User, UserProfileUpdate, UserStatus};
use crate::inbound::http::auth::{LoginRequest, SignupBody};
use crate::inbound::http::guard::{AuthPageView, ShellView};
use crate::inbound::http::subscriptions::SubscribeRequest;
use crate::inbound::http::users::StatusChange;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API and navigation shell.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Billbook backend API",
        description = "HTTP interface for the multi-role billing dashboards: \
                       session identity, guarded navigation, and the demo store surface.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_user,
        crate::inbound::http::auth::update_profile,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::update_user_status,
        crate::inbound::http::users::list_roles,
        crate::inbound::http::users::create_role,
        crate::inbound::http::users::update_role,
        crate::inbound::http::users::delete_role,
        crate::inbound::http::users::dashboard_stats,
        crate::inbound::http::sales::list_offers,
        crate::inbound::http::sales::create_offer,
        crate::inbound::http::sales::update_offer,
        crate::inbound::http::sales::delete_offer,
        crate::inbound::http::sales::list_leads,
        crate::inbound::http::sales::create_lead,
        crate::inbound::http::sales::update_lead,
        crate::inbound::http::billing::list_invoices,
        crate::inbound::http::billing::create_invoice,
        crate::inbound::http::billing::list_products,
        crate::inbound::http::billing::create_product,
        crate::inbound::http::subscriptions::list_plans,
        crate::inbound::http::subscriptions::subscribe,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::mark_notification_read,
        crate::inbound::http::notifications::clear_notifications,
        crate::inbound::http::affiliates::affiliate_summary,
        crate::inbound::http::affiliates::affiliate_referrals,
        crate::inbound::http::guard::landing,
        crate::inbound::http::guard::login_page,
        crate::inbound::http::guard::signup_page,
        crate::inbound::http::guard::forgot_password_page,
        crate::inbound::http::guard::dashboard_root,
        crate::inbound::http::guard::dashboard_section,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        Portal,
        User,
        UserStatus,
        UserProfileUpdate,
        Subscription,
        SubscriptionStatus,
        PlanDetails,
        PlanLimits,
        PlanTier,
        BillingCycle,
        Notification,
        Severity,
        Offer,
        OfferDraft,
        OfferPatch,
        OfferStatus,
        DiscountType,
        SalesLead,
        LeadDraft,
        LeadPatch,
        LeadStatus,
        Invoice,
        InvoiceDraft,
        InvoiceItem,
        InvoiceStatus,
        Product,
        ProductDraft,
        RoleDefinition,
        RoleDraft,
        RolePatch,
        DashboardStats,
        Affiliate,
        AffiliateStatus,
        ReferralTransaction,
        ReferralStatus,
        LoginRequest,
        SignupBody,
        StatusChange,
        SubscribeRequest,
        ShellView,
        AuthPageView,
    )),
    tags(
        (name = "auth", description = "Session identity: login, signup, logout, profile"),
        (name = "shell", description = "Guarded navigation shell and public pages"),
        (name = "admin", description = "User and role administration"),
        (name = "sales", description = "Offers and the lead pipeline"),
        (name = "billing", description = "Client invoices and inventory"),
        (name = "subscriptions", description = "Plan catalogue and subscribing"),
        (name = "notifications", description = "Per-user notification feeds"),
        (name = "affiliate", description = "Affiliate programme reads"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_api_operation_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for expected in [
            "/api/v1/auth/login",
            "/api/v1/admin/users",
            "/api/v1/sales/offers",
            "/api/v1/billing/invoices",
            "/api/v1/plans",
            "/api/v1/notifications",
            "/api/v1/affiliate/summary",
            "/dashboard/{portal}",
            "/health/ready",
        ] {
            assert!(paths.contains_key(expected), "missing path {expected}");
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("Error"));
        assert!(schemas.contains_key("User"));
        assert!(schemas.contains_key("Notification"));
    }
}
