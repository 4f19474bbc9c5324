//! HTTP inbound adapter exposing REST endpoints and the dashboard shell.

pub mod affiliates;
pub mod auth;
pub mod billing;
pub mod error;
pub mod guard;
pub mod health;
pub mod notifications;
pub mod sales;
pub mod session;
pub mod state;
pub mod subscriptions;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register every REST handler; mounted under the `/api/v1` scope.
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::signup)
        .service(auth::logout)
        .service(auth::current_user)
        .service(auth::update_profile)
        .service(users::list_users)
        .service(users::update_user_status)
        .service(users::list_roles)
        .service(users::create_role)
        .service(users::update_role)
        .service(users::delete_role)
        .service(users::dashboard_stats)
        .service(sales::list_offers)
        .service(sales::create_offer)
        .service(sales::update_offer)
        .service(sales::delete_offer)
        .service(sales::list_leads)
        .service(sales::create_lead)
        .service(sales::update_lead)
        .service(billing::list_invoices)
        .service(billing::create_invoice)
        .service(billing::list_products)
        .service(billing::create_product)
        .service(subscriptions::list_plans)
        .service(subscriptions::subscribe)
        .service(notifications::list_notifications)
        .service(notifications::mark_notification_read)
        .service(notifications::clear_notifications)
        .service(affiliates::affiliate_summary)
        .service(affiliates::affiliate_referrals);
}

/// Register the navigation shell: landing page, guarded dashboards, and
/// public-only auth pages. Mounted at the application root.
pub fn shell_services(cfg: &mut web::ServiceConfig) {
    cfg.service(guard::landing)
        .service(guard::login_page)
        .service(guard::signup_page)
        .service(guard::forgot_password_page)
        .service(guard::dashboard_root)
        .service(guard::dashboard_section);
}
