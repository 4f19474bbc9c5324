//! Domain ports for the hexagonal boundary.
//!
//! Driving ports are called by inbound adapters (HTTP handlers); driven
//! ports are implemented by outbound adapters (the in-memory stores under
//! `outbound::memory`).

mod affiliate_query;
mod invoice_repository;
mod lead_repository;
mod login_service;
mod notification_store;
mod offer_repository;
mod product_repository;
mod role_repository;
mod stats_query;
mod subscription_service;
mod user_repository;

pub use affiliate_query::AffiliateQuery;
pub use invoice_repository::InvoiceRepository;
pub use lead_repository::LeadRepository;
pub use login_service::LoginService;
pub use notification_store::NotificationStore;
pub use offer_repository::OfferRepository;
pub use product_repository::ProductRepository;
pub use role_repository::RoleRepository;
pub use stats_query::StatsQuery;
pub use subscription_service::SubscriptionService;
pub use user_repository::UserRepository;
