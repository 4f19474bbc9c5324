//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on domain ports and stay testable without real infrastructure.
//! There are no hidden store singletons: every adapter is constructed at
//! server assembly and injected here.

use std::sync::Arc;

use crate::domain::ports::{
    AffiliateQuery, InvoiceRepository, LeadRepository, LoginService, NotificationStore,
    OfferRepository, ProductRepository, RoleRepository, StatsQuery, SubscriptionService,
    UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserRepository>,
    pub notifications: Arc<dyn NotificationStore>,
    pub offers: Arc<dyn OfferRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub invoices: Arc<dyn InvoiceRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub subscriptions: Arc<dyn SubscriptionService>,
    pub stats: Arc<dyn StatsQuery>,
    pub affiliates: Arc<dyn AffiliateQuery>,
}
