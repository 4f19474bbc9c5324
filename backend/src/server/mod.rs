//! Server construction, store seeding, and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use demo_data::AccountRole;

use crate::domain::{Error, UserId};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{api_services, shell_services};
use crate::middleware::Trace;
use crate::outbound::memory::{
    InMemoryAffiliateStore, InMemoryBillingStore, InMemoryDirectory, InMemoryLeadStore,
    InMemoryNotificationStore, InMemoryOfferStore, InMemoryRoleStore, InMemoryStatsQuery,
    InMemorySubscriptionService, StoreLatency,
};
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;

/// Seed every store and bundle the port implementations for handlers.
///
/// The directory is seeded first so stores that reference user ids (offer
/// creators, lead assignees, affiliate programmes) can resolve them.
///
/// # Errors
/// Fails when the demo dataset cannot be generated or a seed account the
/// other stores depend on is missing.
pub async fn build_http_state(
    latency: StoreLatency,
    seed_name: &str,
    client_count: usize,
) -> Result<HttpState, Error> {
    let accounts = demo_data::demo_accounts();
    let clients = demo_data::generate_client_accounts(seed_name, client_count)
        .map_err(|err| Error::internal(format!("demo data generation failed: {err}")))?;
    let directory = Arc::new(InMemoryDirectory::seeded(latency, &accounts, &clients)?);

    let super_admin = seeded_account_id(&directory, &accounts, AccountRole::SuperAdmin).await?;
    let sales_admin = seeded_account_id(&directory, &accounts, AccountRole::SalesAdmin).await?;
    let manufacturer = seeded_account_id(&directory, &accounts, AccountRole::Manufacturer).await?;
    let distributor = seeded_account_id(&directory, &accounts, AccountRole::Distributor).await?;

    let billing = Arc::new(InMemoryBillingStore::seeded(latency));
    Ok(HttpState {
        login: directory.clone(),
        users: directory,
        notifications: Arc::new(InMemoryNotificationStore::new(latency)),
        offers: Arc::new(InMemoryOfferStore::seeded(latency, super_admin)),
        leads: Arc::new(InMemoryLeadStore::seeded(latency, sales_admin)),
        roles: Arc::new(InMemoryRoleStore::seeded(latency)),
        invoices: billing.clone(),
        products: billing,
        subscriptions: Arc::new(InMemorySubscriptionService::new(latency)),
        stats: Arc::new(InMemoryStatsQuery::seeded(latency)),
        affiliates: Arc::new(InMemoryAffiliateStore::seeded(
            latency,
            manufacturer,
            distributor,
        )),
    })
}

async fn seeded_account_id(
    directory: &InMemoryDirectory,
    accounts: &[demo_data::DemoAccount],
    role: AccountRole,
) -> Result<UserId, Error> {
    let email = accounts
        .iter()
        .find(|account| account.role == role)
        .map(|account| account.email)
        .ok_or_else(|| Error::internal(format!("no demo account for {role:?}")))?;
    directory
        .seeded_id(email)
        .await
        .ok_or_else(|| Error::internal(format!("seed account missing: {email}")))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    // Session middleware wraps the whole app: the dashboard shell and auth
    // pages read the session just like the API scope does.
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(api_services))
        .configure(shell_services)
        .service(crate::inbound::http::health::ready)
        .service(crate::inbound::http::health::live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over freshly seeded in-memory stores.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding fails or the socket cannot
/// be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        latency,
        seed_name,
        client_count,
    } = config;

    let http_state = build_http_state(latency, &seed_name, client_count)
        .await
        .map_err(|err| std::io::Error::other(format!("store seeding failed: {err}")))?;
    let http_state = web::Data::new(http_state);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
