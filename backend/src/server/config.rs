//! HTTP server configuration object.

use actix_web::cookie::{Key, SameSite};
use std::net::SocketAddr;

use crate::outbound::memory::StoreLatency;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) latency: StoreLatency,
    pub(crate) seed_name: String,
    pub(crate) client_count: usize,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            latency: StoreLatency::NONE,
            seed_name: "amber-ledger".to_owned(),
            client_count: 0,
        }
    }

    /// Set the artificial latency applied by the in-memory stores.
    #[must_use]
    pub fn with_store_latency(mut self, latency: StoreLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Set the demo dataset seed name and generated client count.
    #[must_use]
    pub fn with_demo_seed(mut self, seed_name: impl Into<String>, client_count: usize) -> Self {
        self.seed_name = seed_name.into();
        self.client_count = client_count;
        self
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
