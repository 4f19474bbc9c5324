//! Backend entry-point: configuration, session key handling, server run.

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use sha2::{Digest, Sha256};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::memory::StoreLatency;
use backend::server::{ServerConfig, ServerSettings, create_server};

/// Short SHA-256 fingerprint of the session key material; logged at
/// startup so deployments can verify which key is live without ever
/// logging the key itself.
fn key_fingerprint(material: &[u8]) -> String {
    let digest = Sha256::digest(material);
    let mut fingerprint = hex::encode(digest);
    fingerprint.truncate(16);
    fingerprint
}

fn load_session_key(settings: &ServerSettings) -> std::io::Result<Key> {
    let key_path = settings.session_key_file();
    match std::fs::read(&key_path) {
        Ok(bytes) => {
            info!(fingerprint = %key_fingerprint(&bytes), "session key loaded");
            Ok(Key::derive_from(&bytes))
        }
        Err(e) => {
            if cfg!(debug_assertions) || settings.session_allow_ephemeral {
                warn!(path = %key_path.display(), error = %e, "using temporary session key (dev only)");
                let key = Key::generate();
                info!(fingerprint = %key_fingerprint(key.master()), "ephemeral session key generated");
                Ok(key)
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {}: {e}",
                    key_path.display()
                )))
            }
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("configuration failed to load: {e}")))?;
    let bind_addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;
    let key = load_session_key(&settings)?;

    let config = ServerConfig::new(key, settings.cookie_secure, SameSite::Lax, bind_addr)
        .with_store_latency(StoreLatency::from_millis(settings.store_latency_ms()))
        .with_demo_seed(settings.demo_seed_name(), settings.demo_client_count());

    let health_state = web::Data::new(HealthState::new());
    info!(
        addr = %config.bind_addr(),
        seed = settings.demo_seed_name(),
        "starting billbook backend"
    );
    let server = create_server(health_state, config).await?;
    server.await
}
