//! Server configuration loaded via OrthoConfig.
//!
//! Every knob can come from the environment (`BILLBOOK_*`), a config file,
//! or CLI flags, with the defaults below as the fallback.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_KEY_PATH: &str = "/var/run/secrets/session_key";
const DEFAULT_SEED_NAME: &str = "amber-ledger";
const DEFAULT_CLIENT_COUNT: usize = 8;
const DEFAULT_STORE_LATENCY_MS: u64 = 500;

/// Configuration values controlling the HTTP server and demo seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BILLBOOK")]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// Allow an ephemeral, generated session key outside debug builds.
    #[ortho_config(default = false)]
    pub session_allow_ephemeral: bool,
    /// Set the `Secure` flag on the session cookie.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// Artificial store latency in milliseconds.
    pub store_latency_ms: Option<u64>,
    /// Seed name for deterministic demo client generation.
    pub demo_seed_name: Option<String>,
    /// Number of generated demo client accounts.
    pub demo_client_count: Option<usize>,
}

impl ServerSettings {
    /// Bind address, falling back to the default.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Session key file path, falling back to the default.
    #[must_use]
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_PATH))
    }

    /// Store latency in milliseconds, falling back to the default.
    #[must_use]
    pub fn store_latency_ms(&self) -> u64 {
        self.store_latency_ms.unwrap_or(DEFAULT_STORE_LATENCY_MS)
    }

    /// Demo seed name, falling back to the default.
    #[must_use]
    pub fn demo_seed_name(&self) -> &str {
        self.demo_seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Demo client count, falling back to the default.
    #[must_use]
    pub fn demo_client_count(&self) -> usize {
        self.demo_client_count.unwrap_or(DEFAULT_CLIENT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("BILLBOOK_BIND_ADDR", None::<String>),
            ("BILLBOOK_SESSION_KEY_FILE", None::<String>),
            ("BILLBOOK_COOKIE_SECURE", None::<String>),
            ("BILLBOOK_STORE_LATENCY_MS", None::<String>),
            ("BILLBOOK_DEMO_SEED_NAME", None::<String>),
            ("BILLBOOK_DEMO_CLIENT_COUNT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.session_key_file(), PathBuf::from(DEFAULT_KEY_PATH));
        assert!(settings.cookie_secure);
        assert!(!settings.session_allow_ephemeral);
        assert_eq!(settings.store_latency_ms(), DEFAULT_STORE_LATENCY_MS);
        assert_eq!(settings.demo_seed_name(), DEFAULT_SEED_NAME);
        assert_eq!(settings.demo_client_count(), DEFAULT_CLIENT_COUNT);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BILLBOOK_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("BILLBOOK_SESSION_KEY_FILE", Some("/tmp/key".to_owned())),
            ("BILLBOOK_COOKIE_SECURE", Some("false".to_owned())),
            ("BILLBOOK_STORE_LATENCY_MS", Some("0".to_owned())),
            ("BILLBOOK_DEMO_SEED_NAME", Some("rainbow-fox".to_owned())),
            ("BILLBOOK_DEMO_CLIENT_COUNT", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090");
        assert_eq!(settings.session_key_file(), PathBuf::from("/tmp/key"));
        assert!(!settings.cookie_secure);
        assert_eq!(settings.store_latency_ms(), 0);
        assert_eq!(settings.demo_seed_name(), "rainbow-fox");
        assert_eq!(settings.demo_client_count(), 3);
    }
}
