//! Driving port for login and signup use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate or register without knowing the backing store. Handler tests
//! stay deterministic by substituting a zero-latency adapter.

use async_trait::async_trait;

use crate::domain::auth::{LoginCredentials, SignupRequest};
use crate::domain::{Error, User};

/// Domain use-case port for session identity.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve credentials against the directory and return the account.
    ///
    /// Failure must leave every store untouched.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Fabricate and persist a new account, returning it ready for a
    /// session. No uniqueness is enforced.
    async fn register(&self, request: SignupRequest) -> Result<User, Error>;
}
