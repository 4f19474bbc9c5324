//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers deal in domain-friendly operations:
//! persisting a user id at login, reading it back, and purging at logout.
//! The session is authenticated exactly when it stores a user id that
//! resolves against the directory.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::UserRepository;
use crate::domain::{Error, Role, User, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current user id from the session, if present.
    ///
    /// A tampered or malformed id is treated as an absent session rather
    /// than an error.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        match raw {
            Some(raw) => match raw.parse::<UserId>() {
                Ok(id) => Ok(Some(id)),
                Err(error) => {
                    tracing::warn!("invalid user id in session cookie: {error}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Require an authenticated user id or return `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Remove every session entry, ending the authenticated session.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Resolve the session against the directory, if authenticated.
    ///
    /// A session id that no longer resolves (e.g. after a demo reset) is
    /// treated as unauthenticated.
    pub async fn current_user(
        &self,
        users: &dyn UserRepository,
    ) -> Result<Option<User>, Error> {
        match self.user_id()? {
            Some(id) => users.find(id).await,
            None => Ok(None),
        }
    }

    /// Require a session that resolves to a user with one of the allowed
    /// roles.
    ///
    /// # Errors
    /// `unauthorized` without a resolving session; `forbidden` when the
    /// user's role is outside the allow-list.
    pub async fn require_role(
        &self,
        users: &dyn UserRepository,
        allowed: &[Role],
    ) -> Result<User, Error> {
        let user = self
            .current_user(users)
            .await?
            .ok_or_else(|| Error::unauthorized("login required"))?;
        if allowed.contains(&user.role) {
            Ok(user)
        } else {
            Err(Error::forbidden("role not permitted for this resource"))
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
