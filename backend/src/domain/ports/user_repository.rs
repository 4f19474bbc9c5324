//! Driven port for the user directory.

use async_trait::async_trait;

use crate::domain::subscription::Subscription;
use crate::domain::user::{UserProfileUpdate, UserStatus};
use crate::domain::{Error, User, UserId};

/// Directory of user accounts.
///
/// Accounts are never removed; lifecycle changes go through
/// [`UserRepository::update_status`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All accounts, in insertion order.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Look up one account by id.
    async fn find(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Change an account's lifecycle status.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn update_status(&self, id: UserId, status: UserStatus) -> Result<User, Error>;

    /// Apply a profile patch on behalf of the account owner.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn update_profile(&self, id: UserId, patch: UserProfileUpdate) -> Result<User, Error>;

    /// Attach or replace the account's subscription.
    ///
    /// # Errors
    /// `not_found` when the id is unknown.
    async fn attach_subscription(
        &self,
        id: UserId,
        subscription: Subscription,
    ) -> Result<User, Error>;
}
