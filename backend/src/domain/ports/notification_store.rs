//! Driven port for per-user notification feeds.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::{Notification, NotificationDraft};
use crate::domain::{Error, UserId};

/// Store of capped, per-user notification feeds.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Prepend a notification to the user's feed, evicting beyond the cap.
    async fn push(&self, user: UserId, draft: NotificationDraft) -> Result<Notification, Error>;

    /// The user's feed, newest first.
    async fn list(&self, user: UserId) -> Result<Vec<Notification>, Error>;

    /// Mark one notification read. Idempotent.
    ///
    /// # Errors
    /// `not_found` when the id is not in the user's feed.
    async fn mark_read(&self, user: UserId, id: Uuid) -> Result<(), Error>;

    /// Drop every notification in the user's feed.
    async fn clear(&self, user: UserId) -> Result<(), Error>;
}
