//! In-memory per-user notification feeds.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::notification::{Notification, NotificationDraft, NotificationFeed};
use crate::domain::ports::NotificationStore;
use crate::domain::{Error, UserId};

use super::StoreLatency;

/// Notification store keyed by user id.
///
/// Feeds are created lazily on first push; listing an unknown user yields
/// an empty feed rather than an error.
pub struct InMemoryNotificationStore {
    latency: StoreLatency,
    feeds: RwLock<HashMap<UserId, NotificationFeed>>,
}

impl InMemoryNotificationStore {
    /// Store with no feeds yet.
    #[must_use]
    pub fn new(latency: StoreLatency) -> Self {
        Self {
            latency,
            feeds: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn push(&self, user: UserId, draft: NotificationDraft) -> Result<Notification, Error> {
        self.latency.pause().await;
        let mut feeds = self.feeds.write().await;
        let feed = feeds.entry(user).or_default();
        Ok(feed.push(draft, Utc::now()))
    }

    async fn list(&self, user: UserId) -> Result<Vec<Notification>, Error> {
        self.latency.pause().await;
        let feeds = self.feeds.read().await;
        Ok(feeds.get(&user).map(NotificationFeed::entries).unwrap_or_default())
    }

    async fn mark_read(&self, user: UserId, id: Uuid) -> Result<(), Error> {
        self.latency.pause().await;
        let mut feeds = self.feeds.write().await;
        let marked = feeds.get_mut(&user).is_some_and(|feed| feed.mark_read(id));
        if marked {
            Ok(())
        } else {
            Err(Error::not_found("no such notification"))
        }
    }

    async fn clear(&self, user: UserId) -> Result<(), Error> {
        self.latency.pause().await;
        let mut feeds = self.feeds.write().await;
        if let Some(feed) = feeds.get_mut(&user) {
            feed.clear();
        }
        Ok(())
    }
}
