//! Transient user notifications and the capped feed holding them.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum number of notifications retained per feed.
pub const FEED_CAPACITY: usize = 50;

/// Severity of a notification, driving its presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for a new notification; id, read flag, and timestamp are assigned
/// by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub link: Option<String>,
}

impl NotificationDraft {
    /// Convenience constructor without a link.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            link: None,
        }
    }
}

/// Append-only ring buffer of notifications, newest first.
///
/// ## Invariants
/// - Never holds more than [`FEED_CAPACITY`] entries; pushing beyond the cap
///   evicts the oldest entry.
/// - Entries keep their insertion order; `mark_read` flips a flag without
///   reordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
}

impl NotificationFeed {
    /// Create an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a notification, evicting the oldest entry beyond the cap.
    ///
    /// Returns the stored entry, id and timestamp assigned.
    pub fn push(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: draft.title,
            message: draft.message,
            severity: draft.severity,
            read: false,
            link: draft.link,
            created_at: now,
        };
        self.entries.push_front(notification.clone());
        self.entries.truncate(FEED_CAPACITY);
        notification
    }

    /// Mark one notification read. Idempotent; returns whether the id exists.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
