//! Notification jobs handed to the background queue.

use serde::{Deserialize, Serialize};

use crate::config::NOTIFICATION_KIND_WELCOME;

/// Kinds of notification a user can be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Welcome,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Welcome => write!(f, "{}", NOTIFICATION_KIND_WELCOME),
        }
    }
}

/// Queued notification payload.
///
/// Carries only the user reference; the worker loads the user when it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationJob {
    pub user_id: i64,
    pub kind: NotificationKind,
}

impl NotificationJob {
    pub fn new(user_id: i64, kind: NotificationKind) -> Self {
        Self { user_id, kind }
    }

    /// Welcome notification for a freshly registered user
    pub fn welcome(user_id: i64) -> Self {
        Self::new(user_id, NotificationKind::Welcome)
    }
}
