// Notification port for user-facing feedback.
//
// Purpose
// - Let use-case handlers surface success or failure without knowing how
//   the surrounding application renders it.
//
// Boundaries
// - Stores never publish notifications themselves; only handlers do.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub trait NotificationPublisher: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Publisher that only writes to the log stream. Useful as a default when
/// no toast surface is wired in.
#[derive(Debug, Default, Clone)]
pub struct TracingPublisher;

impl NotificationPublisher for TracingPublisher {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(title = %notification.title, message = %notification.message, "notification");
            }
            NotificationKind::Error => {
                tracing::warn!(title = %notification.title, message = %notification.message, "notification");
            }
        }
    }
}

/// Test double capturing everything published.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    published: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingPublisher {
    pub fn published(&self) -> Vec<Notification> {
        self.published.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl NotificationPublisher for RecordingPublisher {
    fn notify(&self, notification: Notification) {
        self.published.lock().unwrap().push(notification);
    }
}
