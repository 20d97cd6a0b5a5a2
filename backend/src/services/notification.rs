//! Toast notifications emitted on session transitions
//!
//! Toasts are fire-and-forget: they fan out over a broadcast channel and are
//! dropped when nobody is listening.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 32;

/// Visual style of a toast
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient notification banner
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
            created_at: Utc::now(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Notification side-channel shared by the session store and its consumers
#[derive(Clone)]
pub struct NotificationService {
    sender: broadcast::Sender<Toast>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }

    /// Publish a toast; returns how many subscribers received it
    pub fn notify(&self, toast: Toast) -> usize {
        match toast.variant {
            ToastVariant::Default => tracing::info!(title = %toast.title, "{}", toast.description),
            ToastVariant::Destructive => {
                tracing::warn!(title = %toast.title, "{}", toast.description)
            }
        }
        self.sender.send(toast).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_without_subscribers() {
        let service = NotificationService::new();
        assert_eq!(service.notify(Toast::new("Hello", "World")), 0);
    }

    #[tokio::test]
    async fn test_subscribers_receive_toasts() {
        let service = NotificationService::new();
        let mut rx = service.subscribe();

        assert_eq!(service.notify(Toast::destructive("Sign in failed", "nope")), 1);

        let toast = rx.recv().await.unwrap();
        assert_eq!(toast.title, "Sign in failed");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }
}
