//! Notification channel.
//!
//! Screens raise transient, user-facing alerts through a [`Notifier`] they are
//! handed at construction. The channel is write-only: the producer never reads
//! a notification back, and the application shell decides how long each one
//! stays on screen.

use tokio::sync::mpsc;
use tracing::trace;

/// How an alert should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient alert for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// `false` asks the owner to hide whatever is currently shown
    pub show: bool,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    /// A visible notification
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            show: true,
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// A request to hide the current notification
    pub fn hide() -> Self {
        Self {
            show: false,
            severity: Severity::Info,
            message: String::new(),
        }
    }
}

/// Write-only sink for notifications. Fire-and-forget: no acknowledgement.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier backed by an unbounded channel drained by the app shell
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

/// Receiving half owned by whoever renders notifications
#[derive(Debug)]
pub struct NotificationReceiver {
    receiver: mpsc::UnboundedReceiver<Notification>,
}

/// Create a connected notifier/receiver pair
pub fn channel() -> (ChannelNotifier, NotificationReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ChannelNotifier { sender }, NotificationReceiver { receiver })
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        trace!(severity = ?notification.severity, "notification raised");
        // A closed receiver means the shell is shutting down; nothing to show.
        let _ = self.sender.send(notification);
    }
}

impl NotificationReceiver {
    /// Take every notification queued since the last call, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut drained = Vec::new();
        while let Ok(notification) = self.receiver.try_recv() {
            drained.push(notification);
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_delivers_in_order() {
        let (notifier, mut receiver) = channel();
        notifier.notify(Notification::info("first"));
        notifier.notify(Notification::error("second"));

        let drained = receiver.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].severity, Severity::Error);
        assert!(receiver.drain().is_empty());
    }

    #[test]
    fn test_notify_after_receiver_dropped_is_silent() {
        let (notifier, receiver) = channel();
        drop(receiver);
        notifier.notify(Notification::info("nobody listening"));
    }

    #[test]
    fn test_hide_notification() {
        let hide = Notification::hide();
        assert!(!hide.show);
        assert!(hide.message.is_empty());
    }
}
