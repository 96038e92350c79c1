use parking_lot::Mutex;
use quotecast_core::Notification;
use quotecast_ports::{NotificationSink, SinkError, SinkResult};
use std::collections::HashSet;

/// In-memory sink that keeps every delivered notification in order
///
/// Deliveries for names registered with `fail_for` are rejected instead of
/// recorded, which lets callers exercise the delivery failure paths.
#[derive(Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<Notification>>,
    failing: Mutex<HashSet<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every future delivery addressed to `display_name`
    pub fn fail_for(&self, display_name: &str) {
        self.failing.lock().insert(display_name.to_string());
    }

    /// Stop rejecting deliveries addressed to `display_name`
    pub fn recover(&self, display_name: &str) {
        self.failing.lock().remove(display_name);
    }

    /// Delivered notifications, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.delivered.lock().clone()
    }

    /// Rendered messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.delivered.lock().iter().map(Notification::message).collect()
    }

    /// Display names of the recipients, oldest first
    pub fn recipients(&self) -> Vec<String> {
        self.delivered
            .lock()
            .iter()
            .map(|n| n.display_name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.lock().is_empty()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.delivered.lock().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn deliver(&self, notification: &Notification) -> SinkResult<()> {
        if self.failing.lock().contains(&notification.display_name) {
            return Err(SinkError::Rejected(format!(
                "recipient {} is marked as failing",
                notification.display_name
            )));
        }

        self.delivered.lock().push(notification.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
