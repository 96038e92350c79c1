use quotecast_core::Notification;

use crate::error::SinkResult;

/// Port for the output side of a notification
///
/// Implementations decide where a notification goes:
/// - stdout or any `io::Write` for the console runner
/// - an in-memory log for tests
pub trait NotificationSink: Send + Sync {
    /// Write one notification
    fn deliver(&self, notification: &Notification) -> SinkResult<()>;

    /// Get the sink's name for logging
    fn name(&self) -> &str {
        "NotificationSink"
    }
}
