use quotecast_core::SubscriberId;
use thiserror::Error;

/// Errors raised by a notification sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Notification rejected: {0}")]
    Rejected(String),
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// A notification that could not be delivered to one subscriber
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Delivery to {display_name} ({subscriber_id}) failed: {reason}")]
pub struct DeliveryFailure {
    pub subscriber_id: SubscriberId,
    pub display_name: String,
    pub reason: String,
}

impl DeliveryFailure {
    pub fn new(subscriber_id: SubscriberId, display_name: &str, err: &SinkError) -> Self {
        Self {
            subscriber_id,
            display_name: display_name.to_string(),
            reason: err.to_string(),
        }
    }
}
