use serde::{Deserialize, Serialize};

use super::{SubscriberId, SubscriberKind};
use crate::values::{Price, Timestamp, Topic};

/// One delivery of a price change to one subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub subscriber_id: SubscriberId,
    pub display_name: String,
    pub kind: SubscriberKind,
    pub topic: Topic,
    pub price: Price,
    pub timestamp: Timestamp,
}

impl Notification {
    /// Human-readable text for this notification
    pub fn message(&self) -> String {
        self.kind.render(&self.display_name, &self.topic, self.price)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
