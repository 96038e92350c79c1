use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Notification;
use crate::error::ValidationError;
use crate::values::{Price, Timestamp, Topic};

/// Unique identifier for a subscriber
///
/// Minted at construction, so two subscribers built from identical fields
/// are still distinct entities.
pub type SubscriberId = Uuid;

/// Kind of subscriber - only selects the notification wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberKind {
    Investor,
    Broker,
}

impl SubscriberKind {
    /// Label used at the start of a notification message
    pub fn label(&self) -> &'static str {
        match self {
            SubscriberKind::Investor => "Investor",
            SubscriberKind::Broker => "Broker",
        }
    }

    /// Render the kind-specific notification text
    pub fn render(&self, display_name: &str, topic: &str, price: Price) -> String {
        match self {
            SubscriberKind::Investor => format!(
                "Investor {} notified: {} changed price to {}",
                display_name, topic, price
            ),
            SubscriberKind::Broker => format!(
                "Broker {} notified: {} now trades at {}",
                display_name, topic, price
            ),
        }
    }
}

impl std::fmt::Display for SubscriberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An entity that receives price-change notifications
#[derive(Debug, Clone)]
pub struct Subscriber {
    id: SubscriberId,
    display_name: String,
    kind: SubscriberKind,
    /// `None` receives every topic
    topic_filter: Option<Topic>,
}

impl Subscriber {
    /// Create a new subscriber
    ///
    /// The name and the filter (when given) are trimmed and must not be empty.
    pub fn new(
        kind: SubscriberKind,
        display_name: impl Into<String>,
        topic_filter: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let topic_filter = match topic_filter {
            Some(topic) => {
                let topic = topic.trim().to_string();
                if topic.is_empty() {
                    return Err(ValidationError::EmptyTopicFilter);
                }
                Some(topic)
            }
            None => None,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            display_name,
            kind,
            topic_filter,
        })
    }

    /// Create an investor, optionally restricted to one topic
    pub fn investor(
        display_name: impl Into<String>,
        topic_filter: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::new(SubscriberKind::Investor, display_name, topic_filter)
    }

    /// Create a broker, optionally restricted to one topic
    pub fn broker(
        display_name: impl Into<String>,
        topic_filter: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::new(SubscriberKind::Broker, display_name, topic_filter)
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> SubscriberKind {
        self.kind
    }

    pub fn topic_filter(&self) -> Option<&str> {
        self.topic_filter.as_deref()
    }

    /// Returns true if this subscriber wants updates for `topic`
    pub fn accepts(&self, topic: &str) -> bool {
        match &self.topic_filter {
            Some(filter) => filter == topic,
            None => true,
        }
    }

    /// Build the notification for a price change, or `None` if filtered out
    pub fn notification(&self, topic: &str, price: Price) -> Option<Notification> {
        self.notification_at(topic, price, chrono::Utc::now())
    }

    /// Same as `notification` with an explicit timestamp
    pub fn notification_at(
        &self,
        topic: &str,
        price: Price,
        timestamp: Timestamp,
    ) -> Option<Notification> {
        if !self.accepts(topic) {
            return None;
        }

        Some(Notification {
            subscriber_id: self.id,
            display_name: self.display_name.clone(),
            kind: self.kind,
            topic: topic.to_string(),
            price,
            timestamp,
        })
    }

    /// Returns true if both values are handles to the same subscriber
    pub fn same_as(&self, other: &Subscriber) -> bool {
        self.id == other.id
    }
}
