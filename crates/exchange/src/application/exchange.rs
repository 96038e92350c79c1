use chrono::Utc;
use log::{debug, info, warn};
use quotecast_core::{Price, Subscriber, SubscriberId, Timestamp, Topic, ValidationError};
use quotecast_ports::{Delivery, DeliveryFailure, NotificationSink, Notify};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::{DeliveryPolicy, PublishReport};
use crate::error::{ExchangeError, Result};
use crate::infrastructure::ExchangeConfig;

/// Bounded subscriber registry that fans price changes out to its subscribers
pub struct Exchange {
    /// Attached subscribers; position is delivery order
    subscribers: Vec<Subscriber>,

    /// Maximum number of attached subscribers, fixed at construction
    capacity: usize,

    /// Last published topic (empty until the first publish)
    last_topic: Topic,

    /// Last published price (zero until the first publish)
    last_price: Price,

    /// When the last publish happened
    last_updated: Option<Timestamp>,

    /// Where notifications are written
    sink: Arc<dyn NotificationSink>,

    /// Behaviour when a notification fails
    policy: DeliveryPolicy,
}

impl Exchange {
    /// Create a new exchange with best-effort delivery
    pub fn new(capacity: usize, sink: Arc<dyn NotificationSink>) -> Result<Self> {
        Self::with_policy(capacity, sink, DeliveryPolicy::default())
    }

    /// Create a new exchange with an explicit delivery policy
    pub fn with_policy(
        capacity: usize,
        sink: Arc<dyn NotificationSink>,
        policy: DeliveryPolicy,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(ValidationError::NonPositiveCapacity.into());
        }

        info!(
            "Creating exchange: capacity={}, policy={:?}, sink={}",
            capacity,
            policy,
            sink.name()
        );

        Ok(Self {
            subscribers: Vec::new(),
            capacity,
            last_topic: Topic::new(),
            last_price: Decimal::ZERO,
            last_updated: None,
            sink,
            policy,
        })
    }

    /// Create an exchange from loaded configuration
    pub fn from_config(config: &ExchangeConfig, sink: Arc<dyn NotificationSink>) -> Result<Self> {
        Self::with_policy(config.capacity, sink, config.delivery_policy)
    }

    // ============ Subscription Management ============

    /// Attach a subscriber at the end of the delivery order
    pub fn attach(&mut self, subscriber: Subscriber) -> Result<SubscriberId> {
        let id = subscriber.id();

        if self.contains(id) {
            warn!(
                "Rejecting duplicate attach: id={}, name={}",
                id,
                subscriber.display_name()
            );
            return Err(ExchangeError::DuplicateSubscriber(id));
        }

        if self.is_full() {
            warn!(
                "Subscriber limit reached: capacity={}, rejected={}",
                self.capacity,
                subscriber.display_name()
            );
            return Err(ExchangeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        info!(
            "Attaching subscriber: id={}, name={}, kind={}, filter={:?}",
            id,
            subscriber.display_name(),
            subscriber.kind(),
            subscriber.topic_filter()
        );
        self.subscribers.push(subscriber);

        Ok(id)
    }

    /// Detach a subscriber by id and hand it back to the caller
    pub fn detach(&mut self, id: SubscriberId) -> Result<Subscriber> {
        let position = self
            .subscribers
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| ExchangeError::NotFound(id.to_string()))?;

        let subscriber = self.subscribers.remove(position);
        info!(
            "Detached subscriber: id={}, name={}",
            id,
            subscriber.display_name()
        );

        Ok(subscriber)
    }

    /// Detach the first subscriber (in delivery order) with the given name
    pub fn detach_by_name(&mut self, display_name: &str) -> Result<Subscriber> {
        let id = self
            .find_by_name(display_name)
            .map(Subscriber::id)
            .ok_or_else(|| ExchangeError::NotFound(display_name.to_string()))?;

        self.detach(id)
    }

    // ============ Publishing ============

    /// Record a price change and notify every attached subscriber in order
    ///
    /// Subscribers apply their own topic filters; the exchange calls all of
    /// them. State is updated before fan-out starts, so a delivery failure
    /// never rolls back `last_topic`/`last_price`.
    pub fn publish(&mut self, topic: &str, price: Price) -> Result<PublishReport> {
        self.last_topic = topic.to_string();
        self.last_price = price;
        let timestamp = Utc::now();
        self.last_updated = Some(timestamp);

        debug!(
            "Publishing: topic={}, price={}, subscribers={}",
            topic,
            price,
            self.subscribers.len()
        );

        let mut report = PublishReport::new(topic, price);

        for subscriber in &self.subscribers {
            match subscriber.notify_at(topic, price, timestamp, self.sink.as_ref()) {
                Ok(Delivery::Delivered) => report.delivered += 1,
                Ok(Delivery::Filtered) => report.filtered += 1,
                Err(e) => {
                    let failure =
                        DeliveryFailure::new(subscriber.id(), subscriber.display_name(), &e);
                    warn!("{}", failure);

                    if self.policy == DeliveryPolicy::FailFast {
                        return Err(failure.into());
                    }
                    report.failures.push(failure);
                }
            }
        }

        debug!(
            "Published: topic={}, delivered={}, filtered={}, failed={}",
            topic,
            report.delivered,
            report.filtered,
            report.failures.len()
        );

        Ok(report)
    }

    // ============ Queries ============

    /// Attached subscribers in delivery order
    pub fn list(&self) -> &[Subscriber] {
        &self.subscribers
    }

    pub fn contains(&self, id: SubscriberId) -> bool {
        self.subscribers.iter().any(|s| s.id() == id)
    }

    pub fn find_by_name(&self, display_name: &str) -> Option<&Subscriber> {
        self.subscribers
            .iter()
            .find(|s| s.display_name() == display_name)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.subscribers.len() >= self.capacity
    }

    pub fn last_topic(&self) -> &str {
        &self.last_topic
    }

    pub fn last_price(&self) -> Price {
        self.last_price
    }

    pub fn last_updated(&self) -> Option<Timestamp> {
        self.last_updated
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }
}

impl std::fmt::Debug for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exchange")
            .field("subscribers", &self.subscribers)
            .field("capacity", &self.capacity)
            .field("last_topic", &self.last_topic)
            .field("last_price", &self.last_price)
            .field("sink", &self.sink.name())
            .field("policy", &self.policy)
            .finish()
    }
}
