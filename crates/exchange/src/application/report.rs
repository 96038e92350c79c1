use quotecast_core::{Price, Topic};
use quotecast_ports::DeliveryFailure;
use serde::{Deserialize, Serialize};

/// What publish does when a subscriber's notification fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Keep delivering to the remaining subscribers and report every failure
    #[default]
    BestEffort,
    /// Stop at the first failure and return it as an error
    FailFast,
}

/// Summary of one publish call
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    pub topic: Topic,
    pub price: Price,
    /// Subscribers that received a notification
    pub delivered: usize,
    /// Subscribers whose topic filter excluded this topic
    pub filtered: usize,
    /// Per-subscriber failures, in subscription order
    pub failures: Vec<DeliveryFailure>,
}

impl PublishReport {
    pub(crate) fn new(topic: &str, price: Price) -> Self {
        Self {
            topic: topic.to_string(),
            price,
            delivered: 0,
            filtered: 0,
            failures: Vec::new(),
        }
    }

    /// Returns true if every notify call succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of subscribers that were called
    pub fn attempted(&self) -> usize {
        self.delivered + self.filtered + self.failures.len()
    }
}
