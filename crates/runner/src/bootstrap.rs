//! Bootstrap - exchange creation and subscriber registration
//!
//! Builds the exchange from configuration and attaches the initial roster
//! in order. Roster entries that do not fit are reported, not fatal.

use log::{info, warn};
use quotecast_core::{Subscriber, SubscriberId, SubscriberKind};
use quotecast_exchange::{Exchange, ExchangeConfig, ExchangeError, NotificationSink, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Subscriber to create at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberSpec {
    pub display_name: String,
    pub kind: SubscriberKind,
    /// Only notify for this topic
    #[serde(default)]
    pub topic_filter: Option<String>,
}

impl SubscriberSpec {
    pub fn investor(display_name: &str, topic_filter: Option<&str>) -> Self {
        Self {
            display_name: display_name.to_string(),
            kind: SubscriberKind::Investor,
            topic_filter: topic_filter.map(str::to_string),
        }
    }

    pub fn broker(display_name: &str, topic_filter: Option<&str>) -> Self {
        Self {
            display_name: display_name.to_string(),
            kind: SubscriberKind::Broker,
            topic_filter: topic_filter.map(str::to_string),
        }
    }

    /// Validate and build the subscriber entity
    pub fn build(&self) -> Result<Subscriber> {
        Ok(Subscriber::new(
            self.kind,
            self.display_name.as_str(),
            self.topic_filter.as_deref(),
        )?)
    }
}

/// Bootstrap configuration
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Exchange settings
    pub exchange: ExchangeConfig,
    /// Subscribers to attach, in delivery order
    pub subscribers: Vec<SubscriberSpec>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            exchange: ExchangeConfig::default(),
            subscribers: vec![
                SubscriberSpec::investor("Oleksandr", Some("Google")),
                SubscriberSpec::investor("Maria", None),
                SubscriberSpec::broker("TradeMax", None),
            ],
        }
    }
}

impl BootstrapConfig {
    /// Default roster with a custom exchange config
    pub fn with_exchange(exchange: ExchangeConfig) -> Self {
        Self {
            exchange,
            ..Default::default()
        }
    }
}

/// Exchange plus the outcome of registering the roster
pub struct Bootstrap {
    /// The exchange instance
    pub exchange: Exchange,
    /// Ids of the attached subscribers, in delivery order
    pub attached: Vec<SubscriberId>,
    /// Names of roster entries rejected because the exchange was full
    pub rejected: Vec<String>,
}

impl Bootstrap {
    /// Create the exchange and attach every roster entry that fits
    pub fn with_config(config: BootstrapConfig, sink: Arc<dyn NotificationSink>) -> Result<Self> {
        let mut exchange = Exchange::from_config(&config.exchange, sink)?;
        let mut attached = Vec::new();
        let mut rejected = Vec::new();

        for spec in &config.subscribers {
            let subscriber = spec.build()?;

            match exchange.attach(subscriber) {
                Ok(id) => {
                    info!(
                        "Registered {} '{}' with id {}",
                        spec.kind, spec.display_name, id
                    );
                    attached.push(id);
                }
                Err(ExchangeError::CapacityExceeded { capacity }) => {
                    warn!(
                        "Subscriber limit of {} reached, skipping '{}'",
                        capacity, spec.display_name
                    );
                    rejected.push(spec.display_name.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Self {
            exchange,
            attached,
            rejected,
        })
    }
}
