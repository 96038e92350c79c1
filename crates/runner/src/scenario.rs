//! Scenario - scripted sequence of price changes and detaches

use log::{info, warn};
use quotecast_core::Price;
use quotecast_exchange::{Exchange, ExchangeError, PublishReport, Result};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One action replayed against the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Publish a new price for a topic
    Publish { topic: String, price: Price },
    /// Detach the first subscriber with this name
    Detach { display_name: String },
}

impl ScenarioStep {
    pub fn publish(topic: &str, price: Price) -> Self {
        ScenarioStep::Publish {
            topic: topic.to_string(),
            price,
        }
    }

    pub fn detach(display_name: &str) -> Self {
        ScenarioStep::Detach {
            display_name: display_name.to_string(),
        }
    }
}

/// Ordered list of steps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

/// What happened while replaying a scenario
#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    /// One report per publish step, in order
    pub publishes: Vec<PublishReport>,
    /// Names that were detached
    pub detached: Vec<String>,
    /// Names a detach step could not find
    pub missing: Vec<String>,
}

impl ScenarioReport {
    /// Total notifications written across all publishes
    pub fn total_delivered(&self) -> usize {
        self.publishes.iter().map(|r| r.delivered).sum()
    }

    /// Total failed deliveries across all publishes
    pub fn total_failures(&self) -> usize {
        self.publishes.iter().map(|r| r.failures.len()).sum()
    }
}

impl Scenario {
    pub fn new(steps: Vec<ScenarioStep>) -> Self {
        Self { steps }
    }

    /// Parse a scenario from JSON, e.g.
    /// `{"steps": [{"action": "publish", "topic": "Apple", "price": "145.50"}]}`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Stock price walk used by the console demo
    pub fn demo() -> Self {
        Self::new(vec![
            ScenarioStep::publish("Apple", dec!(145.50)),
            ScenarioStep::publish("Google", dec!(2730.20)),
            ScenarioStep::publish("Microsoft", dec!(310.00)),
            ScenarioStep::detach("Maria"),
            ScenarioStep::publish("Tesla", dec!(700.00)),
        ])
    }

    /// Replay every step in order
    ///
    /// A detach of an unknown name is recorded and skipped. Delivery
    /// failures follow the exchange's policy.
    pub fn run(&self, exchange: &mut Exchange) -> Result<ScenarioReport> {
        let mut report = ScenarioReport::default();

        for step in &self.steps {
            match step {
                ScenarioStep::Publish { topic, price } => {
                    let published = exchange.publish(topic, *price)?;
                    info!(
                        "{} @ {}: delivered={}, filtered={}, failed={}",
                        topic,
                        price,
                        published.delivered,
                        published.filtered,
                        published.failures.len()
                    );
                    report.publishes.push(published);
                }
                ScenarioStep::Detach { display_name } => {
                    match exchange.detach_by_name(display_name) {
                        Ok(subscriber) => {
                            info!("Unsubscribed {}", subscriber.display_name());
                            report.detached.push(display_name.clone());
                        }
                        Err(ExchangeError::NotFound(_)) => {
                            warn!("Subscriber not found: {}", display_name);
                            report.missing.push(display_name.clone());
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        Ok(report)
    }
}
