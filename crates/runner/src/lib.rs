//! Quotecast Runner - scripted price-change demo
//!
//! Drives the notification engine the way an interactive front end would:
//!
//! - **Bootstrap**: build the exchange from config and attach the roster
//! - **Scenario**: replay price changes and detaches, collecting reports
//!
//! ## Flow
//!
//! ```text
//!   ExchangeConfig ──► Bootstrap ──► Exchange ◄── Scenario steps
//!                                       │
//!                                       ▼ notify (subscription order)
//!                                NotificationSink (stdout)
//! ```

pub mod bootstrap;
pub mod scenario;

// Re-export main types
pub use bootstrap::{Bootstrap, BootstrapConfig, SubscriberSpec};
pub use scenario::{Scenario, ScenarioReport, ScenarioStep};
