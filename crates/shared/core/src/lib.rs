//! Quotecast Core Domain
//!
//! Pure domain types for the Quotecast price notifier.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Notification, Subscriber, SubscriberId, SubscriberKind};
pub use error::ValidationError;
pub use values::{Price, Timestamp, Topic, price_from_f64};
