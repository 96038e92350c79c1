//! Quotecast Ports
//!
//! Port definitions (traits) for the Quotecast price notifier.
//! These define the boundaries between the notification engine and
//! wherever notifications end up (console, files, memory).

mod error;
mod notify;
mod sink;

pub use error::{DeliveryFailure, SinkError, SinkResult};
pub use notify::{Delivery, Notify};
pub use sink::NotificationSink;
