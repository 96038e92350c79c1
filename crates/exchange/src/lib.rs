// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;

// Cross-cutting concerns
pub mod error;

// Re-export main types for convenience
pub use application::{DeliveryPolicy, Exchange, PublishReport, SharedExchange};
pub use error::{ExchangeError, Result};
pub use infrastructure::{
    ConfigError, ConsoleSink, ExchangeConfig, RecordingSink, SinkFormat, WriterSink,
};

// Domain types callers need to drive the exchange
pub use quotecast_core::{Notification, Price, Subscriber, SubscriberId, SubscriberKind};
pub use quotecast_ports::{DeliveryFailure, NotificationSink, Notify};
