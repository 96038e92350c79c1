use chrono::Utc;
use quotecast_core::{Price, Subscriber, Timestamp};

use crate::error::SinkResult;
use crate::sink::NotificationSink;

/// Outcome of a single `notify` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// A notification was written to the sink
    Delivered,
    /// The subscriber's topic filter excluded the topic; nothing was written
    Filtered,
}

/// Capability shared by every subscriber kind: being told about a price change
///
/// The filter check lives in one place for all kinds; only the message
/// wording differs between them.
pub trait Notify {
    /// Notify with an explicit event time, shared by every delivery of one publish
    fn notify_at(
        &self,
        topic: &str,
        price: Price,
        timestamp: Timestamp,
        sink: &dyn NotificationSink,
    ) -> SinkResult<Delivery>;

    fn notify(&self, topic: &str, price: Price, sink: &dyn NotificationSink)
    -> SinkResult<Delivery> {
        self.notify_at(topic, price, Utc::now(), sink)
    }
}

impl Notify for Subscriber {
    fn notify_at(
        &self,
        topic: &str,
        price: Price,
        timestamp: Timestamp,
        sink: &dyn NotificationSink,
    ) -> SinkResult<Delivery> {
        match self.notification_at(topic, price, timestamp) {
            Some(notification) => {
                sink.deliver(&notification)?;
                Ok(Delivery::Delivered)
            }
            None => Ok(Delivery::Filtered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinkError;
    use quotecast_core::Notification;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct VecSink(Mutex<Vec<String>>);

    impl NotificationSink for VecSink {
        fn deliver(&self, notification: &Notification) -> SinkResult<()> {
            self.0.lock().unwrap().push(notification.message());
            Ok(())
        }
    }

    struct BrokenSink;

    impl NotificationSink for BrokenSink {
        fn deliver(&self, _: &Notification) -> SinkResult<()> {
            Err(SinkError::Rejected("closed".to_string()))
        }
    }

    // Ensure the sink trait is object-safe
    fn _assert_sink_object_safe(_: &dyn NotificationSink) {}

    #[test]
    fn test_filtered_notify_writes_nothing() {
        let sink = VecSink::default();
        let sub = Subscriber::investor("Oleksandr", Some("Google")).unwrap();

        let outcome = sub.notify("Apple", dec!(145.50), &sink).unwrap();
        assert_eq!(outcome, Delivery::Filtered);
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_matching_notify_writes_once() {
        let sink = VecSink::default();
        let sub = Subscriber::investor("Oleksandr", Some("Google")).unwrap();

        let outcome = sub.notify("Google", dec!(2730.20), &sink).unwrap();
        assert_eq!(outcome, Delivery::Delivered);

        let messages = sink.0.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Google"));
        assert!(messages[0].contains("2730.20"));
    }

    #[test]
    fn test_notify_at_uses_given_timestamp() {
        let sink = VecSink::default();
        let sub = Subscriber::broker("TradeMax", None).unwrap();
        let at = Utc::now() - chrono::Duration::seconds(30);

        struct StampSink(Mutex<Vec<Timestamp>>);
        impl NotificationSink for StampSink {
            fn deliver(&self, notification: &Notification) -> SinkResult<()> {
                self.0.lock().unwrap().push(notification.timestamp);
                Ok(())
            }
        }

        let stamps = StampSink(Mutex::new(Vec::new()));
        sub.notify_at("Tesla", dec!(700.00), at, &stamps).unwrap();
        assert_eq!(*stamps.0.lock().unwrap(), vec![at]);

        // Filtered calls stay silent with an explicit timestamp too
        let filtered = Subscriber::investor("Oleksandr", Some("Google")).unwrap();
        assert_eq!(
            filtered.notify_at("Tesla", dec!(700.00), at, &sink).unwrap(),
            Delivery::Filtered
        );
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sink_failure_is_propagated() {
        let sub = Subscriber::broker("TradeMax", None).unwrap();
        let err = sub.notify("Tesla", dec!(700.00), &BrokenSink).unwrap_err();
        assert!(matches!(err, SinkError::Rejected(_)));

        // Filtered calls never touch the sink
        let filtered = Subscriber::broker("TradeMax", Some("Apple")).unwrap();
        assert_eq!(
            filtered.notify("Tesla", dec!(700.00), &BrokenSink).unwrap(),
            Delivery::Filtered
        );
    }
}
