use parking_lot::Mutex;
use quotecast_core::{Price, Subscriber, SubscriberId};
use std::sync::Arc;

use super::{Exchange, PublishReport};
use crate::error::Result;

/// Thread-safe handle to an `Exchange`
///
/// Every operation holds one lock for its whole duration: a publish never
/// iterates a collection that is being mutated, and the capacity check in
/// attach is atomic with the append.
#[derive(Clone)]
pub struct SharedExchange {
    inner: Arc<Mutex<Exchange>>,
}

impl SharedExchange {
    pub fn new(exchange: Exchange) -> Self {
        Self {
            inner: Arc::new(Mutex::new(exchange)),
        }
    }

    pub fn attach(&self, subscriber: Subscriber) -> Result<SubscriberId> {
        self.inner.lock().attach(subscriber)
    }

    pub fn detach(&self, id: SubscriberId) -> Result<Subscriber> {
        self.inner.lock().detach(id)
    }

    pub fn detach_by_name(&self, display_name: &str) -> Result<Subscriber> {
        self.inner.lock().detach_by_name(display_name)
    }

    pub fn publish(&self, topic: &str, price: Price) -> Result<PublishReport> {
        self.inner.lock().publish(topic, price)
    }

    /// Snapshot of the attached subscribers in delivery order
    pub fn list(&self) -> Vec<Subscriber> {
        self.inner.lock().list().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Last published topic and price
    pub fn last_quote(&self) -> (String, Price) {
        let exchange = self.inner.lock();
        (exchange.last_topic().to_string(), exchange.last_price())
    }

    /// Run a closure with exclusive access to the exchange
    pub fn with<R>(&self, f: impl FnOnce(&mut Exchange) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl From<Exchange> for SharedExchange {
    fn from(exchange: Exchange) -> Self {
        Self::new(exchange)
    }
}
