use quotecast_core::{SubscriberId, ValidationError};
use quotecast_ports::DeliveryFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Subscriber limit reached: capacity is {capacity}")]
    CapacityExceeded { capacity: usize },

    #[error("Subscriber not found: {0}")]
    NotFound(String),

    #[error("Subscriber already attached: {0}")]
    DuplicateSubscriber(SubscriberId),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryFailure),
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
