use thiserror::Error;

/// Rejected constructor input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Subscriber display name must not be empty")]
    EmptyName,

    #[error("Topic filter must not be empty (use no filter to receive all topics)")]
    EmptyTopicFilter,

    #[error("Exchange capacity must be positive")]
    NonPositiveCapacity,

    #[error("Price must be finite, got {0}")]
    NonFinitePrice(f64),
}
