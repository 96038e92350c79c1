use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::ValidationError;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Name of the item whose price changed (e.g. a stock ticker)
pub type Topic = String;

/// Convert a float coming from an outer layer into a `Price`
///
/// NaN and infinities have no decimal representation and are rejected.
pub fn price_from_f64(value: f64) -> Result<Price, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinitePrice(value));
    }
    Decimal::from_f64(value).ok_or(ValidationError::NonFinitePrice(value))
}
