mod exchange;
mod report;
mod shared;

pub use exchange::Exchange;
pub use report::{DeliveryPolicy, PublishReport};
pub use shared::SharedExchange;
