mod notification;
mod subscriber;

pub use notification::Notification;
pub use subscriber::{Subscriber, SubscriberId, SubscriberKind};
