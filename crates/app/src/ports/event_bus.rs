//! Event bus port: publish/subscribe for settings events.

use std::future::Future;

use alarmhub_domain::error::AlarmHubError;
use alarmhub_domain::event::Event;

/// Publishes settings events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), AlarmHubError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), AlarmHubError>> + Send {
        (**self).publish(event)
    }
}
