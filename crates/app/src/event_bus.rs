//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use alarmhub_domain::error::AlarmHubError;
use alarmhub_domain::event::Event;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), AlarmHubError>> + Send {
        // send only fails when nobody listens
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmhub_domain::alarm::AlarmTime;
    use alarmhub_domain::event::EventKind;

    fn alarm_event(hour: u32) -> Event {
        Event::new(EventKind::AlarmSet(AlarmTime::new(hour, 0).unwrap()))
    }

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        let event = alarm_event(6);
        bus.publish(event.clone()).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received, event);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::new(EventKind::CredentialsCleared))
            .await
            .unwrap();

        assert_eq!(rx1.recv().await.unwrap().kind, EventKind::CredentialsCleared);
        assert_eq!(rx2.recv().await.unwrap().kind, EventKind::CredentialsCleared);
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        let result = bus.publish(alarm_event(7)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);
        bus.publish(alarm_event(7)).await.unwrap();

        let mut rx = bus.subscribe();
        bus.publish(alarm_event(8)).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(
            received.kind,
            EventKind::AlarmSet(AlarmTime::new(8, 0).unwrap())
        );
    }
}
