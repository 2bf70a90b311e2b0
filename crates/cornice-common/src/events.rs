use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Panel-level events published by the host and the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigReloaded,
    /// An applet's window finished embedding into its slot. Fired once per
    /// applet, after the proxy's own embedded notification.
    AppletEmbedded(String),
    AppletAdded(String),
    AppletRemoved(String),
    /// A third-party process offered an applet through the gateway.
    RegistrationOffered { uid: String, accepted: bool },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// A cloneable sender for publishing from callbacks.
    pub fn sender(&self) -> broadcast::Sender<Event> {
        self.sender.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::ConfigReloaded);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::ConfigReloaded));
    }

    #[tokio::test]
    async fn applet_lifecycle_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::AppletAdded("clock-1".into()));
        bus.publish(Event::AppletEmbedded("clock-1".into()));
        bus.publish(Event::AppletRemoved("clock-1".into()));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::AppletAdded(ref uid) if uid == "clock-1"));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, Event::AppletEmbedded(ref uid) if uid == "clock-1"));

        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, Event::AppletRemoved(ref uid) if uid == "clock-1"));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        assert!(matches!(rx1.recv().await.unwrap(), Event::Shutdown));
        assert!(matches!(rx2.recv().await.unwrap(), Event::Shutdown));
    }

    #[tokio::test]
    async fn sender_publishes_to_subscribers() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let sender = bus.sender();
        sender
            .send(Event::RegistrationOffered {
                uid: "battery-3".into(),
                accepted: true,
            })
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert!(
            matches!(event, Event::RegistrationOffered { ref uid, accepted } if uid == "battery-3" && accepted)
        );
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(Event::Shutdown), 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.publish(Event::ConfigReloaded), 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
