use tokio::sync::broadcast;

use crate::types::{ColorFormat, ColorState};

/// Everything the converter and copy service announce on the bus.
#[derive(Debug, Clone)]
pub enum Event {
    ColorChanged(ColorState),
    InputRejected(ColorFormat),
    OpacityChanged(f64),
    CopyFeedback { format: ColorFormat, active: bool },
    Shutdown,
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
        match self.sender.send(event) {
            Ok(count) => count,
            Err(_) => {
                tracing::trace!("event dropped: no subscribers");
                0
            }
        }
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HexColor;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::OpacityChanged(0.5));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::OpacityChanged(o) if o == 0.5));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::Shutdown));
        assert!(matches!(e2, Event::Shutdown));
    }

    #[tokio::test]
    async fn cloned_bus_shares_subscribers() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let other = bus.clone();

        other.publish(Event::InputRejected(ColorFormat::Rgb));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::InputRejected(ColorFormat::Rgb)));
    }

    #[tokio::test]
    async fn color_and_copy_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let state = ColorState {
            color: HexColor::new("#ffed24").unwrap(),
            opacity: 1.0,
            valid: true,
        };

        bus.publish(Event::ColorChanged(state.clone()));
        bus.publish(Event::CopyFeedback {
            format: ColorFormat::Hex,
            active: true,
        });

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::ColorChanged(ref s) if *s == state));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(
            e2,
            Event::CopyFeedback {
                format: ColorFormat::Hex,
                active: true
            }
        ));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::Shutdown);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(Event::Shutdown);
        assert_eq!(count, 2);
    }
}
