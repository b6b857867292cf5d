//! Thread-safe event bus using mpsc channels.
//!
//! Any thread may publish through an [`EventPublisher`]; the main thread
//! drains via [`EventBus::drain`]. Pure Rust, nothing beyond std.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::ControlEvent;

/// Multi-producer, single-consumer event queue.
///
/// # Example
///
/// ```
/// use dotlight::events::{ControlEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(ControlEvent::ToggleDot);
///
/// assert_eq!(bus.drain(), vec![ControlEvent::ToggleDot]);
/// ```
pub struct EventBus {
    sender: Sender<ControlEvent>,
    receiver: Receiver<ControlEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A cheap, cloneable publisher handle for other modules and threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Publish directly from the owning side of the bus.
    pub fn publish(&self, event: ControlEvent) {
        let _ = self.sender.send(event);
    }

    /// Receive the next event without blocking, if one is pending.
    pub fn try_recv(&self) -> Option<ControlEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect all pending events, in publish order.
    pub fn drain(&self) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe handle for publishing events onto the bus.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<ControlEvent>,
}

impl EventPublisher {
    /// Publish an event. Non-blocking; a dropped receiver (app shutting
    /// down) is silently ignored.
    pub fn publish(&self, event: ControlEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::color::Rgb;

    #[test]
    fn new_bus_is_empty() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn publish_and_drain_preserves_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(ControlEvent::ToggleDot);
        publisher.publish(ControlEvent::ToggleSettings);
        publisher.publish(ControlEvent::Exit);

        assert_eq!(
            bus.drain(),
            vec![
                ControlEvent::ToggleDot,
                ControlEvent::ToggleSettings,
                ControlEvent::Exit,
            ]
        );
    }

    #[test]
    fn drain_empties_queue() {
        let bus = EventBus::new();
        bus.publish(ControlEvent::ToggleDot);
        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn cloned_publishers_feed_the_same_bus() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(ControlEvent::SetFillColor(Rgb::new(0, 0, 255)));
        pub2.publish(ControlEvent::SetRingColor(Rgb::new(255, 255, 0)));

        assert_eq!(bus.drain().len(), 2);
    }

    #[test]
    fn try_recv_returns_events_in_order() {
        let bus = EventBus::new();
        bus.publish(ControlEvent::ToggleDot);
        bus.publish(ControlEvent::ToggleSettings);

        assert_eq!(bus.try_recv(), Some(ControlEvent::ToggleDot));
        assert_eq!(bus.try_recv(), Some(ControlEvent::ToggleSettings));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn payload_events_round_trip() {
        let bus = EventBus::new();
        let color = Rgb::new(18, 52, 86);
        bus.publish(ControlEvent::SetFillColor(color));
        assert_eq!(bus.drain(), vec![ControlEvent::SetFillColor(color)]);
    }
}
