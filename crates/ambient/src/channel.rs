//! Outbound channel abstraction for ambient events.
//!
//! Provides a trait-based abstraction over event delivery, allowing the
//! bridge to be tested without a UI runtime and enabling headless hosts.

use std::sync::{Arc, Mutex};

use crate::events::AmbientEvent;

/// Trait for delivering ambient events to the frontend.
///
/// Delivery is best-effort and non-blocking: implementations must not
/// panic, and the bridge never retries a dropped event.
pub trait EventChannel: Send + Sync {
    /// Deliver one outbound event.
    fn notify(&self, event: &AmbientEvent);
}

/// Type alias for a shared channel reference.
pub type ChannelRef = Arc<dyn EventChannel>;

/// In-memory channel for testing.
///
/// Captures all delivered events for later inspection.
#[derive(Default)]
pub struct InMemoryChannel {
    events: Mutex<Vec<AmbientEvent>>,
}

impl InMemoryChannel {
    /// Create a new in-memory channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured events.
    pub fn events(&self) -> Vec<AmbientEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Get captured events with a specific wire name.
    pub fn events_named(&self, name: &str) -> Vec<AmbientEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.name() == name)
            .copied()
            .collect()
    }

    /// Clear all captured events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Get the number of captured events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Check if no events have been captured.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventChannel for InMemoryChannel {
    fn notify(&self, event: &AmbientEvent) {
        self.events.lock().unwrap().push(*event);
    }
}

/// No-op channel that discards all events.
pub struct NullChannel;

impl EventChannel for NullChannel {
    fn notify(&self, _event: &AmbientEvent) {
        // Intentionally empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{event_names, AmbientDetails};

    #[test]
    fn test_in_memory_channel_captures_events() {
        let channel = InMemoryChannel::new();

        channel.notify(&AmbientEvent::EnterAmbient(AmbientDetails::default()));
        channel.notify(&AmbientEvent::UpdateAmbient);
        channel.notify(&AmbientEvent::UpdateAmbient);
        channel.notify(&AmbientEvent::ExitAmbient);

        assert_eq!(channel.len(), 4);
        assert_eq!(channel.events_named(event_names::UPDATE_AMBIENT).len(), 2);
        assert_eq!(channel.events_named(event_names::ENTER_AMBIENT).len(), 1);
        assert_eq!(
            channel
                .events_named(event_names::INVALIDATE_AMBIENT_OFFLOAD)
                .len(),
            0
        );
    }

    #[test]
    fn test_in_memory_channel_clear() {
        let channel = InMemoryChannel::new();

        channel.notify(&AmbientEvent::ExitAmbient);
        assert!(!channel.is_empty());

        channel.clear();
        assert!(channel.is_empty());
    }

    #[test]
    fn test_null_channel() {
        let channel = NullChannel;
        // Should not panic
        channel.notify(&AmbientEvent::ExitAmbient);
    }
}
