//! Host lifecycle transitions.
//!
//! Pure domain types - no I/O, no platform dependencies.

/// A host lifecycle transition relayed to the ambient controller.
///
/// These mirror the five activity transitions a wearable host reports
/// between creation and teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The host surface was created.
    Created,

    /// The host came to the foreground and is interactive.
    Resumed,

    /// The host lost the foreground.
    Paused,

    /// The host is no longer visible.
    Stopped,

    /// The host surface is being torn down.
    Destroyed,
}

impl LifecycleEvent {
    /// Returns a human-readable label for the transition.
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleEvent::Created => "created",
            LifecycleEvent::Resumed => "resumed",
            LifecycleEvent::Paused => "paused",
            LifecycleEvent::Stopped => "stopped",
            LifecycleEvent::Destroyed => "destroyed",
        }
    }
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
