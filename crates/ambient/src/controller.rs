//! Ambient controller trait.
//!
//! The controller that actually drives the low-power display state is
//! vendor-supplied on real hardware. This module defines the seam the
//! bridge talks through, plus a no-op implementation for hosts without
//! one.

use std::sync::Arc;

use crate::events::AmbientEvent;

/// Callback type for controller-driven ambient events.
///
/// Hand one to the controller at construction; it routes events to
/// whatever channel is attached at delivery time.
pub type AmbientCallback = Arc<dyn Fn(AmbientEvent) + Send + Sync + 'static>;

/// Wrap a closure as an [`AmbientCallback`].
pub fn new_callback<F>(f: F) -> AmbientCallback
where
    F: Fn(AmbientEvent) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Vendor ambient-mode controller.
///
/// The bridge relays each host lifecycle transition to the matching hook
/// at most once per transition, and only while the controller is attached.
pub trait AmbientController: Send {
    /// Called once at attach time, before any lifecycle transition is
    /// relayed, to enable ambient support on the host.
    fn set_ambient_enabled(&mut self) {}

    /// The host surface was created.
    fn on_create(&mut self) {}

    /// The host came to the foreground.
    fn on_resume(&mut self) {}

    /// The host lost the foreground.
    fn on_pause(&mut self) {}

    /// The host is no longer visible.
    fn on_stop(&mut self) {}

    /// The host surface is being torn down.
    fn on_destroy(&mut self) {}

    /// Check whether the display is currently in ambient mode.
    fn is_ambient(&self) -> bool;

    /// Toggle automatic return to interactive mode on wake gestures.
    fn set_auto_resume_enabled(&mut self, enabled: bool);

    /// Toggle ambient offload (host-rendered contents while ambient).
    fn set_ambient_offload_enabled(&mut self, enabled: bool);
}

/// Null implementation for testing or hosts without a vendor controller.
#[derive(Debug, Default)]
pub struct NoopController;

impl AmbientController for NoopController {
    fn is_ambient(&self) -> bool {
        false
    }

    fn set_auto_resume_enabled(&mut self, _enabled: bool) {}

    fn set_ambient_offload_enabled(&mut self, _enabled: bool) {}
}
