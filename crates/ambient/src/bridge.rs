//! Ambient bridge - wires the host lifecycle, the vendor controller, and
//! the outbound channel together.

use std::sync::{Arc, RwLock};

use crate::channel::ChannelRef;
use crate::controller::{new_callback, AmbientCallback, AmbientController};
use crate::error::AmbientError;
use crate::events::AmbientEvent;
use crate::lifecycle::LifecycleEvent;
use crate::request::{WearRequest, WearResponse};
use crate::surface::{HostSurface, ScreenShape};

/// Shared slot holding the currently attached channel.
///
/// Controller callbacks hold the slot, not the channel, so an event fired
/// after the channel detaches is dropped instead of reaching a dead
/// frontend.
#[derive(Default)]
struct ChannelSlot {
    channel: RwLock<Option<ChannelRef>>,
}

impl ChannelSlot {
    fn notify(&self, event: &AmbientEvent) {
        let Ok(guard) = self.channel.read() else {
            return;
        };
        match guard.as_ref() {
            Some(channel) => {
                tracing::debug!(event = event.name(), "delivering ambient event");
                channel.notify(event);
            }
            None => {
                tracing::debug!(event = event.name(), "no channel attached, event dropped");
            }
        }
    }

    fn set(&self, channel: Option<ChannelRef>) -> bool {
        let Ok(mut guard) = self.channel.write() else {
            return false;
        };
        let had_channel = guard.is_some();
        *guard = channel;
        had_channel
    }

    fn is_attached(&self) -> bool {
        self.channel
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}

/// Bridge between a wearable host and the `wear` channel.
///
/// Owns the three attachable pieces of the session:
/// - the host surface (display queries),
/// - the vendor controller (ambient state and lifecycle hooks),
/// - the outbound channel (event delivery to the frontend).
///
/// Attach/detach transitions and channel calls all happen on the host
/// main thread; the bridge spawns no background work of its own.
#[derive(Default)]
pub struct AmbientBridge {
    controller: Option<Box<dyn AmbientController>>,
    surface: Option<Box<dyn HostSurface>>,
    slot: Arc<ChannelSlot>,
}

impl AmbientBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a callback handle for controller-driven events.
    ///
    /// The handle stays valid across channel detach and re-attach; events
    /// fired while no channel is attached are dropped.
    pub fn ambient_callback(&self) -> AmbientCallback {
        let slot = Arc::clone(&self.slot);
        new_callback(move |event| slot.notify(&event))
    }

    /// Attach the vendor controller, replacing any previous one.
    ///
    /// Enables ambient support via the controller's `set_ambient_enabled`
    /// hook exactly once per attach.
    pub fn attach_controller(&mut self, mut controller: Box<dyn AmbientController>) {
        controller.set_ambient_enabled();
        self.controller = Some(controller);
        tracing::info!("ambient controller attached");
    }

    /// Detach the vendor controller. No lifecycle transitions reach a
    /// detached controller.
    pub fn detach_controller(&mut self) {
        if self.controller.take().is_some() {
            tracing::info!("ambient controller detached");
        }
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    /// Attach the host surface used for display queries.
    pub fn attach_surface(&mut self, surface: Box<dyn HostSurface>) {
        self.surface = Some(surface);
        tracing::info!("host surface attached");
    }

    /// Detach the host surface. Channel queries fail with the no-activity
    /// code until a surface is attached again.
    pub fn detach_surface(&mut self) {
        if self.surface.take().is_some() {
            tracing::info!("host surface detached");
        }
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Attach the outbound channel, replacing any previous one.
    pub fn attach_channel(&mut self, channel: ChannelRef) {
        self.slot.set(Some(channel));
        tracing::info!("event channel attached");
    }

    /// Detach the outbound channel. Events fired afterwards are dropped.
    pub fn detach_channel(&mut self) {
        if self.slot.set(None) {
            tracing::info!("event channel detached");
        }
    }

    pub fn has_channel(&self) -> bool {
        self.slot.is_attached()
    }

    /// Relay one host lifecycle transition to the attached controller.
    ///
    /// A missing controller makes this a no-op.
    pub fn handle_lifecycle(&mut self, event: LifecycleEvent) {
        let Some(controller) = self.controller.as_mut() else {
            tracing::debug!(transition = %event, "no controller attached, transition ignored");
            return;
        };

        tracing::debug!(transition = %event, "relaying lifecycle transition");
        match event {
            LifecycleEvent::Created => controller.on_create(),
            LifecycleEvent::Resumed => controller.on_resume(),
            LifecycleEvent::Paused => controller.on_pause(),
            LifecycleEvent::Stopped => controller.on_stop(),
            LifecycleEvent::Destroyed => controller.on_destroy(),
        }
    }

    /// Deliver one ambient event to the attached channel.
    ///
    /// Best-effort: dropped silently when no channel is attached.
    pub fn notify(&self, event: AmbientEvent) {
        self.slot.notify(&event);
    }

    /// Get the physical shape of the host display.
    pub fn get_shape(&self) -> Result<ScreenShape, AmbientError> {
        Ok(self.surface()?.shape())
    }

    /// Check whether the host is a watch-class device.
    pub fn is_wear_os(&self) -> Result<bool, AmbientError> {
        Ok(self.surface()?.is_wear_os())
    }

    /// Check whether the display is currently in ambient mode.
    ///
    /// Reports `false` when no controller is attached; the query itself
    /// still requires an attached surface.
    pub fn is_ambient(&self) -> Result<bool, AmbientError> {
        self.surface()?;
        Ok(self
            .controller
            .as_ref()
            .map(|controller| controller.is_ambient())
            .unwrap_or(false))
    }

    /// Toggle automatic return to interactive mode on wake gestures.
    pub fn set_auto_resume_enabled(&mut self, enabled: bool) -> Result<(), AmbientError> {
        self.surface()?;
        self.controller_mut()?.set_auto_resume_enabled(enabled);
        Ok(())
    }

    /// Toggle ambient offload.
    pub fn set_ambient_offload_enabled(&mut self, enabled: bool) -> Result<(), AmbientError> {
        self.surface()?;
        self.controller_mut()?.set_ambient_offload_enabled(enabled);
        Ok(())
    }

    /// Dispatch one typed channel request.
    pub fn dispatch(&mut self, request: WearRequest) -> Result<WearResponse, AmbientError> {
        match request {
            WearRequest::GetShape => self.get_shape().map(WearResponse::Shape),
            WearRequest::IsWearOs => self.is_wear_os().map(WearResponse::Flag),
            WearRequest::IsAmbient => self.is_ambient().map(WearResponse::Flag),
            WearRequest::SetAutoResumeEnabled { enabled } => self
                .set_auto_resume_enabled(enabled)
                .map(|_| WearResponse::Null),
            WearRequest::SetAmbientOffloadEnabled { enabled } => self
                .set_ambient_offload_enabled(enabled)
                .map(|_| WearResponse::Null),
        }
    }

    /// Handle one raw channel call: a method name plus optional JSON
    /// arguments, as delivered by the host messaging layer.
    pub fn handle_message(
        &mut self,
        method: &str,
        args: Option<&serde_json::Value>,
    ) -> Result<WearResponse, AmbientError> {
        let request = WearRequest::parse(method, args)?;
        self.dispatch(request)
    }

    fn surface(&self) -> Result<&dyn HostSurface, AmbientError> {
        self.surface.as_deref().ok_or(AmbientError::NoActivity)
    }

    fn controller_mut(&mut self) -> Result<&mut (dyn AmbientController + 'static), AmbientError> {
        self.controller.as_deref_mut().ok_or(AmbientError::NotReady)
    }
}
