//! Outbound ambient events and their wire names.

use serde::{Deserialize, Serialize};

/// Display constraints reported when the host enters ambient mode.
///
/// Both flags default to `false` when the host omits them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct AmbientDetails {
    /// The display shifts pixels to avoid static-image burn-in.
    #[serde(default)]
    pub burn_in_protection: bool,

    /// The display is limited to a reduced color palette while ambient.
    #[serde(default)]
    pub low_bit_ambient: bool,
}

/// A controller-driven ambient event relayed to the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientEvent {
    /// The host entered ambient (always-on, low-power) mode.
    EnterAmbient(AmbientDetails),

    /// The host returned to interactive mode.
    ExitAmbient,

    /// Periodic tick to update the ambient display.
    UpdateAmbient,

    /// Offloaded ambient contents must be regenerated.
    InvalidateAmbientOffload,
}

impl AmbientEvent {
    /// Wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            AmbientEvent::EnterAmbient(_) => event_names::ENTER_AMBIENT,
            AmbientEvent::ExitAmbient => event_names::EXIT_AMBIENT,
            AmbientEvent::UpdateAmbient => event_names::UPDATE_AMBIENT,
            AmbientEvent::InvalidateAmbientOffload => event_names::INVALIDATE_AMBIENT_OFFLOAD,
        }
    }

    /// Payload carried by this event; only enter-ambient has one.
    pub fn details(&self) -> Option<AmbientDetails> {
        match self {
            AmbientEvent::EnterAmbient(details) => Some(*details),
            _ => None,
        }
    }
}

/// Event names as constants to prevent typos.
pub mod event_names {
    /// Host entered ambient mode. Payload: [`AmbientDetails`](super::AmbientDetails).
    pub const ENTER_AMBIENT: &str = "wear:enter-ambient";

    /// Host returned to interactive mode. No payload.
    pub const EXIT_AMBIENT: &str = "wear:exit-ambient";

    /// Ambient display update tick. No payload.
    pub const UPDATE_AMBIENT: &str = "wear:update-ambient";

    /// Offloaded ambient contents invalidated. No payload.
    pub const INVALIDATE_AMBIENT_OFFLOAD: &str = "wear:invalidate-ambient-offload";
}
