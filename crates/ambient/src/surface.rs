//! Host surface traits for display queries.
//!
//! These traits abstract the platform surface (the activity on Android),
//! allowing the dispatch logic to remain pure and testable.

use serde::{Deserialize, Serialize};

/// Physical geometry of the host display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "lowercase")]
pub enum ScreenShape {
    /// Circular watch face.
    Round,

    /// Rectangular watch face.
    Square,
}

impl ScreenShape {
    /// Returns the wire label for the shape (`"round"` or `"square"`).
    pub fn label(&self) -> &'static str {
        match self {
            ScreenShape::Round => "round",
            ScreenShape::Square => "square",
        }
    }
}

impl std::fmt::Display for ScreenShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Provider for host display and device-class queries.
///
/// A surface stands in for the platform activity: while none is attached,
/// every channel call fails with the no-activity error.
pub trait HostSurface: Send {
    /// Get the physical shape of the host display.
    fn shape(&self) -> ScreenShape;

    /// Check whether the host is a watch-class device.
    fn is_wear_os(&self) -> bool;
}

/// Fixed-value surface for tests and hosts without a native one.
#[derive(Debug, Clone, Copy)]
pub struct StaticSurface {
    shape: ScreenShape,
    wear_os: bool,
}

impl StaticSurface {
    pub fn new(shape: ScreenShape, wear_os: bool) -> Self {
        Self { shape, wear_os }
    }

    /// A round watch face, the common wearable default.
    pub fn round_watch() -> Self {
        Self::new(ScreenShape::Round, true)
    }

    /// A square watch face.
    pub fn square_watch() -> Self {
        Self::new(ScreenShape::Square, true)
    }
}

impl HostSurface for StaticSurface {
    fn shape(&self) -> ScreenShape {
        self.shape
    }

    fn is_wear_os(&self) -> bool {
        self.wear_os
    }
}
