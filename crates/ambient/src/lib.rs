//! Ambient-mode bridge for wearable hosts.
//!
//! This crate wires a wearable host's activity lifecycle, its vendor
//! ambient controller, and an outbound message channel together so a
//! frontend can react to ambient (always-on, low-power) display
//! transitions. It tracks:
//! - Host lifecycle (create/resume/pause/stop/destroy)
//! - Ambient state (enter/exit/update, offload invalidation)
//! - Display traits (screen shape, watch-class detection)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  events.rs     - AmbientEvent, AmbientDetails (pure)        │
//! │  lifecycle.rs  - LifecycleEvent transitions (pure)          │
//! │  request.rs    - WearRequest parsing and responses (pure)   │
//! │  surface.rs    - HostSurface trait, ScreenShape             │
//! │  controller.rs - AmbientController trait                    │
//! │  channel.rs    - EventChannel trait                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Infrastructure Layer                        │
//! │  platform/android.rs - JNI-backed surface queries           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! │  bridge.rs - AmbientBridge attach/relay/dispatch            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wear_ambient::{AmbientBridge, InMemoryChannel, StaticSurface};
//!
//! let mut bridge = AmbientBridge::new();
//! bridge.attach_channel(Arc::new(InMemoryChannel::new()));
//! bridge.attach_surface(Box::new(StaticSurface::round_watch()));
//!
//! let shape = bridge.get_shape()?;
//! println!("shape: {shape}");
//! ```

mod bridge;
mod channel;
mod controller;
mod error;
mod events;
mod lifecycle;
mod request;
mod surface;

pub mod platform;

// Re-export main types
pub use bridge::AmbientBridge;
pub use channel::{ChannelRef, EventChannel, InMemoryChannel, NullChannel};
pub use controller::{new_callback, AmbientCallback, AmbientController, NoopController};
pub use error::{AmbientError, CODE_NOT_IMPLEMENTED, CODE_NOT_READY, CODE_NO_ACTIVITY};
pub use events::{event_names, AmbientDetails, AmbientEvent};
pub use lifecycle::LifecycleEvent;
pub use request::{method_names, WearRequest, WearResponse};
pub use surface::{HostSurface, ScreenShape, StaticSurface};
