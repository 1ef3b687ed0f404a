//! Tauri plugin for wearable ambient-mode support.
//!
//! Exposes the `wear` channel to the frontend: display queries
//! (`get_shape`, `is_wear_os`, `is_ambient`), ambient-mode commands
//! (`set_auto_resume_enabled`, `set_ambient_offload_enabled`), and the
//! `wear:*` app events fired when the host enters, updates, or leaves
//! ambient mode.
//!
//! The plugin owns an [`AmbientBridge`] as managed state and relays the
//! main window's lifecycle to whatever vendor controller the host
//! attaches via [`attach_controller`].

use std::sync::Arc;

use serde::Deserialize;
use tauri::{
    plugin::{Builder, TauriPlugin},
    AppHandle, Manager, RunEvent, Runtime,
};
use tokio::sync::Mutex;
use wear_ambient::{AmbientBridge, AmbientController, HostSurface, ScreenShape, StaticSurface};

mod commands;
mod error;
mod events;
mod lifecycle;

pub use error::{Error, Result};
pub use events::TauriChannel;
pub use wear_ambient::{
    event_names, AmbientCallback, AmbientDetails, AmbientEvent, LifecycleEvent, NoopController,
};

/// Plugin (and channel) name.
pub const PLUGIN_NAME: &str = "wear";

/// Window whose lifecycle drives the relay unless configured otherwise.
pub const DEFAULT_WINDOW_LABEL: &str = "main";

pub type SharedState = Mutex<AmbientBridge>;

/// Window label the relay listens to; kept as managed state because the
/// run-event hook outlives the setup closure.
struct RelaySettings {
    window_label: String,
}

/// Plugin configuration, read from `plugins.wear` in the app config.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Window whose lifecycle transitions are relayed.
    #[serde(default = "default_window_label")]
    pub window_label: String,

    /// Fixed surface for hosts without a native wearable display, so
    /// desktop development gets working queries instead of no-activity
    /// errors.
    #[serde(default)]
    pub static_surface: Option<StaticSurfaceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_label: default_window_label(),
            static_surface: None,
        }
    }
}

fn default_window_label() -> String {
    DEFAULT_WINDOW_LABEL.to_string()
}

/// Fixed surface description for [`Config::static_surface`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticSurfaceConfig {
    pub shape: ScreenShape,
    #[serde(default)]
    pub wear_os: bool,
}

pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::get_shape,
            commands::is_wear_os,
            commands::is_ambient,
            commands::set_auto_resume_enabled,
            commands::set_ambient_offload_enabled,
        ])
        .setup(move |app, api| {
            let config = api.config().clone().unwrap_or_default();

            let mut bridge = AmbientBridge::new();
            bridge.attach_channel(Arc::new(TauriChannel::new(app.clone())));

            match wear_ambient::platform::default_surface() {
                Some(surface) => bridge.attach_surface(surface),
                None => match config.static_surface {
                    Some(fixed) => {
                        bridge.attach_surface(Box::new(StaticSurface::new(
                            fixed.shape,
                            fixed.wear_os,
                        )));
                    }
                    None => {
                        tracing::debug!(
                            "no native or configured surface, queries report no-activity"
                        );
                    }
                },
            }

            app.manage(SharedState::new(bridge));
            app.manage(RelaySettings {
                window_label: config.window_label,
            });

            Ok(())
        })
        .on_event(|app, event| {
            let settings = app.state::<RelaySettings>();

            if let Some(transition) = lifecycle::lifecycle_transition(event, &settings.window_label)
            {
                let state = app.state::<SharedState>();
                let mut bridge = state.blocking_lock();
                bridge.handle_lifecycle(transition);

                // The window is gone with its surface; controller hooks
                // must not outlive it.
                if transition == LifecycleEvent::Destroyed {
                    bridge.detach_controller();
                    bridge.detach_surface();
                }
            } else if matches!(event, RunEvent::Exit) {
                let state = app.state::<SharedState>();
                state.blocking_lock().detach_channel();
            }
        })
        .build()
}

/// Attach the vendor ambient controller, replacing any previous one.
///
/// Call from the host main thread once the platform side is ready; the
/// controller's `set_ambient_enabled` hook runs during the attach.
pub fn attach_controller<R: Runtime>(app: &AppHandle<R>, controller: Box<dyn AmbientController>) {
    let state = app.state::<SharedState>();
    state.blocking_lock().attach_controller(controller);
}

/// Detach the vendor ambient controller.
pub fn detach_controller<R: Runtime>(app: &AppHandle<R>) {
    let state = app.state::<SharedState>();
    state.blocking_lock().detach_controller();
}

/// Attach a host surface, replacing the one chosen at setup.
pub fn attach_surface<R: Runtime>(app: &AppHandle<R>, surface: Box<dyn HostSurface>) {
    let state = app.state::<SharedState>();
    state.blocking_lock().attach_surface(surface);
}

/// Detach the host surface; channel queries fail with no-activity until
/// one is attached again.
pub fn detach_surface<R: Runtime>(app: &AppHandle<R>) {
    let state = app.state::<SharedState>();
    state.blocking_lock().detach_surface();
}

/// Get a callback handle for wiring a vendor controller's events into
/// the channel.
pub fn ambient_callback<R: Runtime>(app: &AppHandle<R>) -> AmbientCallback {
    let state = app.state::<SharedState>();
    let bridge = state.blocking_lock();
    bridge.ambient_callback()
}

/// Deliver one ambient event to the frontend, for platform layers that
/// report events without going through a controller callback.
pub fn notify_ambient_event<R: Runtime>(app: &AppHandle<R>, event: AmbientEvent) {
    let state = app.state::<SharedState>();
    state.blocking_lock().notify(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.window_label, "main");
        assert!(config.static_surface.is_none());
    }

    #[test]
    fn test_config_deserializes_camel_case() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "windowLabel": "watchface",
            "staticSurface": {"shape": "round", "wearOs": true}
        }))
        .unwrap();

        assert_eq!(config.window_label, "watchface");
        let fixed = config.static_surface.unwrap();
        assert_eq!(fixed.shape, ScreenShape::Round);
        assert!(fixed.wear_os);
    }

    #[test]
    fn test_missing_config_table_falls_back_to_defaults() {
        let config: Option<Config> = serde_json::from_value(serde_json::Value::Null).unwrap();
        let config = config.unwrap_or_default();
        assert_eq!(config.window_label, "main");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.window_label, "main");
        assert!(config.static_surface.is_none());
    }
}
