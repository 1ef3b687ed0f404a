//! Example: Drive a scripted ambient session through the bridge.
//!
//! Run with: cargo run -p wear-ambient --example ambient_session

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wear_ambient::{
    AmbientBridge, AmbientController, AmbientDetails, AmbientEvent, InMemoryChannel,
    LifecycleEvent, StaticSurface,
};

/// Controller whose ambient flag is shared with the script below, the way
/// a vendor controller shares state with its display driver.
struct ScriptedController {
    ambient: Arc<AtomicBool>,
}

impl AmbientController for ScriptedController {
    fn set_ambient_enabled(&mut self) {
        println!("controller: ambient support enabled");
    }

    fn on_resume(&mut self) {
        println!("controller: host resumed");
    }

    fn on_pause(&mut self) {
        println!("controller: host paused");
    }

    fn is_ambient(&self) -> bool {
        self.ambient.load(Ordering::SeqCst)
    }

    fn set_auto_resume_enabled(&mut self, enabled: bool) {
        println!("controller: auto-resume = {enabled}");
    }

    fn set_ambient_offload_enabled(&mut self, enabled: bool) {
        println!("controller: ambient offload = {enabled}");
    }
}

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("wear_ambient=debug")
        .init();

    println!("=== Ambient Session Example ===\n");

    let mut bridge = AmbientBridge::new();
    let channel = Arc::new(InMemoryChannel::new());
    bridge.attach_channel(channel.clone());
    bridge.attach_surface(Box::new(StaticSurface::round_watch()));

    let ambient = Arc::new(AtomicBool::new(false));
    let callback = bridge.ambient_callback();
    bridge.attach_controller(Box::new(ScriptedController {
        ambient: Arc::clone(&ambient),
    }));

    // Host starts up
    bridge.handle_lifecycle(LifecycleEvent::Created);
    bridge.handle_lifecycle(LifecycleEvent::Resumed);

    for method in ["getShape", "isWearOs", "isAmbient"] {
        let response = bridge.handle_message(method, None).unwrap();
        println!("{method} -> {}", serde_json::to_string(&response).unwrap());
    }

    let args = serde_json::json!({"enabled": true});
    bridge.handle_message("setAutoResumeEnabled", Some(&args)).unwrap();

    // Display goes ambient, ticks once, and wakes again
    ambient.store(true, Ordering::SeqCst);
    callback(AmbientEvent::EnterAmbient(AmbientDetails {
        burn_in_protection: true,
        low_bit_ambient: false,
    }));
    callback(AmbientEvent::UpdateAmbient);

    let response = bridge.handle_message("isAmbient", None).unwrap();
    println!("isAmbient -> {}", serde_json::to_string(&response).unwrap());

    ambient.store(false, Ordering::SeqCst);
    callback(AmbientEvent::ExitAmbient);

    // Host shuts down
    bridge.handle_lifecycle(LifecycleEvent::Paused);
    bridge.handle_lifecycle(LifecycleEvent::Stopped);
    bridge.handle_lifecycle(LifecycleEvent::Destroyed);
    bridge.detach_controller();
    bridge.detach_surface();

    println!("\nDelivered events:");
    for event in channel.events() {
        println!("  {}", event.name());
    }

    println!("\nDone.");
}
