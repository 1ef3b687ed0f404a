//! Maps Tauri run events onto host lifecycle transitions.

use tauri::{RunEvent, WindowEvent};
use wear_ambient::LifecycleEvent;

/// Map one run event onto a lifecycle transition.
///
/// Only events for `window_label` count, so multi-window hosts relay
/// each transition exactly once.
pub fn lifecycle_transition(event: &RunEvent, window_label: &str) -> Option<LifecycleEvent> {
    match event {
        RunEvent::Ready => Some(LifecycleEvent::Created),
        RunEvent::WindowEvent { label, event, .. } if label == window_label => {
            window_transition(event)
        }
        _ => None,
    }
}

fn window_transition(event: &WindowEvent) -> Option<LifecycleEvent> {
    match event {
        WindowEvent::Focused(true) => Some(LifecycleEvent::Resumed),
        WindowEvent::Focused(false) => Some(LifecycleEvent::Paused),
        WindowEvent::CloseRequested { .. } => Some(LifecycleEvent::Stopped),
        WindowEvent::Destroyed => Some(LifecycleEvent::Destroyed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_maps_to_created() {
        assert_eq!(
            lifecycle_transition(&RunEvent::Ready, "main"),
            Some(LifecycleEvent::Created)
        );
    }

    #[test]
    fn test_exit_maps_to_nothing() {
        assert_eq!(lifecycle_transition(&RunEvent::Exit, "main"), None);
    }

    #[test]
    fn test_focus_maps_to_resume_and_pause() {
        assert_eq!(
            window_transition(&WindowEvent::Focused(true)),
            Some(LifecycleEvent::Resumed)
        );
        assert_eq!(
            window_transition(&WindowEvent::Focused(false)),
            Some(LifecycleEvent::Paused)
        );
    }

    #[test]
    fn test_destroyed_maps_to_destroyed() {
        assert_eq!(
            window_transition(&WindowEvent::Destroyed),
            Some(LifecycleEvent::Destroyed)
        );
    }
}
