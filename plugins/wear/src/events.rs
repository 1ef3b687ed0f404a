use tauri::{AppHandle, Emitter, Runtime};
use wear_ambient::{AmbientEvent, EventChannel};

/// Outbound channel backed by Tauri app events.
///
/// Each ambient event is emitted app-wide under its `wear:*` name;
/// enter-ambient carries its display details, the rest carry `null`.
pub struct TauriChannel<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriChannel<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> EventChannel for TauriChannel<R> {
    fn notify(&self, event: &AmbientEvent) {
        let result = match event.details() {
            Some(details) => self.app.emit(event.name(), details),
            None => self.app.emit(event.name(), ()),
        };

        if let Err(e) = result {
            tracing::error!("failed to emit {} event: {:?}", event.name(), e);
        }
    }
}
