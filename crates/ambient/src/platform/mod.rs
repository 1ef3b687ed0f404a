//! Platform-specific surface implementations.

#[cfg(target_os = "android")]
mod android;

#[cfg(target_os = "android")]
pub use android::AndroidSurface;

use crate::surface::HostSurface;

/// Build the native surface for the current platform, if one exists.
///
/// Android hosts get a JNI-backed surface; everywhere else there is no
/// native wearable surface and the host should attach a
/// [`StaticSurface`](crate::StaticSurface) when it wants queries to work.
pub fn default_surface() -> Option<Box<dyn HostSurface>> {
    #[cfg(target_os = "android")]
    {
        Some(Box::new(AndroidSurface::new()))
    }

    #[cfg(not(target_os = "android"))]
    {
        None
    }
}
