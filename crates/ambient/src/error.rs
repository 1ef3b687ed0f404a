//! Error types for the wear channel.

use thiserror::Error;

/// Wire code reported when no host surface is attached.
pub const CODE_NO_ACTIVITY: &str = "no-activity";
/// Wire code reported when the controller is absent or an argument is missing.
pub const CODE_NOT_READY: &str = "not-ready";
/// Wire code reported for an unknown channel method.
pub const CODE_NOT_IMPLEMENTED: &str = "not-implemented";

/// Errors surfaced to channel callers.
#[derive(Debug, Error)]
pub enum AmbientError {
    /// No host surface is attached (the host activity is gone or not yet created).
    #[error("host surface not attached")]
    NoActivity,

    /// The ambient controller has not been attached yet.
    #[error("ambient controller not ready")]
    NotReady,

    /// A required call argument was missing or had the wrong type.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// The channel method is not recognized.
    #[error("method `{0}` is not implemented")]
    NotImplemented(String),
}

impl AmbientError {
    /// Stable wire code for this error.
    ///
    /// Callers on the other side of the channel match on the code, not the
    /// message, so these strings never change.
    pub fn code(&self) -> &'static str {
        match self {
            AmbientError::NoActivity => CODE_NO_ACTIVITY,
            AmbientError::NotReady | AmbientError::MissingArgument(_) => CODE_NOT_READY,
            AmbientError::NotImplemented(_) => CODE_NOT_IMPLEMENTED,
        }
    }
}
