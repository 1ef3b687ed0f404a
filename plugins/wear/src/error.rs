use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Errors surfaced to channel callers.
///
/// Serializes as `{ "code": ..., "message": ... }` so the frontend can
/// match on the stable code instead of the message text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ambient(#[from] wear_ambient::AmbientError),
}

impl Error {
    /// Stable wire code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Ambient(e) => e.code(),
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_code_and_message() {
        let error = Error::from(wear_ambient::AmbientError::NoActivity);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["code"], "no-activity");
        assert!(value["message"].as_str().unwrap().contains("surface"));
    }

    #[test]
    fn test_not_ready_code_passes_through() {
        let error = Error::from(wear_ambient::AmbientError::NotReady);
        assert_eq!(error.code(), "not-ready");

        let error = Error::from(wear_ambient::AmbientError::MissingArgument("enabled"));
        assert_eq!(error.code(), "not-ready");
    }
}
