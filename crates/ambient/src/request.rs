//! Typed channel requests and raw-call parsing.
//!
//! The channel carries string method names plus optional JSON arguments;
//! parsing them into an enum up front keeps dispatch exhaustive and pushes
//! malformed calls into one place.

use serde::Serialize;

use crate::error::AmbientError;
use crate::surface::ScreenShape;

/// One inbound channel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearRequest {
    /// Query the physical screen shape.
    GetShape,

    /// Query whether the host is a watch-class device.
    IsWearOs,

    /// Query whether the display is currently ambient.
    IsAmbient,

    /// Toggle automatic return to interactive mode.
    SetAutoResumeEnabled { enabled: bool },

    /// Toggle ambient offload.
    SetAmbientOffloadEnabled { enabled: bool },
}

/// Channel method names as constants to prevent typos.
pub mod method_names {
    pub const GET_SHAPE: &str = "getShape";
    pub const IS_WEAR_OS: &str = "isWearOs";
    pub const IS_AMBIENT: &str = "isAmbient";
    pub const SET_AUTO_RESUME_ENABLED: &str = "setAutoResumeEnabled";
    pub const SET_AMBIENT_OFFLOAD_ENABLED: &str = "setAmbientOffloadEnabled";
}

impl WearRequest {
    /// Parse a raw channel call into a typed request.
    ///
    /// Unknown methods fail with [`AmbientError::NotImplemented`]; a
    /// missing or non-boolean `enabled` argument on the setters fails
    /// with the not-ready code.
    pub fn parse(method: &str, args: Option<&serde_json::Value>) -> Result<Self, AmbientError> {
        match method {
            method_names::GET_SHAPE => Ok(Self::GetShape),
            method_names::IS_WEAR_OS => Ok(Self::IsWearOs),
            method_names::IS_AMBIENT => Ok(Self::IsAmbient),
            method_names::SET_AUTO_RESUME_ENABLED => Ok(Self::SetAutoResumeEnabled {
                enabled: parse_enabled(args)?,
            }),
            method_names::SET_AMBIENT_OFFLOAD_ENABLED => Ok(Self::SetAmbientOffloadEnabled {
                enabled: parse_enabled(args)?,
            }),
            other => Err(AmbientError::NotImplemented(other.to_string())),
        }
    }

    /// Wire name of this request's method.
    pub fn method(&self) -> &'static str {
        match self {
            WearRequest::GetShape => method_names::GET_SHAPE,
            WearRequest::IsWearOs => method_names::IS_WEAR_OS,
            WearRequest::IsAmbient => method_names::IS_AMBIENT,
            WearRequest::SetAutoResumeEnabled { .. } => method_names::SET_AUTO_RESUME_ENABLED,
            WearRequest::SetAmbientOffloadEnabled { .. } => {
                method_names::SET_AMBIENT_OFFLOAD_ENABLED
            }
        }
    }
}

fn parse_enabled(args: Option<&serde_json::Value>) -> Result<bool, AmbientError> {
    args.and_then(|value| value.get("enabled"))
        .and_then(|value| value.as_bool())
        .ok_or(AmbientError::MissingArgument("enabled"))
}

/// Successful response to a channel request.
///
/// Serializes untagged: the shape as its label, flags as plain booleans,
/// acknowledgements as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WearResponse {
    /// Response to `getShape`.
    Shape(ScreenShape),

    /// Response to `isWearOs` and `isAmbient`.
    Flag(bool),

    /// Acknowledgement with no value.
    Null,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_queries() {
        assert_eq!(
            WearRequest::parse("getShape", None).unwrap(),
            WearRequest::GetShape
        );
        assert_eq!(
            WearRequest::parse("isWearOs", None).unwrap(),
            WearRequest::IsWearOs
        );
        assert_eq!(
            WearRequest::parse("isAmbient", None).unwrap(),
            WearRequest::IsAmbient
        );
    }

    #[test]
    fn test_parse_setters() {
        let args = json!({"enabled": true});
        assert_eq!(
            WearRequest::parse("setAutoResumeEnabled", Some(&args)).unwrap(),
            WearRequest::SetAutoResumeEnabled { enabled: true }
        );

        let args = json!({"enabled": false});
        assert_eq!(
            WearRequest::parse("setAmbientOffloadEnabled", Some(&args)).unwrap(),
            WearRequest::SetAmbientOffloadEnabled { enabled: false }
        );
    }

    #[test]
    fn test_parse_setter_without_argument_is_not_ready() {
        let err = WearRequest::parse("setAutoResumeEnabled", None).unwrap_err();
        assert_eq!(err.code(), "not-ready");

        let args = json!({});
        let err = WearRequest::parse("setAmbientOffloadEnabled", Some(&args)).unwrap_err();
        assert_eq!(err.code(), "not-ready");

        // Wrong type counts as missing
        let args = json!({"enabled": "yes"});
        let err = WearRequest::parse("setAutoResumeEnabled", Some(&args)).unwrap_err();
        assert_eq!(err.code(), "not-ready");
    }

    #[test]
    fn test_parse_unknown_method_is_not_implemented() {
        let err = WearRequest::parse("vibrate", None).unwrap_err();
        assert_eq!(err.code(), "not-implemented");
        assert!(err.to_string().contains("vibrate"));
    }

    #[test]
    fn test_method_round_trips() {
        assert_eq!(WearRequest::GetShape.method(), "getShape");
        assert_eq!(
            WearRequest::SetAutoResumeEnabled { enabled: true }.method(),
            "setAutoResumeEnabled"
        );
    }

    #[test]
    fn test_response_serialization() {
        assert_eq!(
            serde_json::to_value(WearResponse::Shape(ScreenShape::Round)).unwrap(),
            json!("round")
        );
        assert_eq!(
            serde_json::to_value(WearResponse::Flag(true)).unwrap(),
            json!(true)
        );
        assert_eq!(
            serde_json::to_value(WearResponse::Null).unwrap(),
            json!(null)
        );
    }
}
