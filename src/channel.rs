// Method-channel protocol and request gateway
//
// The application shell talks to this layer over a single method-call
// channel: an invocation is a method name plus an optional string-keyed
// argument map, and every invocation gets exactly one terminal response.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::AppContext;
use crate::error::{log_playback_error, ErrorCode, PlaybackError};

/// Name of the method channel the shell registers.
pub const CHANNEL_NAME: &str = "retro_cam_audio";

/// The single method this channel implements.
pub const METHOD_PLAY_SYSTEM_SOUND: &str = "playSystemSound";

/// Required argument key carrying the logical sound name.
pub const ARG_SOUND_NAME: &str = "soundName";

/// One decoded method invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Option<Map<String, Value>>,
}

impl MethodCall {
    pub fn new<S: Into<String>>(method: S, arguments: Option<Map<String, Value>>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Build a well-formed `playSystemSound` invocation.
    pub fn play_system_sound(sound_name: &str) -> Self {
        let mut arguments = Map::new();
        arguments.insert(
            ARG_SOUND_NAME.to_string(),
            Value::String(sound_name.to_string()),
        );
        Self::new(METHOD_PLAY_SYSTEM_SOUND, Some(arguments))
    }
}

/// Terminal response for one invocation.
///
/// `NotImplemented` is a defined no-op outcome the shell understands, not
/// an error; errors carry the wire code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    /// Success with an empty payload
    Success,
    /// The method name is not handled by this channel
    NotImplemented,
    /// Structured failure reply
    Error { code: String, message: String },
}

impl MethodResponse {
    pub fn from_error(err: &PlaybackError) -> Self {
        MethodResponse::Error {
            code: err.code().to_string(),
            message: err.message(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success)
    }
}

/// Request gateway: validates invocations and dispatches them to the
/// sound player through the owning [AppContext].
///
/// The gateway holds no state of its own; it borrows the context that
/// constructed it, so each host (FFI edge, CLI, tests) gets a registry
/// with the lifetime of that host.
pub struct Gateway<'ctx> {
    context: &'ctx AppContext,
}

impl<'ctx> Gateway<'ctx> {
    pub fn new(context: &'ctx AppContext) -> Self {
        Self { context }
    }

    /// Handle one decoded invocation.
    ///
    /// Every path produces exactly one terminal response: success,
    /// not-implemented, or a structured error. Validation failures have
    /// no side effects.
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        if call.method != METHOD_PLAY_SYSTEM_SOUND {
            debug!("[Gateway] method '{}' not implemented", call.method);
            return MethodResponse::NotImplemented;
        }

        let sound_name = match extract_sound_name(call.arguments.as_ref()) {
            Ok(name) => name,
            Err(err) => {
                log_playback_error(&err, "handle_method_call");
                return MethodResponse::from_error(&err);
            }
        };

        match self.context.play_system_sound(&sound_name) {
            Ok(()) => MethodResponse::Success,
            // Context already logged the failure.
            Err(err) => MethodResponse::from_error(&err),
        }
    }

    /// Handle an invocation whose arguments arrive as a JSON document.
    ///
    /// The method name is matched before the document is touched, so an
    /// unknown method never fails on argument decoding.
    pub fn handle_raw(&self, method: &str, arguments_json: Option<&str>) -> MethodResponse {
        if method != METHOD_PLAY_SYSTEM_SOUND {
            debug!("[Gateway] method '{}' not implemented", method);
            return MethodResponse::NotImplemented;
        }

        match decode_arguments(arguments_json) {
            Ok(arguments) => self.handle(&MethodCall::new(method, arguments)),
            Err(err) => {
                log_playback_error(&err, "handle_method_call");
                MethodResponse::from_error(&err)
            }
        }
    }
}

fn decode_arguments(json: Option<&str>) -> Result<Option<Map<String, Value>>, PlaybackError> {
    let Some(raw) = json else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(Value::Null) => Ok(None),
        Ok(_) => Err(PlaybackError::InvalidArguments {
            reason: "arguments must be a map".to_string(),
        }),
        Err(err) => Err(PlaybackError::InvalidArguments {
            reason: format!("arguments are not valid JSON: {}", err),
        }),
    }
}

fn extract_sound_name(arguments: Option<&Map<String, Value>>) -> Result<String, PlaybackError> {
    let Some(arguments) = arguments else {
        return Err(PlaybackError::InvalidArguments {
            reason: "arguments missing".to_string(),
        });
    };
    match arguments.get(ARG_SOUND_NAME) {
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(PlaybackError::InvalidArguments {
            reason: "soundName must be a string".to_string(),
        }),
        None => Err(PlaybackError::InvalidArguments {
            reason: "soundName missing".to_string(),
        }),
    }
}
