// Error types for the retro cam audio layer
//
// This module defines the playback error taxonomy with string error codes
// matching the method-channel protocol, suitable for FFI communication.

use log::error;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the FFI boundary.
pub trait ErrorCode {
    /// Get the wire-protocol error code
    fn code(&self) -> &'static str;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Playback error code constants exposed to Dart via FFI
///
/// These constants provide a single source of truth for the codes carried
/// by method-channel error responses. The flutter_rust_bridge will
/// automatically generate corresponding Dart constants.
#[flutter_rust_bridge::frb(unignore)]
pub struct PlaybackErrorCodes {}

#[flutter_rust_bridge::frb]
impl PlaybackErrorCodes {
    /// Arguments missing or soundName not a non-empty string
    pub const INVALID_ARGS: &'static str = "INVALID_ARGS";

    /// No bundled asset resolves for the requested sound
    pub const ASSET_MISSING: &'static str = "ASSET_MISSING";

    /// Playback resource construction or start failed
    pub const AUDIO_ERROR: &'static str = "AUDIO_ERROR";

    // Getter methods for FFI exposure (flutter_rust_bridge requires methods not const)

    /// Get INVALID_ARGS error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn invalid_args() -> String {
        Self::INVALID_ARGS.to_string()
    }

    /// Get ASSET_MISSING error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn asset_missing() -> String {
        Self::ASSET_MISSING.to_string()
    }

    /// Get AUDIO_ERROR error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn audio_error() -> String {
        Self::AUDIO_ERROR.to_string()
    }
}

/// Log a playback error with structured context
///
/// Logs the wire code, the component and the human-readable message so a
/// failed invocation can be traced from the host app's logcat/console.
/// The logging is non-blocking and will not panic on failure.
pub fn log_playback_error(err: &PlaybackError, context: &str) {
    error!(
        "Playback error in {}: code={}, component=SoundPlayer, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Playback-related errors
///
/// These errors cover one `playSystemSound` invocation end to end: argument
/// validation, bundle asset resolution, and playback resource construction.
/// Every variant is terminal for its invocation; nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// Request arguments were missing or malformed
    InvalidArguments { reason: String },

    /// No bundled asset exists for the attempted lookup key
    AssetMissing { lookup_key: String },

    /// Opening, decoding, or starting the playback resource failed
    AudioFailure { reason: String },
}

impl ErrorCode for PlaybackError {
    fn code(&self) -> &'static str {
        match self {
            PlaybackError::InvalidArguments { .. } => PlaybackErrorCodes::INVALID_ARGS,
            PlaybackError::AssetMissing { .. } => PlaybackErrorCodes::ASSET_MISSING,
            PlaybackError::AudioFailure { .. } => PlaybackErrorCodes::AUDIO_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            PlaybackError::InvalidArguments { reason } => {
                format!("Invalid soundName: {}", reason)
            }
            PlaybackError::AssetMissing { lookup_key } => {
                format!("Could not find asset: {}", lookup_key)
            }
            PlaybackError::AudioFailure { reason } => {
                format!("Failed to play sound: {}", reason)
            }
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for PlaybackError {}

/// Convert from std::io::Error to PlaybackError
impl From<std::io::Error> for PlaybackError {
    fn from(err: std::io::Error) -> Self {
        PlaybackError::AudioFailure {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_error_codes() {
        assert_eq!(
            PlaybackError::InvalidArguments {
                reason: "test".to_string()
            }
            .code(),
            PlaybackErrorCodes::INVALID_ARGS
        );
        assert_eq!(
            PlaybackError::AssetMissing {
                lookup_key: "assets/sounds/shutter.wav".to_string()
            }
            .code(),
            PlaybackErrorCodes::ASSET_MISSING
        );
        assert_eq!(
            PlaybackError::AudioFailure {
                reason: "test".to_string()
            }
            .code(),
            PlaybackErrorCodes::AUDIO_ERROR
        );
    }

    #[test]
    fn test_playback_error_messages() {
        let err = PlaybackError::InvalidArguments {
            reason: "soundName must be a string".to_string(),
        };
        assert!(err.message().contains("soundName must be a string"));

        let err = PlaybackError::AssetMissing {
            lookup_key: "assets/sounds/missing_sound.wav".to_string(),
        };
        assert_eq!(
            err.message(),
            "Could not find asset: assets/sounds/missing_sound.wav"
        );

        let err = PlaybackError::AudioFailure {
            reason: "unsupported codec".to_string(),
        };
        assert_eq!(err.message(), "Failed to play sound: unsupported codec");
    }

    #[test]
    fn test_playback_error_display() {
        let err = PlaybackError::AssetMissing {
            lookup_key: "assets/sounds/shutter.wav".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.starts_with("ASSET_MISSING"));
        assert!(display.contains("assets/sounds/shutter.wav"));
    }

    #[test]
    fn test_error_code_getters() {
        assert_eq!(PlaybackErrorCodes::invalid_args(), "INVALID_ARGS");
        assert_eq!(PlaybackErrorCodes::asset_missing(), "ASSET_MISSING");
        assert_eq!(PlaybackErrorCodes::audio_error(), "AUDIO_ERROR");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::other("device gone");
        let err: PlaybackError = io_err.into();
        match err {
            PlaybackError::AudioFailure { reason } => {
                assert!(reason.contains("device gone"));
            }
            _ => panic!("Expected AudioFailure"),
        }
    }

    #[test]
    fn test_error_propagation() {
        fn may_fail() -> Result<(), PlaybackError> {
            Err(PlaybackError::AssetMissing {
                lookup_key: "assets/sounds/x.wav".to_string(),
            })
        }

        fn caller() -> Result<(), PlaybackError> {
            may_fail()?;
            Ok(())
        }

        assert!(caller().is_err());
    }
}
