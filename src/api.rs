// Public API for flutter_rust_bridge integration
// This module provides FFI functions for the shell to drive the sound channel

#![allow(dead_code)] // FFI functions are called from Dart, not detected by Rust analyzer

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::channel::{Gateway, MethodResponse};
use crate::context::AppContext;
use crate::error::PlaybackError;

// Re-export error code constants for FFI exposure
pub use crate::error::PlaybackErrorCodes;

/// Global AppContext instance - the registry behind the FFI edge
///
/// All state (asset resolver, audio backend, active-voice table) lives in
/// this one context; it exists so the generated bridge functions have a
/// stable owner, and it is the only ambient global in the crate.
static APP_CONTEXT: Lazy<AppContext> = Lazy::new(AppContext::new);

/// Initialize the audio layer
///
/// Installs platform logging and points the asset resolver at the app
/// bundle directory the shell resolved at startup. Safe to call more than
/// once; later calls only re-point the bundle root.
///
/// # Arguments
/// * `bundle_dir` - Directory containing the flattened asset bundle
///
/// # Returns
/// * `Ok(())` - Audio layer ready
/// * `Err(PlaybackError)` - Lock poisoning on the player state
#[flutter_rust_bridge::frb]
pub fn init_app(bundle_dir: String) -> Result<(), PlaybackError> {
    crate::init_logging();
    log::info!("[Api] audio layer initialized, bundle at {}", bundle_dir);
    APP_CONTEXT.set_bundle_root(bundle_dir)
}

/// Handle one method-channel invocation
///
/// This is the channel entry point the shell forwards `retro_cam_audio`
/// traffic to. The argument map travels as a JSON document; the reply is
/// the single terminal response for the invocation (success, not
/// implemented, or a structured error).
///
/// # Arguments
/// * `method` - Invoked method name
/// * `arguments_json` - JSON object with the invocation arguments, if any
#[flutter_rust_bridge::frb]
pub fn handle_method_call(method: String, arguments_json: Option<String>) -> MethodResponse {
    Gateway::new(&APP_CONTEXT).handle_raw(&method, arguments_json.as_deref())
}

/// Play a bundled system sound by name
///
/// Typed convenience entry with the same semantics as sending
/// `playSystemSound` through [handle_method_call].
///
/// # Arguments
/// * `sound_name` - Logical sound name (resolves to `assets/sounds/<name>.wav`)
///
/// # Returns
/// * `Ok(())` - Playback started and the resource is retained
/// * `Err(PlaybackError)` - Validation, resolution, or construction failed
#[flutter_rust_bridge::frb]
pub fn play_system_sound(sound_name: String) -> Result<(), PlaybackError> {
    APP_CONTEXT.play_system_sound(&sound_name)
}

/// Names of the sounds whose playback resources are currently retained
#[flutter_rust_bridge::frb(sync)]
pub fn active_sounds() -> Vec<String> {
    APP_CONTEXT.active_sounds()
}

/// Get the version of the audio layer
#[flutter_rust_bridge::frb(sync)]
pub fn get_version() -> Result<String> {
    Ok(env!("CARGO_PKG_VERSION").to_string())
}

/// Get PlaybackErrorCodes as a structured object with all error code constants
#[flutter_rust_bridge::frb(sync)]
pub fn get_playback_error_codes() -> PlaybackErrorCodes {
    PlaybackErrorCodes {}
}
