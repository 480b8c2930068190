//! Integration tests for the method channel and AppContext
//!
//! These tests validate one playSystemSound invocation end to end across
//! the Rust layer, including:
//! - Gateway dispatch (method matching, argument validation)
//! - Bundle asset resolution against real files on disk
//! - Active-voice table semantics (registration, replacement, no side
//!   effects on failure)
//! - Error propagation with wire codes and messages
//!
//! The success paths run on the stub backend so they stay deterministic on
//! machines without an audio device; one guarded test exercises the real
//! rodio backend when a device is present.

use std::fs;
use std::path::Path;

use retro_cam_audio::assets::BundleResolver;
use retro_cam_audio::audio::{RodioBackend, SoundPlayer, StubBackend};
use retro_cam_audio::channel::{Gateway, MethodCall, MethodResponse, METHOD_PLAY_SYSTEM_SOUND};
use retro_cam_audio::config::AudioConfig;
use retro_cam_audio::context::AppContext;
use retro_cam_audio::error::{PlaybackError, PlaybackErrorCodes};
use retro_cam_audio::synth;

/// Write the named sounds into `<root>/assets/sounds/` as real WAVs.
fn populate_bundle(root: &Path, sounds: &[&str]) {
    let sounds_dir = root.join("assets/sounds");
    fs::create_dir_all(&sounds_dir).expect("create sounds dir");
    for name in sounds {
        synth::write_sound(name, &sounds_dir.join(format!("{name}.wav")))
            .expect("synthesize sound");
    }
}

fn stub_context(sounds: &[&str]) -> (AppContext, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    populate_bundle(dir.path(), sounds);
    let player = SoundPlayer::with_parts(
        Box::new(BundleResolver::new(dir.path())),
        Box::new(StubBackend::new()),
        AudioConfig::default(),
    );
    (AppContext::with_player(player), dir)
}

fn expect_error(response: &MethodResponse) -> (&str, &str) {
    match response {
        MethodResponse::Error { code, message } => (code.as_str(), message.as_str()),
        other => panic!("Expected error response, got {:?}", other),
    }
}

/// Any method other than playSystemSound is a defined no-op outcome.
#[test]
fn test_unknown_method_is_not_implemented() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    for method in ["setFlashMode", "stopSystemSound", "playsystemsound", ""] {
        let response = gateway.handle(&MethodCall::new(method, None));
        assert_eq!(
            response,
            MethodResponse::NotImplemented,
            "method '{method}' must be not-implemented"
        );
    }
    assert_eq!(context.active_sound_count(), 0);
}

/// Missing arguments map produces INVALID_ARGS and leaves the table alone.
#[test]
fn test_null_arguments_is_invalid_args() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    let response = gateway.handle(&MethodCall::new(METHOD_PLAY_SYSTEM_SOUND, None));
    let (code, _message) = expect_error(&response);
    assert_eq!(code, PlaybackErrorCodes::INVALID_ARGS);
    assert_eq!(context.active_sound_count(), 0);
}

/// A non-string soundName produces INVALID_ARGS.
#[test]
fn test_non_string_sound_name_is_invalid_args() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    let response = gateway.handle_raw(METHOD_PLAY_SYSTEM_SOUND, Some(r#"{"soundName": 7}"#));
    let (code, _message) = expect_error(&response);
    assert_eq!(code, PlaybackErrorCodes::INVALID_ARGS);
    assert_eq!(context.active_sound_count(), 0);
}

/// An empty soundName is rejected before any resolution happens.
#[test]
fn test_empty_sound_name_is_invalid_args() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    let response = gateway.handle(&MethodCall::play_system_sound(""));
    let (code, _message) = expect_error(&response);
    assert_eq!(code, PlaybackErrorCodes::INVALID_ARGS);
    assert_eq!(context.active_sound_count(), 0);
}

/// Scenario from the protocol: {soundName: "missing_sound"} with no such
/// asset reports ASSET_MISSING and names the attempted lookup key.
#[test]
fn test_missing_asset_reports_lookup_key() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    let response = gateway.handle(&MethodCall::play_system_sound("missing_sound"));
    let (code, message) = expect_error(&response);
    assert_eq!(code, PlaybackErrorCodes::ASSET_MISSING);
    assert!(
        message.contains("assets/sounds/missing_sound.wav"),
        "message must name the lookup key, got: {message}"
    );
    assert_eq!(context.active_sound_count(), 0);
}

/// Scenario from the protocol: {soundName: "shutter"} with a valid bundled
/// WAV succeeds and retains exactly one entry under "shutter".
#[test]
fn test_shutter_scenario() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    let response = gateway.handle(&MethodCall::play_system_sound("shutter"));
    assert_eq!(response, MethodResponse::Success);
    assert_eq!(context.active_sounds(), vec!["shutter".to_string()]);
}

/// Two successful requests for the same name leave exactly one entry.
#[test]
fn test_replay_keeps_single_entry() {
    let (context, _bundle) = stub_context(&["shutter"]);
    let gateway = Gateway::new(&context);

    let first = gateway.handle(&MethodCall::play_system_sound("shutter"));
    let second = gateway.handle(&MethodCall::play_system_sound("shutter"));
    assert_eq!(first, MethodResponse::Success);
    assert_eq!(second, MethodResponse::Success);
    assert_eq!(context.active_sounds(), vec!["shutter".to_string()]);
}

/// Each bundled sound registers under its own name.
#[test]
fn test_full_bundled_set_plays() {
    let (context, _bundle) = stub_context(synth::BUNDLED_SOUNDS);
    let gateway = Gateway::new(&context);

    for name in synth::BUNDLED_SOUNDS {
        let response = gateway.handle(&MethodCall::play_system_sound(name));
        assert_eq!(response, MethodResponse::Success, "sound '{name}' failed");
    }
    assert_eq!(context.active_sound_count(), synth::BUNDLED_SOUNDS.len());
}

/// The raw JSON entry point behaves like the typed one end to end.
#[test]
fn test_raw_json_invocation_round_trip() {
    let (context, _bundle) = stub_context(&["click"]);
    let gateway = Gateway::new(&context);

    let response = gateway.handle_raw(METHOD_PLAY_SYSTEM_SOUND, Some(r#"{"soundName":"click"}"#));
    assert_eq!(response, MethodResponse::Success);

    let wire = serde_json::to_value(&response).expect("serialize response");
    assert_eq!(wire["status"], "success");
    assert!(context.is_sound_active("click"));
}

/// A failure after resolution (resource construction) retains nothing.
#[test]
fn test_construction_failure_has_no_side_effects() {
    let dir = tempfile::tempdir().expect("tempdir");
    populate_bundle(dir.path(), &["shutter"]);
    let player = SoundPlayer::with_parts(
        Box::new(BundleResolver::new(dir.path())),
        Box::new(StubBackend::failing("simulated decoder failure")),
        AudioConfig::default(),
    );
    let context = AppContext::with_player(player);
    let gateway = Gateway::new(&context);

    let response = gateway.handle(&MethodCall::play_system_sound("shutter"));
    let (code, message) = expect_error(&response);
    assert_eq!(code, PlaybackErrorCodes::AUDIO_ERROR);
    assert!(message.contains("simulated decoder failure"));
    assert_eq!(context.active_sound_count(), 0);
}

/// Real backend: plays a synthesized WAV through rodio when a device is
/// available, and fails only at the device layer otherwise.
#[test]
fn test_rodio_backend_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    populate_bundle(dir.path(), &["click"]);
    let player = SoundPlayer::with_parts(
        Box::new(BundleResolver::new(dir.path())),
        Box::new(RodioBackend::new()),
        AudioConfig::default(),
    );
    let context = AppContext::with_player(player);

    match context.play_system_sound("click") {
        Ok(()) => {
            assert!(context.is_sound_active("click"));
        }
        // May fail in CI/test environments without an audio device.
        Err(PlaybackError::AudioFailure { reason }) => {
            assert!(
                reason.contains("audio output") || reason.contains("sink"),
                "valid WAV should only fail at the device layer: {reason}"
            );
            assert_eq!(context.active_sound_count(), 0);
        }
        Err(other) => panic!("Expected AudioFailure, got {:?}", other),
    }
}
