// AppContext: per-instance registry for the audio layer
//
// Owns the sound player (and through it the active-voice table) on behalf
// of whichever host constructed it: the FFI edge, the CLI harness, or a
// test. State lives exactly as long as the owning context.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::audio::SoundPlayer;
use crate::error::{log_playback_error, PlaybackError};

/// Registry owning all mutable audio-layer state.
///
/// The player sits behind a mutex only because the FFI edge requires the
/// context to be shareable; the host shell drives the channel from a
/// single execution context, so the lock is uncontended in practice.
pub struct AppContext {
    player: Mutex<SoundPlayer>,
}

impl AppContext {
    /// Create a context whose player reads assets from the process working
    /// directory. The FFI edge re-points it at the real bundle during
    /// `init_app`.
    pub fn new() -> Self {
        Self::with_player(SoundPlayer::new("."))
    }

    /// Create a context reading assets from `bundle_root`.
    pub fn with_bundle_root<P: Into<PathBuf>>(bundle_root: P) -> Self {
        Self::with_player(SoundPlayer::new(bundle_root))
    }

    /// Create a context around an explicitly assembled player.
    pub fn with_player(player: SoundPlayer) -> Self {
        Self {
            player: Mutex::new(player),
        }
    }

    /// Safely acquire the player lock.
    ///
    /// A poisoned lock means a prior invocation panicked mid-play; there
    /// is no dedicated wire code for that, so it surfaces as AUDIO_ERROR.
    fn lock_player(&self) -> Result<MutexGuard<'_, SoundPlayer>, PlaybackError> {
        self.player
            .lock()
            .map_err(|_| PlaybackError::AudioFailure {
                reason: "sound player state poisoned".to_string(),
            })
    }

    /// Point the player at a different bundle root.
    pub fn set_bundle_root<P: Into<PathBuf>>(&self, bundle_root: P) -> Result<(), PlaybackError> {
        let mut player = self.lock_player().map_err(|err| {
            log_playback_error(&err, "set_bundle_root");
            err
        })?;
        player.set_bundle_root(bundle_root);
        Ok(())
    }

    /// Play the bundled sound named `sound_name`.
    ///
    /// # Errors
    /// - `InvalidArguments` - empty sound name
    /// - `AssetMissing` - no bundled asset for the name
    /// - `AudioFailure` - resource construction/start failed, or lock poisoned
    pub fn play_system_sound(&self, sound_name: &str) -> Result<(), PlaybackError> {
        let mut player = self.lock_player().map_err(|err| {
            log_playback_error(&err, "play_system_sound");
            err
        })?;
        player.play(sound_name).map_err(|err| {
            log_playback_error(&err, "play_system_sound");
            err
        })
    }

    /// Names of the sounds currently retained by the player, sorted.
    pub fn active_sounds(&self) -> Vec<String> {
        self.player
            .lock()
            .map(|player| player.active_sounds())
            .unwrap_or_default()
    }

    /// Number of retained playback resources.
    pub fn active_sound_count(&self) -> usize {
        self.player
            .lock()
            .map(|player| player.active_sound_count())
            .unwrap_or(0)
    }

    /// Whether a playback resource is retained under `sound_name`.
    pub fn is_sound_active(&self, sound_name: &str) -> bool {
        self.player
            .lock()
            .map(|player| player.is_sound_active(sound_name))
            .unwrap_or(false)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BundleResolver;
    use crate::audio::StubBackend;
    use crate::config::AudioConfig;
    use crate::error::{ErrorCode, PlaybackErrorCodes};
    use std::fs;

    fn stub_context(sounds: &[&str]) -> (AppContext, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let sounds_dir = dir.path().join("assets/sounds");
        fs::create_dir_all(&sounds_dir).expect("create sounds dir");
        for name in sounds {
            crate::synth::write_sound(name, &sounds_dir.join(format!("{name}.wav")))
                .expect("synthesize sound");
        }
        let player = SoundPlayer::with_parts(
            Box::new(BundleResolver::new(dir.path())),
            Box::new(StubBackend::new()),
            AudioConfig::default(),
        );
        (AppContext::with_player(player), dir)
    }

    #[test]
    fn test_context_starts_empty() {
        let (context, _bundle) = stub_context(&[]);
        assert_eq!(context.active_sound_count(), 0);
        assert!(context.active_sounds().is_empty());
    }

    #[test]
    fn test_play_registers_sound() {
        let (context, _bundle) = stub_context(&["shutter"]);
        context
            .play_system_sound("shutter")
            .expect("play should succeed");
        assert!(context.is_sound_active("shutter"));
        assert_eq!(context.active_sound_count(), 1);
    }

    #[test]
    fn test_play_missing_sound_fails_without_side_effects() {
        let (context, _bundle) = stub_context(&[]);
        let err = context
            .play_system_sound("missing_sound")
            .expect_err("must fail");
        assert_eq!(err.code(), PlaybackErrorCodes::ASSET_MISSING);
        assert_eq!(context.active_sound_count(), 0);
    }

    #[test]
    fn test_set_bundle_root_repoints_resolver() {
        let (context, _bundle) = stub_context(&[]);
        let other = tempfile::tempdir().expect("tempdir");
        let sounds_dir = other.path().join("assets/sounds");
        fs::create_dir_all(&sounds_dir).expect("create sounds dir");
        crate::synth::write_sound("click", &sounds_dir.join("click.wav")).expect("synthesize");

        context
            .set_bundle_root(other.path())
            .expect("set_bundle_root");
        context.play_system_sound("click").expect("play after repoint");
        assert!(context.is_sound_active("click"));
    }

    #[test]
    fn test_parallel_contexts_are_isolated() {
        let (ctx1, _bundle1) = stub_context(&["shutter"]);
        let (ctx2, _bundle2) = stub_context(&["shutter"]);

        ctx1.play_system_sound("shutter").expect("play");
        assert_eq!(ctx1.active_sound_count(), 1);
        assert_eq!(ctx2.active_sound_count(), 0);
    }
}
