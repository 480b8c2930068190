// SoundPlayer: named system-sound playback
//
// Owns the asset resolver, the audio backend, and the table of active
// playback resources keyed by sound name.

use std::collections::HashMap;
use std::path::PathBuf;

use log::{debug, info};

use crate::assets::{sound_asset_path_in, AssetResolver, BundleResolver};
use crate::audio::backend::{AudioBackend, RodioBackend, Voice};
use crate::config::AudioConfig;
use crate::error::PlaybackError;

/// Plays bundled system sounds by logical name.
///
/// Each successful play retains its playback resource in a per-instance
/// table under the sound name. At most one entry exists per name: a new
/// play for a retained name replaces the entry and detaches the previous
/// resource, which keeps sounding until it finishes on its own. Entries
/// are never removed otherwise; the table lives as long as the player.
pub struct SoundPlayer {
    resolver: Box<dyn AssetResolver + Send>,
    backend: Box<dyn AudioBackend + Send>,
    config: AudioConfig,
    active: HashMap<String, Voice>,
}

impl SoundPlayer {
    /// Create a player reading assets from `bundle_root` and playing
    /// through the default audio output.
    pub fn new<P: Into<PathBuf>>(bundle_root: P) -> Self {
        Self::with_parts(
            Box::new(BundleResolver::new(bundle_root)),
            Box::new(RodioBackend::new()),
            AudioConfig::default(),
        )
    }

    /// Create a player from explicit collaborators.
    ///
    /// Used by tests and the CLI to substitute the resolver or run without
    /// an audio device.
    pub fn with_parts(
        resolver: Box<dyn AssetResolver + Send>,
        backend: Box<dyn AudioBackend + Send>,
        config: AudioConfig,
    ) -> Self {
        Self {
            resolver,
            backend,
            config,
            active: HashMap::new(),
        }
    }

    /// Point the player at a different bundle root.
    ///
    /// Replaces only the resolver; active voices keep playing and stay
    /// retained in the table.
    pub fn set_bundle_root<P: Into<PathBuf>>(&mut self, bundle_root: P) {
        self.resolver = Box::new(BundleResolver::new(bundle_root));
    }

    /// Play the bundled sound named `sound_name`.
    ///
    /// Resolves `<sounds_dir>/<sound_name>.wav` through the bundle, builds
    /// a playback resource bound to the resolved file, starts it at the
    /// configured volume, and retains it under `sound_name` (replacing any
    /// prior entry for that name).
    ///
    /// # Errors
    /// - `InvalidArguments` - empty sound name
    /// - `AssetMissing` - no bundled asset for the lookup key
    /// - `AudioFailure` - resource construction or playback start failed
    ///
    /// Failures are terminal for the invocation and leave the table
    /// unchanged.
    pub fn play(&mut self, sound_name: &str) -> Result<(), PlaybackError> {
        validate_sound_name(sound_name)?;

        let logical = sound_asset_path_in(&self.config.sounds_dir, sound_name);
        let lookup_key = self.resolver.lookup_key(&logical);
        let path = self
            .resolver
            .resolve(&lookup_key)
            .ok_or(PlaybackError::AssetMissing { lookup_key })?;
        debug!("[SoundPlayer] resolved '{}' -> {}", sound_name, path.display());

        let voice = self
            .backend
            .start_voice(&path, self.config.playback_volume)?;

        if let Some(previous) = self.active.insert(sound_name.to_string(), voice) {
            // No stop is issued; the replaced sound plays out on its own.
            previous.detach();
        }
        info!(
            "[SoundPlayer] started '{}' at volume {}",
            sound_name, self.config.playback_volume
        );

        Ok(())
    }

    /// Names of the sounds currently retained in the table, sorted.
    pub fn active_sounds(&self) -> Vec<String> {
        let mut names: Vec<String> = self.active.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of retained playback resources.
    pub fn active_sound_count(&self) -> usize {
        self.active.len()
    }

    /// Whether a playback resource is retained under `sound_name`.
    pub fn is_sound_active(&self, sound_name: &str) -> bool {
        self.active.contains_key(sound_name)
    }
}

/// Validate the logical sound name from a playback request.
fn validate_sound_name(sound_name: &str) -> Result<(), PlaybackError> {
    if sound_name.is_empty() {
        return Err(PlaybackError::InvalidArguments {
            reason: "soundName must not be empty".to_string(),
        });
    }
    Ok(())
}
