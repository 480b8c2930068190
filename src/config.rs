//! Configuration for the audio layer
//!
//! Runtime configuration loading from a JSON file bundled next to the
//! sound assets. The defaults reproduce the stock behavior (full-scale
//! volume, `assets/sounds` directory); the file exists so sound placement
//! and output level can be adjusted without recompiling the native layer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub audio: AudioConfig,
}

/// Sound playback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Logical directory inside the bundle that holds the system sounds
    pub sounds_dir: String,
    /// Output volume for started sounds (1.0 = full scale, no attenuation)
    pub playback_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sounds_dir: crate::assets::SOUND_ASSET_DIR.to_string(),
            playback_volume: 1.0,
        }
    }
}

impl Default for AppConfig {
    /// Default configuration values (fallback if config file not found)
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the default configuration if the file
    /// is absent or fails to parse (logged as a warning either way).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from the conventional location inside a bundle.
    pub fn load_from_bundle<P: AsRef<Path>>(bundle_root: P) -> Self {
        Self::load_from_file(bundle_root.as_ref().join("assets/audio_config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.audio.sounds_dir, "assets/sounds");
        assert_eq!(config.audio.playback_volume, 1.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from_file("/nonexistent/audio_config.json");
        assert_eq!(config.audio.playback_volume, 1.0);
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("audio_config.json");
        std::fs::write(&path, "{not json").expect("write");

        let config = AppConfig::load_from_file(&path);
        assert_eq!(config.audio.sounds_dir, "assets/sounds");
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.audio.sounds_dir, config.audio.sounds_dir);
        assert_eq!(parsed.audio.playback_volume, config.audio.playback_volume);
    }
}
