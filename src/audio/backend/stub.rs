use std::path::Path;

use super::{AudioBackend, Voice};
use crate::error::PlaybackError;

/// Inert backend used for deterministic testing and CLI dry runs.
///
/// Accepts every start request without touching audio hardware, so table
/// semantics can be exercised on machines with no output device. The
/// failing variant makes every construction fail to cover the
/// resource-construction error path.
pub struct StubBackend {
    fail_reason: Option<String>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self { fail_reason: None }
    }

    /// A stub whose every `start_voice` fails with the given reason.
    pub fn failing<S: Into<String>>(reason: S) -> Self {
        Self {
            fail_reason: Some(reason.into()),
        }
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for StubBackend {
    fn start_voice(&mut self, _path: &Path, _volume: f32) -> Result<Voice, PlaybackError> {
        if let Some(reason) = &self.fail_reason {
            return Err(PlaybackError::AudioFailure {
                reason: reason.clone(),
            });
        }
        Ok(Voice::inert())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_accepts_any_path() {
        let mut backend = StubBackend::new();
        assert!(backend
            .start_voice(Path::new("anything.wav"), 1.0)
            .is_ok());
    }

    #[test]
    fn test_failing_stub_reports_audio_failure() {
        let mut backend = StubBackend::failing("simulated device loss");
        let err = backend
            .start_voice(Path::new("anything.wav"), 1.0)
            .expect_err("must fail");
        match err {
            PlaybackError::AudioFailure { reason } => {
                assert_eq!(reason, "simulated device loss");
            }
            other => panic!("Expected AudioFailure, got {:?}", other),
        }
    }
}
