//! Rodio audio backend
//!
//! Decodes the resolved WAV asset and plays it through the default output
//! device. One sink per started sound; the output stream is opened on the
//! first play and kept for the life of the process.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::{AudioBackend, Voice};
use crate::error::PlaybackError;

/// Rodio-based audio backend.
pub struct RodioBackend {
    stream_handle: Option<OutputStreamHandle>,
}

impl RodioBackend {
    pub fn new() -> Self {
        Self {
            stream_handle: None,
        }
    }

    /// Open the default output stream on first use and hand out its handle.
    fn output_handle(&mut self) -> Result<OutputStreamHandle, PlaybackError> {
        if let Some(handle) = &self.stream_handle {
            return Ok(handle.clone());
        }

        let (stream, handle) =
            OutputStream::try_default().map_err(|err| PlaybackError::AudioFailure {
                reason: format!("failed to open audio output: {}", err),
            })?;

        // The output stream must outlive every sink. The sound player is
        // process-wide state with no teardown, so the stream is kept alive
        // for the remainder of the process.
        std::mem::forget(stream);
        self.stream_handle = Some(handle.clone());
        info!("[RodioBackend] audio output opened");
        Ok(handle)
    }
}

impl AudioBackend for RodioBackend {
    fn start_voice(&mut self, path: &Path, volume: f32) -> Result<Voice, PlaybackError> {
        // Decode before touching the output device so a corrupt asset fails
        // the same way with or without audio hardware present.
        let file = File::open(path).map_err(|err| PlaybackError::AudioFailure {
            reason: format!("failed to open {}: {}", path.display(), err),
        })?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|err| PlaybackError::AudioFailure {
                reason: format!("failed to decode {}: {}", path.display(), err),
            })?;

        let handle = self.output_handle()?;
        let sink = Sink::try_new(&handle).map_err(|err| PlaybackError::AudioFailure {
            reason: format!("failed to create sink: {}", err),
        })?;

        sink.set_volume(volume);
        // Appending starts playback immediately; completion is not observed.
        sink.append(source);
        debug!("[RodioBackend] voice started for {}", path.display());

        Ok(Voice::from_sink(sink))
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}
