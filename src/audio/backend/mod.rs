//! Backend abstractions for sound playback.

use std::path::Path;

use crate::error::PlaybackError;

/// Trait implemented by platform audio backends.
///
/// A backend turns a resolved asset path into a live playback resource.
/// Starting a voice is fire-and-forget: the returned [Voice] only keeps the
/// resource referenced, no completion callback is registered.
pub trait AudioBackend: Send {
    fn start_voice(&mut self, path: &Path, volume: f32) -> Result<Voice, PlaybackError>;
}

/// A live playback resource retained by the active-player table.
///
/// Dropping a voice releases the underlying resource; [Voice::detach] lets
/// the sound play out on its own after the table entry is replaced.
pub struct Voice {
    inner: VoiceInner,
}

enum VoiceInner {
    Rodio(::rodio::Sink),
    Stub,
}

impl std::fmt::Debug for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variant = match self.inner {
            VoiceInner::Rodio(_) => "Rodio",
            VoiceInner::Stub => "Stub",
        };
        f.debug_struct("Voice").field("inner", &variant).finish()
    }
}

impl Voice {
    pub(crate) fn from_sink(sink: ::rodio::Sink) -> Self {
        Self {
            inner: VoiceInner::Rodio(sink),
        }
    }

    pub(crate) fn inert() -> Self {
        Self {
            inner: VoiceInner::Stub,
        }
    }

    /// Release the table's reference without stopping playback.
    ///
    /// The detached sound keeps rendering in the platform audio subsystem
    /// until it finishes naturally.
    pub fn detach(self) {
        match self.inner {
            VoiceInner::Rodio(sink) => sink.detach(),
            VoiceInner::Stub => {}
        }
    }
}

mod rodio;
pub use rodio::RodioBackend;

mod stub;
pub use stub::StubBackend;
