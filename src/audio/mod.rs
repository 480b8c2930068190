// Sound playback service
//
// Resolves logical sound names against the asset bundle and drives the
// platform audio output through a backend seam.

pub mod backend;
pub mod player;

pub use backend::{AudioBackend, RodioBackend, StubBackend, Voice};
pub use player::SoundPlayer;
