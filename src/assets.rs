// Bundle asset resolution
//
// Translates logical asset paths into bundle lookup keys and lookup keys
// into absolute filesystem paths, mirroring how the host app's asset
// bundler registers resources. Resolution is read-only and has no side
// effects; a sound that is absent from the bundle simply fails to resolve.

use std::path::{Path, PathBuf};

/// Logical directory that holds the bundled system sounds.
pub const SOUND_ASSET_DIR: &str = "assets/sounds";

/// Build the logical asset path for a sound name.
///
/// The naming convention is deterministic and injective:
/// `assets/sounds/<sound_name>.wav`.
pub fn sound_asset_path(sound_name: &str) -> String {
    sound_asset_path_in(SOUND_ASSET_DIR, sound_name)
}

/// Build the logical asset path for a sound name under a configured
/// sounds directory.
pub fn sound_asset_path_in(sounds_dir: &str, sound_name: &str) -> String {
    format!("{}/{}.wav", sounds_dir, sound_name)
}

/// Trait implemented by asset-resolution collaborators.
///
/// The bundling layer owns the mapping from logical asset paths to the keys
/// registered in the application bundle, and from those keys to real files.
/// Keeping this behind a trait lets tests substitute a resolver without a
/// bundle on disk.
pub trait AssetResolver: Send {
    /// Translate a logical asset path into the bundle's lookup key.
    fn lookup_key(&self, logical_path: &str) -> String;

    /// Resolve a lookup key to an absolute path, or None if the bundle
    /// contains no such resource at call time.
    fn resolve(&self, lookup_key: &str) -> Option<PathBuf>;
}

/// Filesystem-backed resolver rooted at the application bundle directory.
///
/// The bundler registers logical asset paths verbatim as lookup keys, so
/// `lookup_key` is the identity mapping and `resolve` answers only for
/// regular files that exist under the bundle root.
pub struct BundleResolver {
    root: PathBuf,
}

impl BundleResolver {
    /// Create a resolver rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The bundle root directory this resolver reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for BundleResolver {
    fn lookup_key(&self, logical_path: &str) -> String {
        logical_path.to_string()
    }

    fn resolve(&self, lookup_key: &str) -> Option<PathBuf> {
        let path = self.root.join(lookup_key);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}
