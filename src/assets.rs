//=========================================================================
// Asset Access Boundary
//
// The filesystem/asset collaborator the bridge reads cursor bitmaps
// through. Paths may name a file on the device filesystem or an entry in
// the application's bundled assets; the bridge probes both, filesystem
// first.
//
//=========================================================================

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

//=== AssetSource =========================================================

/// Read-only access to device files and bundled assets.
///
/// The Android implementation wraps the platform asset manager; desktop
/// builds and tests use [`DirectoryAssetSource`].
pub trait AssetSource: Send {
    /// Whether `path` names an existing file on the device filesystem.
    fn filesystem_file_exists(&self, path: &str) -> bool;

    /// Whether `path` names an entry in the bundled assets.
    fn asset_file_exists(&self, path: &str) -> bool;

    /// Opens a bundled asset for reading.
    fn open_asset(&self, path: &str) -> io::Result<Box<dyn Read>>;
}

//=== DirectoryAssetSource ================================================

/// Asset source rooted at a directory, standing in for the bundled-asset
/// store on desktop builds and in tests. Filesystem probes use absolute
/// paths as-is.
#[derive(Debug, Clone)]
pub struct DirectoryAssetSource {
    root: PathBuf,
}

impl DirectoryAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn asset_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl AssetSource for DirectoryAssetSource {
    fn filesystem_file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn asset_file_exists(&self, path: &str) -> bool {
        self.asset_path(path).is_file()
    }

    fn open_asset(&self, path: &str) -> io::Result<Box<dyn Read>> {
        let file = File::open(self.asset_path(path))?;
        Ok(Box::new(file))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
