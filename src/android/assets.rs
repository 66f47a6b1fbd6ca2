//=========================================================================
// Android Asset Source
//
// `AssetSource` over the platform asset manager. Filesystem probes use
// plain paths; asset probes go through the APK's bundled assets.
//
//=========================================================================

use ndk::asset::AssetManager;
use std::ffi::CString;
use std::io::{self, Read};
use std::path::Path;

use crate::assets::AssetSource;

/// Asset source over the application's `AssetManager`.
pub struct AndroidAssetSource {
    manager: AssetManager,
}

// AAssetManager is documented thread-safe; individual assets are opened
// per call and never shared.
unsafe impl Send for AndroidAssetSource {}

impl AndroidAssetSource {
    pub fn new(manager: AssetManager) -> Self {
        Self { manager }
    }

    fn c_path(path: &str) -> Option<CString> {
        CString::new(path).ok()
    }
}

impl AssetSource for AndroidAssetSource {
    fn filesystem_file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn asset_file_exists(&self, path: &str) -> bool {
        Self::c_path(path)
            .map(|p| self.manager.open(&p).is_some())
            .unwrap_or(false)
    }

    fn open_asset(&self, path: &str) -> io::Result<Box<dyn Read>> {
        let c_path = Self::c_path(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;
        let asset = self
            .manager
            .open(&c_path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))?;
        Ok(Box::new(asset))
    }
}
