//=========================================================================
// Pointer Icon Cache
//
// Maps pointer-type identifiers to decoded cursor bitmaps with their
// hotspots. Populated lazily through explicit configuration calls;
// entries live as long as the owning view.
//
// Failure policy: any failure while loading or decoding (empty path,
// missing file, I/O error, malformed image) removes the cached entry for
// that pointer type, so resolution regresses to the platform-default
// icon. Failures stay silent to the caller; they are logged at debug
// level for diagnosis.
//
//=========================================================================

//=== External Crates =====================================================

use image::RgbaImage;
use log::debug;
use std::collections::HashMap;
use std::io::Read;

//=== Internal Imports ====================================================

use crate::assets::AssetSource;

//=== PointerIcon =========================================================

/// A decoded custom cursor: bitmap plus hotspot.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerIcon {
    /// Decoded cursor bitmap, RGBA8.
    pub bitmap: RgbaImage,

    /// Hotspot x offset within the bitmap.
    pub hotspot_x: f32,

    /// Hotspot y offset within the bitmap.
    pub hotspot_y: f32,
}

//=== PointerIconResolution ===============================================

/// Result of resolving a pointer type to an icon.
#[derive(Debug, PartialEq)]
pub enum PointerIconResolution<'a> {
    /// A custom icon was configured for this type.
    Custom(&'a PointerIcon),

    /// No custom icon; the platform default for this type applies.
    SystemDefault(i32),
}

//=== PointerIconCache ====================================================

/// Cache of custom pointer icons, keyed by pointer type.
///
/// Keys are unique per type; repeat configuration overwrites.
#[derive(Debug, Default)]
pub struct PointerIconCache {
    icons: HashMap<i32, PointerIcon>,
}

impl PointerIconCache {
    pub fn new() -> Self {
        Self {
            icons: HashMap::new(),
        }
    }

    /// Configures the icon for `pointer_type` from an image at `path`.
    ///
    /// The path is probed on the device filesystem first, then in the
    /// bundled assets. On any failure the previously cached icon for the
    /// type is removed and the platform default applies on next lookup.
    pub fn configure(
        &mut self,
        assets: &dyn AssetSource,
        pointer_type: i32,
        path: &str,
        hotspot_x: f32,
        hotspot_y: f32,
    ) {
        match Self::load_bitmap(assets, path) {
            Ok(bitmap) => {
                self.icons.insert(
                    pointer_type,
                    PointerIcon {
                        bitmap,
                        hotspot_x,
                        hotspot_y,
                    },
                );
            }
            Err(reason) => {
                debug!(
                    target: "pointer",
                    "Pointer icon load failed for type {} ({:?}): {}",
                    pointer_type,
                    path,
                    reason
                );
                self.icons.remove(&pointer_type);
            }
        }
    }

    /// Resolves the icon for a pointer type.
    pub fn resolve(&self, pointer_type: i32) -> PointerIconResolution<'_> {
        match self.icons.get(&pointer_type) {
            Some(icon) => PointerIconResolution::Custom(icon),
            None => PointerIconResolution::SystemDefault(pointer_type),
        }
    }

    /// Number of configured custom icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    fn load_bitmap(assets: &dyn AssetSource, path: &str) -> Result<RgbaImage, String> {
        if path.is_empty() {
            return Err("empty image path".into());
        }

        if assets.filesystem_file_exists(path) {
            let decoded = image::open(path).map_err(|e| e.to_string())?;
            return Ok(decoded.to_rgba8());
        }

        if assets.asset_file_exists(path) {
            let mut bytes = Vec::new();
            assets
                .open_asset(path)
                .map_err(|e| e.to_string())?
                .read_to_end(&mut bytes)
                .map_err(|e| e.to_string())?;
            let decoded = image::load_from_memory(&bytes).map_err(|e| e.to_string())?;
            return Ok(decoded.to_rgba8());
        }

        Err("not found in filesystem or assets".into())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
