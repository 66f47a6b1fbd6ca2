//=========================================================================
// Config Choosers
//
// Strategies selecting an EGL framebuffer configuration from those the
// display offers.
//
// The regular chooser is an explicit ordered fallback: candidates are
// tried in sequence and the first one the display satisfies wins. The
// chain runs from the precision the engine wants down to a format every
// device can provide, so surface setup degrades instead of failing.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, warn};

//=== Internal Imports ====================================================

use super::{GlConfig, GlDriver, GlError};

//=== ConfigSpec ==========================================================

/// Requested bit depths for a framebuffer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSpec {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
    pub depth: u32,
    pub stencil: u32,
}

impl ConfigSpec {
    /// 8-bit RGBA with the given depth-buffer precision.
    pub const fn rgba8888(depth: u32) -> Self {
        Self {
            red: 8,
            green: 8,
            blue: 8,
            alpha: 8,
            depth,
            stencil: 0,
        }
    }

    /// 5/6/5 opaque color with a 16-bit depth buffer. The end of the
    /// fallback chain: if a device cannot provide this, it cannot run
    /// the engine at all.
    pub const fn rgb565() -> Self {
        Self {
            red: 5,
            green: 6,
            blue: 5,
            alpha: 0,
            depth: 16,
            stencil: 0,
        }
    }
}

impl std::fmt::Display for ConfigSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "R{}G{}B{}A{} depth={} stencil={}",
            self.red, self.green, self.blue, self.alpha, self.depth, self.stencil
        )
    }
}

//=== ConfigChooser =======================================================

/// Strategy selecting a framebuffer configuration via the driver.
///
/// VR modes install vendor-provided implementations; everything else
/// uses [`FallbackConfigChooser`].
pub trait ConfigChooser: Send {
    /// Selects a config, or fails if the display offers nothing usable.
    fn choose_config(&self, driver: &dyn GlDriver) -> Result<GlConfig, GlError>;
}

//=== FallbackConfigChooser ===============================================

/// Ordered-fallback config chooser: tries each candidate spec in turn
/// and returns the first config the display satisfies.
#[derive(Debug, Clone)]
pub struct FallbackConfigChooser {
    candidates: Vec<ConfigSpec>,
}

impl FallbackConfigChooser {
    /// Builds a chooser over an explicit candidate list.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty.
    pub fn new(candidates: Vec<ConfigSpec>) -> Self {
        assert!(!candidates.is_empty(), "candidate list must not be empty");
        Self { candidates }
    }

    /// The standard chain for non-VR rendering: 8/8/8/8 with a 24-bit
    /// depth buffer, then 8/8/8/8 with 16-bit depth, then 5/6/5 with
    /// 16-bit depth. A translucent surface still needs the alpha-capable
    /// candidates first; the final 5/6/5 fallback ignores translucency,
    /// which beats not running at all.
    pub fn regular() -> Self {
        Self::new(vec![
            ConfigSpec::rgba8888(24),
            ConfigSpec::rgba8888(16),
            ConfigSpec::rgb565(),
        ])
    }

    /// The candidate list, in trial order.
    pub fn candidates(&self) -> &[ConfigSpec] {
        &self.candidates
    }
}

impl ConfigChooser for FallbackConfigChooser {
    fn choose_config(&self, driver: &dyn GlDriver) -> Result<GlConfig, GlError> {
        for (rank, spec) in self.candidates.iter().enumerate() {
            if let Some(config) = driver.choose_config(spec) {
                if rank > 0 {
                    debug!(
                        target: "egl",
                        "Fell back to config candidate {} ({})",
                        rank,
                        spec
                    );
                }
                return Ok(config);
            }
        }

        warn!(
            target: "egl",
            "No EGL config matched any of {} candidates",
            self.candidates.len()
        );
        Err(GlError::NoMatchingConfig)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
