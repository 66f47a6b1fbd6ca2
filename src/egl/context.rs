//=========================================================================
// Context Factories
//
// Strategies creating and destroying rendering contexts for a chosen
// configuration. The regular factory targets GLES 2 or 3 and can request
// debug contexts; VR factories are vendor-supplied and opaque.
//
//=========================================================================

use log::{info, warn};

use super::{GlConfig, GlContextHandle, GlDriver, GlError};

//=== ContextFactory ======================================================

/// Strategy creating/destroying a rendering context for a chosen config.
pub trait ContextFactory: Send {
    /// Creates a context for the config.
    fn create_context(
        &self,
        driver: &dyn GlDriver,
        config: &GlConfig,
    ) -> Result<GlContextHandle, GlError>;

    /// Destroys a context previously created by this factory.
    fn destroy_context(&self, driver: &dyn GlDriver, context: GlContextHandle);
}

//=== RegularContextFactory ===============================================

/// Context factory for non-VR rendering.
///
/// Selects the GLES client version at construction and can mark created
/// contexts as debug contexts, which enables driver-side validation at a
/// performance cost.
#[derive(Debug, Clone, Copy)]
pub struct RegularContextFactory {
    use_gles3: bool,
    debug: bool,
}

impl RegularContextFactory {
    pub fn new(use_gles3: bool, debug: bool) -> Self {
        Self { use_gles3, debug }
    }

    /// The GLES client version contexts will target.
    pub fn client_version(&self) -> u32 {
        if self.use_gles3 {
            3
        } else {
            2
        }
    }
}

impl ContextFactory for RegularContextFactory {
    fn create_context(
        &self,
        driver: &dyn GlDriver,
        config: &GlConfig,
    ) -> Result<GlContextHandle, GlError> {
        let version = self.client_version();
        info!(
            target: "egl",
            "Creating GLES {} context (debug: {})",
            version,
            self.debug
        );
        driver.create_context(config, version, self.debug)
    }

    fn destroy_context(&self, driver: &dyn GlDriver, context: GlContextHandle) {
        if let Err(e) = driver.destroy_context(context) {
            // Nothing to recover here; the display owns the storage.
            warn!(target: "egl", "Context destruction failed: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
