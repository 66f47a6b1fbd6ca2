//=========================================================================
// Android EGL Driver
//
// `GlDriver` over the device's EGL implementation via khronos-egl.
// Operates on the default display; the primary window surface is owned
// by the embedder, so this driver only ever chooses configs and manages
// surfaceless (offscreen) contexts.
//
//=========================================================================

use khronos_egl as egl;
use log::debug;

use crate::egl::{ConfigSpec, GlConfig, GlContextHandle, GlDriver, GlError};

/// EGL-backed driver on the default display.
pub struct AndroidGlDriver {
    egl: egl::Instance<egl::Static>,
    display: egl::Display,
}

// EGL display handles are process-global and the display operations used
// here are thread-safe per the EGL spec.
unsafe impl Send for AndroidGlDriver {}

impl AndroidGlDriver {
    /// Initializes the default display and binds the GLES API.
    pub fn new() -> Result<Self, GlError> {
        let instance = egl::Instance::new(egl::Static);

        let display = unsafe { instance.get_display(egl::DEFAULT_DISPLAY) }
            .ok_or_else(|| GlError::DisplayInit("no default display".into()))?;

        let (major, minor) = instance
            .initialize(display)
            .map_err(|e| GlError::DisplayInit(e.to_string()))?;
        debug!(target: "egl", "EGL {}.{} initialized", major, minor);

        instance
            .bind_api(egl::OPENGL_ES_API)
            .map_err(|e| GlError::DisplayInit(e.to_string()))?;

        Ok(Self {
            egl: instance,
            display,
        })
    }
}

impl GlDriver for AndroidGlDriver {
    fn choose_config(&self, spec: &ConfigSpec) -> Option<GlConfig> {
        let attributes = [
            egl::RED_SIZE,
            spec.red as egl::Int,
            egl::GREEN_SIZE,
            spec.green as egl::Int,
            egl::BLUE_SIZE,
            spec.blue as egl::Int,
            egl::ALPHA_SIZE,
            spec.alpha as egl::Int,
            egl::DEPTH_SIZE,
            spec.depth as egl::Int,
            egl::STENCIL_SIZE,
            spec.stencil as egl::Int,
            egl::RENDERABLE_TYPE,
            egl::OPENGL_ES2_BIT,
            egl::NONE,
        ];

        self.egl
            .choose_first_config(self.display, &attributes)
            .ok()
            .flatten()
            .map(|config| GlConfig::from_raw(config.as_ptr() as u64))
    }

    fn create_context(
        &self,
        config: &GlConfig,
        client_version: u32,
        debug: bool,
    ) -> Result<GlContextHandle, GlError> {
        let config = unsafe { egl::Config::from_ptr(config.as_raw() as egl::EGLConfig) };

        let mut attributes = vec![egl::CONTEXT_MAJOR_VERSION, client_version as egl::Int];
        if debug {
            attributes.extend_from_slice(&[egl::CONTEXT_OPENGL_DEBUG, egl::TRUE as egl::Int]);
        }
        attributes.push(egl::NONE);

        self.egl
            .create_context(self.display, config, None, &attributes)
            .map(|context| GlContextHandle::from_raw(context.as_ptr() as u64))
            .map_err(|e| GlError::ContextCreation(e.to_string()))
    }

    fn make_current(&self, context: Option<&GlContextHandle>) -> Result<(), GlError> {
        let context =
            context.map(|c| unsafe { egl::Context::from_ptr(c.as_raw() as egl::EGLContext) });

        self.egl
            .make_current(self.display, None, None, context)
            .map_err(|e| GlError::MakeCurrent(e.to_string()))
    }

    fn destroy_context(&self, context: GlContextHandle) -> Result<(), GlError> {
        let context = unsafe { egl::Context::from_ptr(context.as_raw() as egl::EGLContext) };

        self.egl
            .destroy_context(self.display, context)
            .map_err(|e| GlError::ContextDestruction(e.to_string()))
    }
}
