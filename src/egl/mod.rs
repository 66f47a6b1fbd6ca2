//=========================================================================
// EGL Subsystem
//
// Config selection and context management for the GL surface.
//
// Architecture:
// ```text
//  SurfaceBridge
//    ↓ owns
//  GlStrategy (chosen once, at construction)
//    ├─ ConfigChooser  ── ordered candidate list, first success wins
//    └─ ContextFactory ── creates/destroys contexts for a chosen config
//         ↓ both drive
//  GlDriver (opaque EGL boundary; real impl in `android`, mocks in tests)
// ```
//
// Key Design Decisions:
// - **Driver as a seam**: the handful of EGL calls the bridge needs are
//   behind a trait, so config/context policy is host-testable and VR
//   vendors can substitute their own machinery.
// - **Ordered fallback, not nested wrappers**: the regular chooser is a
//   flat candidate list tried in sequence, trying progressively less
//   precise formats so surface setup never fails outright.
// - **Opaque handles**: configs and contexts are raw ids wrapped in
//   newtypes; the bridge never inspects them.
//
//=========================================================================

//=== Submodules ==========================================================

mod chooser;
mod context;
mod strategy;

pub use chooser::{ConfigChooser, ConfigSpec, FallbackConfigChooser};
pub use context::{ContextFactory, RegularContextFactory};
pub use strategy::{GlStrategy, RenderMode};

//=== GlConfig ============================================================

/// An EGL framebuffer configuration selected by a chooser.
///
/// Wraps the driver-side config id; meaningful only to the [`GlDriver`]
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlConfig(u64);

impl GlConfig {
    /// Wraps a raw driver config id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw driver config id.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

//=== GlContextHandle =====================================================

/// An opaque handle to a rendering context created by a factory.
///
/// At most one secondary (offscreen) context exists per view instance;
/// the surface bridge enforces that invariant.
#[derive(Debug, PartialEq, Eq)]
pub struct GlContextHandle(u64);

impl GlContextHandle {
    /// Wraps a raw driver context id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw driver context id.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

//=== GlError =============================================================

/// Failures reported by the GL driver.
///
/// All of these are non-fatal to the bridge: callers degrade (no
/// offscreen context, less precise config) rather than propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// No configuration on the display satisfied the request.
    NoMatchingConfig,

    /// Context creation failed for the chosen config.
    ContextCreation(String),

    /// Binding or unbinding a context failed.
    MakeCurrent(String),

    /// Destroying a context failed.
    ContextDestruction(String),

    /// The display could not be initialized.
    DisplayInit(String),
}

impl std::fmt::Display for GlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatchingConfig => write!(f, "no matching EGL config"),
            Self::ContextCreation(e) => write!(f, "context creation failed: {}", e),
            Self::MakeCurrent(e) => write!(f, "make-current failed: {}", e),
            Self::ContextDestruction(e) => write!(f, "context destruction failed: {}", e),
            Self::DisplayInit(e) => write!(f, "display initialization failed: {}", e),
        }
    }
}

impl std::error::Error for GlError {}

//=== GlDriver ============================================================

/// The opaque EGL boundary.
///
/// The bridge needs exactly four operations from the platform API; VR
/// strategy objects and the Android driver implement them, and tests
/// substitute mocks.
pub trait GlDriver: Send {
    /// Returns a config matching the spec, or `None` if the display has
    /// no such config.
    fn choose_config(&self, spec: &ConfigSpec) -> Option<GlConfig>;

    /// Creates a context for the config, targeting the given GLES
    /// client version, optionally as a debug context.
    fn create_context(
        &self,
        config: &GlConfig,
        client_version: u32,
        debug: bool,
    ) -> Result<GlContextHandle, GlError>;

    /// Makes the context current on the calling thread without a drawing
    /// surface, or unbinds any current context when `None`.
    fn make_current(&self, context: Option<&GlContextHandle>) -> Result<(), GlError>;

    /// Destroys a context. The handle is consumed.
    fn destroy_context(&self, context: GlContextHandle) -> Result<(), GlError>;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_raw_id() {
        let config = GlConfig::from_raw(0xC0FFEE);
        assert_eq!(config.as_raw(), 0xC0FFEE);
    }

    #[test]
    fn context_handles_compare_by_id() {
        assert_eq!(GlContextHandle::from_raw(7), GlContextHandle::from_raw(7));
        assert_ne!(GlContextHandle::from_raw(7), GlContextHandle::from_raw(8));
    }

    #[test]
    fn gl_error_implements_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<GlError>();
    }

    #[test]
    fn gl_error_display_mentions_cause() {
        let err = GlError::ContextCreation("EGL_BAD_CONFIG".into());
        assert!(err.to_string().contains("EGL_BAD_CONFIG"));
    }
}
