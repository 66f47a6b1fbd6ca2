//=========================================================================
// Rendering Mode & Strategy Selection
//
// Maps the rendering mode chosen at construction to exactly one
// (config chooser, context factory) pair. VR modes run on vendor
// machinery supplied by the embedder; every other mode gets the regular
// fallback chain and factory.
//
//=========================================================================

use log::info;

use super::chooser::{ConfigChooser, FallbackConfigChooser};
use super::context::{ContextFactory, RegularContextFactory};

//=== RenderMode ==========================================================

/// Rendering mode of the view, selected once at construction and
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Plain on-screen rendering.
    Regular,

    /// Augmented-reality passthrough rendering. Uses the regular GL
    /// strategy; the AR runtime composites separately.
    Ar,

    /// Mobile VR via the legacy OVR runtime.
    VrOvr,

    /// VR via an OpenXR runtime.
    VrOpenXr,
}

impl RenderMode {
    /// Whether this mode requires a vendor-supplied GL strategy.
    pub fn is_vr(&self) -> bool {
        matches!(self, Self::VrOvr | Self::VrOpenXr)
    }
}

//=== GlStrategy ==========================================================

/// The (config chooser, context factory) pair a view runs on.
pub struct GlStrategy {
    pub chooser: Box<dyn ConfigChooser>,
    pub factory: Box<dyn ContextFactory>,
}

impl GlStrategy {
    /// Pairs an arbitrary chooser and factory. VR embedders use this to
    /// hand their vendor machinery to the builder.
    pub fn new(chooser: Box<dyn ConfigChooser>, factory: Box<dyn ContextFactory>) -> Self {
        Self { chooser, factory }
    }

    /// The strategy for non-VR modes: the regular fallback chain plus a
    /// factory targeting the requested GLES version.
    pub fn regular(use_gles3: bool, debug_gl: bool) -> Self {
        info!(
            target: "egl",
            "Selected regular GL strategy (GLES {}, debug: {})",
            if use_gles3 { 3 } else { 2 },
            debug_gl
        );
        Self {
            chooser: Box::new(FallbackConfigChooser::regular()),
            factory: Box::new(RegularContextFactory::new(use_gles3, debug_gl)),
        }
    }
}

impl std::fmt::Debug for GlStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlStrategy").finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
