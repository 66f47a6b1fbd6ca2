//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use obsidian_droid::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Bridge halves
pub use crate::renderer::RendererBridge;
pub use crate::surface::{BridgeError, SurfaceBridge, SurfaceBridgeBuilder};

// Engine boundary
pub use crate::engine::{EnginePlugin, EngineSingleton, NativeEngine};

// Input relay
pub use crate::input::{
    InputHandler, KeyEvent, MotionEvent, MotionSource, TouchAction, TouchEvent, TouchPoint,
};

// EGL strategy
pub use crate::egl::{
    ConfigChooser, ConfigSpec, ContextFactory, FallbackConfigChooser, GlConfig, GlContextHandle,
    GlDriver, GlError, GlStrategy, RegularContextFactory, RenderMode,
};

// Assets and pointer icons
pub use crate::assets::{AssetSource, DirectoryAssetSource};
pub use crate::pointer::{PointerIcon, PointerIconCache, PointerIconResolution};

// Lifecycle
pub use crate::lifecycle::{LifecycleEvent, ResumeState, ViewState};
