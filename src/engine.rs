//=========================================================================
// Native Engine Boundary
//=========================================================================
//
// Trait seams for the native side of the bridge. The engine, its plugins
// and its singletons are external collaborators: the bridge only relays
// lifecycle and frame callbacks to them, in a fixed order, and never
// interprets what they do.
//
// All three traits are object-safe; the bridge stores them boxed and
// moves them to the rendering thread, hence the `Send` bound.
//
//=========================================================================

//=== NativeEngine ========================================================

/// Entry points of the native rendering engine.
///
/// One implementation exists per view instance. Every method is invoked
/// from the rendering thread; the bridge guarantees that lifecycle
/// notifications reaching the engine have crossed onto that thread first.
pub trait NativeEngine: Send {
    /// Steps the engine one frame. Returns whether the swap chain should
    /// present the frame (`true` = swap buffers).
    fn step(&mut self) -> bool;

    /// Notifies the engine that the drawable surface changed size.
    fn resize(&mut self, width: i32, height: i32);

    /// Notifies the engine that a new GL context backs the surface.
    /// Previously created GL resources are invalid after this call.
    fn new_context(&mut self);

    /// Notifies the engine that rendering has resumed. Only delivered
    /// once a valid graphics context exists (first frame after resume).
    fn renderer_resumed(&mut self);

    /// Notifies the engine that rendering is pausing.
    fn renderer_paused(&mut self);

    /// Window focus gained.
    fn focus_in(&mut self);

    /// Window focus lost.
    fn focus_out(&mut self);
}

//=== EnginePlugin ========================================================

/// Per-frame and surface-lifecycle hooks for a registered plugin.
///
/// Plugins are invoked in registration order, always after the engine
/// itself has been notified of the same event. No ordering guarantee
/// exists across plugins beyond registration order.
pub trait EnginePlugin: Send {
    /// Identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Called once per frame, after the engine step.
    fn on_frame(&mut self);

    /// Called when the drawable surface changed size.
    fn on_surface_changed(&mut self, width: i32, height: i32);

    /// Called when a new GL context backs the surface.
    fn on_surface_created(&mut self);
}

//=== EngineSingleton =====================================================

/// Frame hooks for an engine-level singleton.
///
/// Singletons predate the plugin system and keep a narrower contract:
/// they see frame and surface-changed events but not surface creation.
pub trait EngineSingleton: Send {
    /// Called once per frame, after the engine step and before plugins.
    fn on_frame(&mut self);

    /// Called when the drawable surface changed size.
    fn on_surface_changed(&mut self, width: i32, height: i32);
}
