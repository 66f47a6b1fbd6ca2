//=========================================================================
// Renderer Adapter
//
// Receives per-frame and surface-lifecycle callbacks from the rendering
// surface and relays them to the native engine, then to the injected
// singleton and plugin collections, in registration order. The engine is
// always notified strictly before any singleton or plugin hook for the
// same event.
//
// Runs entirely on the rendering thread. Lifecycle notifications posted
// by the UI-thread half of the bridge are drained here, in submission
// order, at the top of every frame and on demand via `pump_lifecycle`,
// so a pause is delivered even when no further frame arrives.
//
// Resumed notifications are deferred to the first frame after the
// resume, when a valid graphics context is guaranteed to exist. Pause
// notifications are delivered immediately on application.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Imports ====================================================

use crate::engine::{EnginePlugin, EngineSingleton, NativeEngine};
use crate::lifecycle::{LifecycleEvent, ResumeState, ViewState};

//=== RendererBridge ======================================================

/// Rendering-thread half of the bridge.
///
/// Owns the native engine handle and the plugin/singleton collections
/// passed at construction; no ambient registry is consulted.
pub struct RendererBridge {
    engine: Box<dyn NativeEngine>,
    singletons: Vec<Box<dyn EngineSingleton>>,
    plugins: Vec<Box<dyn EnginePlugin>>,
    resume: ResumeState,
    view_state: ViewState,
    suspended: bool,
    events: Receiver<LifecycleEvent>,
}

impl RendererBridge {
    pub(crate) fn new(
        engine: Box<dyn NativeEngine>,
        singletons: Vec<Box<dyn EngineSingleton>>,
        plugins: Vec<Box<dyn EnginePlugin>>,
        events: Receiver<LifecycleEvent>,
    ) -> Self {
        Self {
            engine,
            singletons,
            plugins,
            resume: ResumeState::default(),
            view_state: ViewState::default(),
            suspended: false,
            events,
        }
    }

    //--- Frame Callbacks --------------------------------------------------

    /// Draws one frame. Returns whether the embedder should swap buffers.
    ///
    /// Order: drain pending lifecycle events, deliver a deferred resumed
    /// notification if one is armed, step the engine, then run every
    /// singleton and plugin frame hook in registration order.
    pub fn on_draw_frame(&mut self) -> bool {
        self.pump_lifecycle();

        if self.resume.take_pending() {
            debug!(target: "renderer", "Delivering deferred resumed notification");
            self.engine.renderer_resumed();
        }

        let swap_buffers = self.engine.step();

        for singleton in &mut self.singletons {
            singleton.on_frame();
        }
        for plugin in &mut self.plugins {
            plugin.on_frame();
        }

        swap_buffers
    }

    /// The drawable surface changed size.
    pub fn on_surface_changed(&mut self, width: i32, height: i32) {
        debug!(target: "renderer", "Surface changed: {}x{}", width, height);

        self.engine.resize(width, height);

        for singleton in &mut self.singletons {
            singleton.on_surface_changed(width, height);
        }
        for plugin in &mut self.plugins {
            plugin.on_surface_changed(width, height);
        }
    }

    /// A new GL context backs the surface.
    pub fn on_surface_created(&mut self) {
        info!(target: "renderer", "Surface created, notifying engine of new context");

        self.engine.new_context();

        for plugin in &mut self.plugins {
            plugin.on_surface_created();
        }

        self.view_state = ViewState::Active;
    }

    //--- Lifecycle --------------------------------------------------------

    /// Applies every queued lifecycle event, in submission order.
    ///
    /// Called at the top of each frame; also public so the embedder's
    /// loop can deliver a pause while no frames are being produced.
    pub fn pump_lifecycle(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Resumed => {
                // The resumed notification itself waits for the first
                // frame; focus does not.
                self.resume.mark_resumed();
                self.engine.focus_in();
            }
            LifecycleEvent::Paused => {
                self.engine.focus_out();
                self.engine.renderer_paused();
            }
            LifecycleEvent::StartRendering => {
                self.suspended = false;
            }
            LifecycleEvent::StopRendering => {
                self.suspended = true;
            }
        }
    }

    /// Whether the embedder's frame pacer should hold off producing
    /// frames (activity stopped).
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Marks the view torn down. No further callbacks are expected.
    pub fn mark_destroyed(&mut self) {
        self.view_state = ViewState::Destroyed;
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
