//=========================================================================
// Surface Adapter
//
// UI-thread half of the bridge. Owns the EGL strategy selected at
// construction, the pointer icon cache, the offscreen context handle and
// the input handler, and wires OS view callbacks to them.
//
// Architecture:
// ```text
//  OS view callbacks (UI thread)
//    ├─ touch/key/motion ──────────► InputHandler (consumed? bool)
//    ├─ pointer capture ───────────► InputHandler
//    ├─ pointer icon config ───────► PointerIconCache (via AssetSource)
//    ├─ offscreen GL ops ──────────► GlStrategy + GlDriver
//    └─ activity lifecycle ────────► LifecycleSender ──► RendererBridge
//                                                        (render thread)
// ```
//
// Input events the handler declines are reported unconsumed so the
// embedder can apply the platform's default handling.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info, warn};

//=== Internal Imports ====================================================

use crate::assets::AssetSource;
use crate::egl::{GlContextHandle, GlDriver, GlStrategy, RenderMode};
use crate::engine::{EnginePlugin, EngineSingleton, NativeEngine};
use crate::input::{InputHandler, KeyEvent, MotionEvent, TouchEvent};
use crate::lifecycle::{lifecycle_channel, LifecycleEvent, LifecycleSender};
use crate::pointer::{PointerIconCache, PointerIconResolution};
use crate::renderer::RendererBridge;

//=== BridgeError =========================================================

/// Construction errors for the bridge pair.
#[derive(Debug)]
pub enum BridgeError {
    /// A VR rendering mode was requested without supplying the vendor
    /// GL strategy it runs on.
    MissingVrStrategy(RenderMode),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVrStrategy(mode) => {
                write!(f, "render mode {:?} requires a vendor GL strategy", mode)
            }
        }
    }
}

impl std::error::Error for BridgeError {}

//=== SurfaceBridgeBuilder ================================================

/// Builder collecting the collaborators and configuration of a bridge
/// pair.
///
/// # Default Values
///
/// - **Render mode**: [`RenderMode::Regular`]
/// - **Translucency**: opaque
/// - **GLES version**: 3
/// - **Debug GL**: off
///
/// # Examples
///
/// ```no_run
/// # use obsidian_droid::prelude::*;
/// # fn collaborators() -> (Box<dyn NativeEngine>, Box<dyn InputHandler>,
/// #                        Box<dyn GlDriver>, Box<dyn AssetSource>) {
/// #     unimplemented!()
/// # }
/// let (engine, input, driver, assets) = collaborators();
///
/// let (surface, renderer) = SurfaceBridgeBuilder::new(engine, input, driver, assets)
///     .with_render_mode(RenderMode::Regular)
///     .with_translucency(true)
///     .build()
///     .expect("non-VR construction cannot fail");
///
/// // `renderer` moves to the rendering thread; `surface` stays on the
/// // UI thread.
/// # let _ = (surface, renderer);
/// ```
pub struct SurfaceBridgeBuilder {
    engine: Box<dyn NativeEngine>,
    input: Box<dyn InputHandler>,
    driver: Box<dyn GlDriver>,
    assets: Box<dyn AssetSource>,
    mode: RenderMode,
    translucent: bool,
    use_gles3: bool,
    debug_gl: bool,
    vr_strategy: Option<GlStrategy>,
    singletons: Vec<Box<dyn EngineSingleton>>,
    plugins: Vec<Box<dyn EnginePlugin>>,
}

impl SurfaceBridgeBuilder {
    /// Creates a builder over the four mandatory collaborators.
    pub fn new(
        engine: Box<dyn NativeEngine>,
        input: Box<dyn InputHandler>,
        driver: Box<dyn GlDriver>,
        assets: Box<dyn AssetSource>,
    ) -> Self {
        Self {
            engine,
            input,
            driver,
            assets,
            mode: RenderMode::Regular,
            translucent: false,
            use_gles3: true,
            debug_gl: false,
            vr_strategy: None,
            singletons: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Sets the rendering mode. Immutable after construction.
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Requests a translucent surface. The embedder must configure the
    /// window format accordingly; the flag is recorded here so the
    /// strategy and the embedder agree.
    pub fn with_translucency(mut self, translucent: bool) -> Self {
        self.translucent = translucent;
        self
    }

    /// Selects GLES 3 (default) or GLES 2 contexts for non-VR modes.
    pub fn with_gles3(mut self, use_gles3: bool) -> Self {
        self.use_gles3 = use_gles3;
        self
    }

    /// Requests debug contexts from the regular factory.
    pub fn with_debug_gl(mut self, debug_gl: bool) -> Self {
        self.debug_gl = debug_gl;
        self
    }

    /// Supplies the vendor GL strategy VR modes run on. Ignored by
    /// non-VR modes.
    pub fn with_vr_strategy(mut self, strategy: GlStrategy) -> Self {
        self.vr_strategy = Some(strategy);
        self
    }

    /// Registers an engine singleton. Invoked in registration order.
    pub fn with_singleton(mut self, singleton: Box<dyn EngineSingleton>) -> Self {
        self.singletons.push(singleton);
        self
    }

    /// Registers a plugin. Invoked in registration order.
    pub fn with_plugin(mut self, plugin: Box<dyn EnginePlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Builds the bridge pair: the UI-thread surface adapter and the
    /// rendering-thread renderer adapter, connected by the lifecycle
    /// channel.
    ///
    /// # Errors
    ///
    /// [`BridgeError::MissingVrStrategy`] if a VR mode was selected
    /// without supplying a strategy.
    pub fn build(self) -> Result<(SurfaceBridge, RendererBridge), BridgeError> {
        let strategy = if self.mode.is_vr() {
            match self.vr_strategy {
                Some(strategy) => {
                    info!(target: "surface", "Using vendor GL strategy for {:?}", self.mode);
                    strategy
                }
                None => return Err(BridgeError::MissingVrStrategy(self.mode)),
            }
        } else {
            GlStrategy::regular(self.use_gles3, self.debug_gl)
        };

        let (sender, receiver) = lifecycle_channel();

        let renderer = RendererBridge::new(self.engine, self.singletons, self.plugins, receiver);

        let surface = SurfaceBridge {
            mode: self.mode,
            translucent: self.translucent,
            strategy,
            driver: self.driver,
            assets: self.assets,
            input: self.input,
            icons: PointerIconCache::new(),
            offscreen: None,
            lifecycle: sender,
        };

        info!(
            target: "surface",
            "Surface bridge built (mode: {:?}, translucent: {})",
            surface.mode,
            surface.translucent
        );

        Ok((surface, renderer))
    }
}

//=== SurfaceBridge =======================================================

/// UI-thread adapter between OS view callbacks and the engine boundary.
///
/// # Thread Model
///
/// All methods run on the OS main/UI thread. Lifecycle notifications are
/// posted to the rendering thread through the channel; offscreen context
/// operations are synchronous and assume the calling thread owns no
/// conflicting context.
pub struct SurfaceBridge {
    mode: RenderMode,
    translucent: bool,
    strategy: GlStrategy,
    driver: Box<dyn GlDriver>,
    assets: Box<dyn AssetSource>,
    input: Box<dyn InputHandler>,
    icons: PointerIconCache,
    offscreen: Option<GlContextHandle>,
    lifecycle: LifecycleSender,
}

impl SurfaceBridge {
    //--- Accessors --------------------------------------------------------

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    pub fn is_translucent(&self) -> bool {
        self.translucent
    }

    /// The (chooser, factory) pair the embedder sets its primary surface
    /// up with.
    pub fn strategy(&self) -> &GlStrategy {
        &self.strategy
    }

    //--- Input Relay ------------------------------------------------------

    /// Lets the handler enumerate attached input devices.
    pub fn init_input_devices(&mut self) {
        self.input.init_devices();
    }

    /// Relays a touch event. Returns whether it was consumed.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.input.on_touch_event(event)
    }

    /// Relays a key-down. `false` means the embedder should apply the
    /// platform's default key handling.
    pub fn on_key_down(&mut self, event: &KeyEvent) -> bool {
        self.input.on_key_down(event)
    }

    /// Relays a key-up. Same fallback convention as
    /// [`SurfaceBridge::on_key_down`].
    pub fn on_key_up(&mut self, event: &KeyEvent) -> bool {
        self.input.on_key_up(event)
    }

    /// Relays a generic motion event.
    pub fn on_generic_motion(&mut self, event: &MotionEvent) -> bool {
        self.input.on_generic_motion(event)
    }

    /// Relays a motion event delivered while pointer capture is active.
    /// Captured events take the generic-motion path and never fall back
    /// to default handling.
    pub fn on_captured_pointer_event(&mut self, event: &MotionEvent) -> bool {
        self.input.on_generic_motion(event)
    }

    /// The OS granted or revoked pointer capture.
    pub fn on_pointer_capture_change(&mut self, captured: bool) {
        self.input.on_pointer_capture_change(captured);
    }

    /// Asks whether pointer capture should be requested from the OS.
    /// When the handler agrees, it is notified immediately and `true` is
    /// returned so the embedder performs the OS request.
    pub fn request_pointer_capture(&mut self) -> bool {
        if self.input.can_capture_pointer() {
            self.input.on_pointer_capture_change(true);
            true
        } else {
            false
        }
    }

    /// Releases pointer capture; the handler is always notified.
    pub fn release_pointer_capture(&mut self) {
        self.input.on_pointer_capture_change(false);
    }

    //--- Pointer Icons ----------------------------------------------------

    /// Configures the custom icon for a pointer type from an image file
    /// or bundled asset. Failures remove any previously cached icon for
    /// the type; resolution then falls back to the platform default.
    pub fn configure_pointer_icon(
        &mut self,
        pointer_type: i32,
        image_path: &str,
        hotspot_x: f32,
        hotspot_y: f32,
    ) {
        self.icons.configure(
            self.assets.as_ref(),
            pointer_type,
            image_path,
            hotspot_x,
            hotspot_y,
        );
    }

    /// Resolves the icon to show for a pointer type.
    pub fn resolve_pointer_icon(&self, pointer_type: i32) -> PointerIconResolution<'_> {
        self.icons.resolve(pointer_type)
    }

    //--- Offscreen Context ------------------------------------------------

    /// Creates the secondary (offscreen) context using the view's
    /// chooser and factory. Returns `false` on failure, leaving no
    /// dangling handle. An existing secondary context is destroyed
    /// first, keeping at most one alive.
    pub fn create_offscreen_gl(&mut self) -> bool {
        if self.offscreen.is_some() {
            debug!(target: "egl", "Replacing existing offscreen context");
            self.destroy_offscreen_gl();
        }

        let config = match self.strategy.chooser.choose_config(self.driver.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!(target: "egl", "Offscreen config selection failed: {}", e);
                return false;
            }
        };

        match self
            .strategy
            .factory
            .create_context(self.driver.as_ref(), &config)
        {
            Ok(context) => {
                self.offscreen = Some(context);
                true
            }
            Err(e) => {
                warn!(target: "egl", "Offscreen context creation failed: {}", e);
                false
            }
        }
    }

    /// Binds the offscreen context on the calling thread (`true`) or
    /// unbinds any current context (`false`). Binding with no offscreen
    /// context unbinds, mirroring the unbind request.
    pub fn set_offscreen_gl_current(&mut self, current: bool) -> bool {
        let target = if current { self.offscreen.as_ref() } else { None };
        match self.driver.make_current(target) {
            Ok(()) => true,
            Err(e) => {
                warn!(target: "egl", "Offscreen make-current failed: {}", e);
                false
            }
        }
    }

    /// Destroys the offscreen context. Idempotent: a no-op when none
    /// exists.
    pub fn destroy_offscreen_gl(&mut self) {
        if let Some(context) = self.offscreen.take() {
            self.strategy
                .factory
                .destroy_context(self.driver.as_ref(), context);
        }
    }

    /// Whether a secondary context currently exists.
    pub fn has_offscreen_gl(&self) -> bool {
        self.offscreen.is_some()
    }

    //--- Activity Lifecycle -----------------------------------------------

    /// The activity started; frame production may begin.
    pub fn on_activity_started(&self) {
        self.lifecycle.post(LifecycleEvent::StartRendering);
    }

    /// The activity resumed. The engine's resumed notification is
    /// deferred to the first frame drawn afterwards.
    pub fn on_activity_resumed(&self) {
        self.lifecycle.post(LifecycleEvent::Resumed);
    }

    /// The activity paused. Delivered to the engine as soon as the
    /// rendering thread drains the queue, frame or not.
    pub fn on_activity_paused(&self) {
        self.lifecycle.post(LifecycleEvent::Paused);
    }

    /// The activity stopped; frame production should halt.
    pub fn on_activity_stopped(&self) {
        self.lifecycle.post(LifecycleEvent::StopRendering);
    }
}

impl Drop for SurfaceBridge {
    fn drop(&mut self) {
        // The display outlives the view, the secondary context must not.
        self.destroy_offscreen_gl();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egl::{ConfigChooser, ConfigSpec, ContextFactory, GlConfig, GlError};
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    //--- Mocks ------------------------------------------------------------

    struct NullEngine;

    impl NativeEngine for NullEngine {
        fn step(&mut self) -> bool {
            true
        }
        fn resize(&mut self, _: i32, _: i32) {}
        fn new_context(&mut self) {}
        fn renderer_resumed(&mut self) {}
        fn renderer_paused(&mut self) {}
        fn focus_in(&mut self) {}
        fn focus_out(&mut self) {}
    }

    /// Handler with scripted verdicts and a call journal.
    struct ScriptedHandler {
        consume_touch: bool,
        consume_keys: bool,
        consume_motion: bool,
        allow_capture: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedHandler {
        fn new(calls: Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                consume_touch: true,
                consume_keys: true,
                consume_motion: true,
                allow_capture: true,
                calls,
            }
        }

        fn log(&self, entry: &str) {
            self.calls.lock().unwrap().push(entry.to_string());
        }
    }

    impl InputHandler for ScriptedHandler {
        fn init_devices(&mut self) {
            self.log("init_devices");
        }
        fn on_touch_event(&mut self, _: &TouchEvent) -> bool {
            self.log("touch");
            self.consume_touch
        }
        fn on_key_down(&mut self, _: &KeyEvent) -> bool {
            self.log("key_down");
            self.consume_keys
        }
        fn on_key_up(&mut self, _: &KeyEvent) -> bool {
            self.log("key_up");
            self.consume_keys
        }
        fn on_generic_motion(&mut self, _: &MotionEvent) -> bool {
            self.log("motion");
            self.consume_motion
        }
        fn on_pointer_capture_change(&mut self, captured: bool) {
            self.log(&format!("capture_change {}", captured));
        }
        fn can_capture_pointer(&self) -> bool {
            self.allow_capture
        }
    }

    /// Driver with counters and switchable failure modes.
    #[derive(Default)]
    struct FakeDriver {
        refuse_configs: bool,
        fail_create: bool,
        next_context: AtomicU32,
        destroyed: Arc<Mutex<Vec<u64>>>,
    }

    impl GlDriver for FakeDriver {
        fn choose_config(&self, _spec: &ConfigSpec) -> Option<GlConfig> {
            if self.refuse_configs {
                None
            } else {
                Some(GlConfig::from_raw(1))
            }
        }

        fn create_context(
            &self,
            _config: &GlConfig,
            _client_version: u32,
            _debug: bool,
        ) -> Result<GlContextHandle, GlError> {
            if self.fail_create {
                return Err(GlError::ContextCreation("EGL_BAD_ALLOC".into()));
            }
            let id = self.next_context.fetch_add(1, Ordering::Relaxed) + 1;
            Ok(GlContextHandle::from_raw(id as u64))
        }

        fn make_current(&self, _context: Option<&GlContextHandle>) -> Result<(), GlError> {
            Ok(())
        }

        fn destroy_context(&self, context: GlContextHandle) -> Result<(), GlError> {
            self.destroyed.lock().unwrap().push(context.as_raw());
            Ok(())
        }
    }

    struct EmptyAssets;

    impl AssetSource for EmptyAssets {
        fn filesystem_file_exists(&self, _: &str) -> bool {
            false
        }
        fn asset_file_exists(&self, _: &str) -> bool {
            false
        }
        fn open_asset(&self, _: &str) -> std::io::Result<Box<dyn std::io::Read>> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "empty"))
        }
    }

    fn build_bridge(driver: FakeDriver) -> (SurfaceBridge, RendererBridge, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (surface, renderer) = SurfaceBridgeBuilder::new(
            Box::new(NullEngine),
            Box::new(ScriptedHandler::new(calls.clone())),
            Box::new(driver),
            Box::new(EmptyAssets),
        )
        .build()
        .unwrap();
        (surface, renderer, calls)
    }

    //--- Builder Tests ----------------------------------------------------

    #[test]
    fn builder_defaults_to_regular_opaque() {
        let (surface, _renderer, _) = build_bridge(FakeDriver::default());
        assert_eq!(surface.render_mode(), RenderMode::Regular);
        assert!(!surface.is_translucent());
    }

    #[test]
    fn vr_mode_without_strategy_fails_construction() {
        let result = SurfaceBridgeBuilder::new(
            Box::new(NullEngine),
            Box::new(ScriptedHandler::new(Arc::new(Mutex::new(Vec::new())))),
            Box::new(FakeDriver::default()),
            Box::new(EmptyAssets),
        )
        .with_render_mode(RenderMode::VrOpenXr)
        .build();

        match result {
            Err(BridgeError::MissingVrStrategy(mode)) => {
                assert_eq!(mode, RenderMode::VrOpenXr);
            }
            Ok(_) => panic!("VR construction without a strategy must fail"),
        }
    }

    #[test]
    fn vr_mode_uses_supplied_strategy() {
        struct MarkerChooser(Arc<AtomicBool>);
        impl ConfigChooser for MarkerChooser {
            fn choose_config(&self, driver: &dyn GlDriver) -> Result<GlConfig, GlError> {
                self.0.store(true, Ordering::Relaxed);
                driver
                    .choose_config(&ConfigSpec::rgba8888(24))
                    .ok_or(GlError::NoMatchingConfig)
            }
        }

        struct MarkerFactory;
        impl ContextFactory for MarkerFactory {
            fn create_context(
                &self,
                driver: &dyn GlDriver,
                config: &GlConfig,
            ) -> Result<GlContextHandle, GlError> {
                driver.create_context(config, 3, false)
            }
            fn destroy_context(&self, driver: &dyn GlDriver, context: GlContextHandle) {
                let _ = driver.destroy_context(context);
            }
        }

        let vendor_chooser_used = Arc::new(AtomicBool::new(false));
        let (mut surface, _renderer) = SurfaceBridgeBuilder::new(
            Box::new(NullEngine),
            Box::new(ScriptedHandler::new(Arc::new(Mutex::new(Vec::new())))),
            Box::new(FakeDriver::default()),
            Box::new(EmptyAssets),
        )
        .with_render_mode(RenderMode::VrOvr)
        .with_vr_strategy(GlStrategy::new(
            Box::new(MarkerChooser(vendor_chooser_used.clone())),
            Box::new(MarkerFactory),
        ))
        .build()
        .unwrap();

        assert!(surface.create_offscreen_gl());
        assert!(vendor_chooser_used.load(Ordering::Relaxed));
    }

    //--- Offscreen Context Tests ------------------------------------------

    #[test]
    fn offscreen_creation_failure_leaves_no_handle() {
        let (mut surface, _renderer, _) = build_bridge(FakeDriver {
            fail_create: true,
            ..Default::default()
        });

        assert!(!surface.create_offscreen_gl());
        assert!(!surface.has_offscreen_gl());
    }

    #[test]
    fn offscreen_creation_fails_when_no_config_matches() {
        let (mut surface, _renderer, _) = build_bridge(FakeDriver {
            refuse_configs: true,
            ..Default::default()
        });

        assert!(!surface.create_offscreen_gl());
        assert!(!surface.has_offscreen_gl());
    }

    #[test]
    fn offscreen_creation_succeeds_and_recreation_replaces() {
        let destroyed = Arc::new(Mutex::new(Vec::new()));
        let (mut surface, _renderer, _) = build_bridge(FakeDriver {
            destroyed: destroyed.clone(),
            ..Default::default()
        });

        assert!(surface.create_offscreen_gl());
        assert!(surface.has_offscreen_gl());

        // A second creation destroys the first context before creating
        // the replacement: never two secondary contexts at once.
        assert!(surface.create_offscreen_gl());
        assert_eq!(*destroyed.lock().unwrap(), vec![1]);
        assert!(surface.has_offscreen_gl());
    }

    #[test]
    fn offscreen_destroy_is_idempotent() {
        let destroyed = Arc::new(Mutex::new(Vec::new()));
        let (mut surface, _renderer, _) = build_bridge(FakeDriver {
            destroyed: destroyed.clone(),
            ..Default::default()
        });

        surface.destroy_offscreen_gl();
        assert!(destroyed.lock().unwrap().is_empty());

        assert!(surface.create_offscreen_gl());
        surface.destroy_offscreen_gl();
        surface.destroy_offscreen_gl();

        assert_eq!(*destroyed.lock().unwrap(), vec![1]);
        assert!(!surface.has_offscreen_gl());
    }

    #[test]
    fn offscreen_bind_and_unbind_report_success() {
        let (mut surface, _renderer, _) = build_bridge(FakeDriver::default());

        assert!(surface.create_offscreen_gl());
        assert!(surface.set_offscreen_gl_current(true));
        assert!(surface.set_offscreen_gl_current(false));
    }

    #[test]
    fn dropping_the_surface_destroys_the_offscreen_context() {
        let destroyed = Arc::new(Mutex::new(Vec::new()));
        let (mut surface, _renderer, _) = build_bridge(FakeDriver {
            destroyed: destroyed.clone(),
            ..Default::default()
        });

        assert!(surface.create_offscreen_gl());
        drop(surface);

        assert_eq!(*destroyed.lock().unwrap(), vec![1]);
    }

    //--- Input Relay Tests ------------------------------------------------

    #[test]
    fn consumed_events_report_consumed() {
        let (mut surface, _renderer, calls) = build_bridge(FakeDriver::default());

        let touch = TouchEvent {
            action: crate::input::TouchAction::Down,
            points: vec![],
        };
        let key = KeyEvent {
            keycode: 62,
            scancode: 57,
            repeat: false,
        };
        let motion = MotionEvent::at(crate::input::MotionSource::Mouse, 1.0, 2.0);

        assert!(surface.on_touch_event(&touch));
        assert!(surface.on_key_down(&key));
        assert!(surface.on_key_up(&key));
        assert!(surface.on_generic_motion(&motion));

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["touch", "key_down", "key_up", "motion"]
        );
    }

    #[test]
    fn declined_events_report_unconsumed_for_default_handling() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut handler = ScriptedHandler::new(calls);
        handler.consume_touch = false;
        handler.consume_keys = false;
        handler.consume_motion = false;

        let (mut surface, _renderer) = SurfaceBridgeBuilder::new(
            Box::new(NullEngine),
            Box::new(handler),
            Box::new(FakeDriver::default()),
            Box::new(EmptyAssets),
        )
        .build()
        .unwrap();

        let key = KeyEvent {
            keycode: 4,
            scancode: 158,
            repeat: false,
        };
        assert!(!surface.on_key_down(&key));
        assert!(!surface.on_key_up(&key));
        assert!(!surface.on_generic_motion(&MotionEvent::at(
            crate::input::MotionSource::Joystick,
            0.0,
            0.0
        )));
    }

    #[test]
    fn captured_pointer_events_take_the_motion_path() {
        let (mut surface, _renderer, calls) = build_bridge(FakeDriver::default());

        surface.on_captured_pointer_event(&MotionEvent::at(
            crate::input::MotionSource::Mouse,
            0.5,
            -0.25,
        ));

        assert_eq!(*calls.lock().unwrap(), vec!["motion"]);
    }

    #[test]
    fn capture_request_consults_the_handler() {
        let (mut surface, _renderer, calls) = build_bridge(FakeDriver::default());

        assert!(surface.request_pointer_capture());
        surface.release_pointer_capture();

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["capture_change true", "capture_change false"]
        );
    }

    #[test]
    fn capture_request_denied_when_handler_declines() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut handler = ScriptedHandler::new(calls.clone());
        handler.allow_capture = false;

        let (mut surface, _renderer) = SurfaceBridgeBuilder::new(
            Box::new(NullEngine),
            Box::new(handler),
            Box::new(FakeDriver::default()),
            Box::new(EmptyAssets),
        )
        .build()
        .unwrap();

        assert!(!surface.request_pointer_capture());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn init_input_devices_reaches_the_handler() {
        let (mut surface, _renderer, calls) = build_bridge(FakeDriver::default());
        surface.init_input_devices();
        assert_eq!(*calls.lock().unwrap(), vec!["init_devices"]);
    }

    //--- Lifecycle Wiring -------------------------------------------------

    #[test]
    fn activity_lifecycle_reaches_the_renderer_in_order() {
        let (surface, mut renderer, _) = build_bridge(FakeDriver::default());

        surface.on_activity_started();
        surface.on_activity_resumed();
        surface.on_activity_paused();
        surface.on_activity_stopped();

        renderer.pump_lifecycle();
        assert!(renderer.is_suspended());
    }

    //--- Pointer Icon Wiring ----------------------------------------------

    #[test]
    fn pointer_icons_resolve_to_default_without_configuration() {
        let (surface, _renderer, _) = build_bridge(FakeDriver::default());
        assert_eq!(
            surface.resolve_pointer_icon(9),
            PointerIconResolution::SystemDefault(9)
        );
    }

    #[test]
    fn pointer_icon_failure_stays_silent() {
        let (mut surface, _renderer, _) = build_bridge(FakeDriver::default());

        surface.configure_pointer_icon(3, "nowhere.png", 0.0, 0.0);

        assert_eq!(
            surface.resolve_pointer_icon(3),
            PointerIconResolution::SystemDefault(3)
        );
    }
}
