//=========================================================================
// Obsidian Droid — Library Root
//
// Android-side bridge between the OS windowing/input surface and the
// Obsidian engine's native rendering loop.
//
// Responsibilities:
// - Select an EGL configuration strategy matching the rendering mode
// - Create and manage the secondary (offscreen) GL context
// - Forward activity lifecycle events to the native renderer across the
//   UI-thread/rendering-thread boundary
// - Relay touch, key and pointer input to the input handler
// - Cache custom pointer icons decoded from files or bundled assets
//
// The bridge is a pair: `SurfaceBridge` lives on the UI thread and
// receives OS view callbacks; `RendererBridge` moves to the rendering
// thread and drives the engine. They are built together and share a
// lifecycle channel.
//
// Typical usage:
// ```no_run
// # use obsidian_droid::prelude::*;
// # fn collaborators() -> (Box<dyn NativeEngine>, Box<dyn InputHandler>,
// #                        Box<dyn GlDriver>, Box<dyn AssetSource>) {
// #     unimplemented!()
// # }
// let (engine, input, driver, assets) = collaborators();
// let (surface, renderer) = SurfaceBridgeBuilder::new(engine, input, driver, assets)
//     .build()
//     .unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// Each module is one seam of the bridge: the engine boundary, the input
// relay, EGL strategy selection, asset access, the pointer icon cache,
// lifecycle state, and the two adapter halves.
//
pub mod assets;
pub mod egl;
pub mod engine;
pub mod input;
pub mod lifecycle;
pub mod pointer;
pub mod renderer;
pub mod surface;

pub mod prelude;

//--- Platform Modules ----------------------------------------------------
//
// Real implementations of the trait seams exist only on device; host
// builds test against mocks.
//
#[cfg(target_os = "android")]
pub mod android;

//--- Public Exports ------------------------------------------------------

pub use renderer::RendererBridge;
pub use surface::{BridgeError, SurfaceBridge, SurfaceBridgeBuilder};
