//=========================================================================
// Android Integration
//
// The real implementations of the crate's trait seams: a khronos-egl
// backed GL driver, an asset source over the platform asset manager, and
// logcat-backed logging. Everything in this module is compiled only for
// `target_os = "android"`; host builds and tests run against the mock
// implementations instead.
//
//=========================================================================

mod assets;
mod egl;

pub use assets::AndroidAssetSource;
pub use egl::AndroidGlDriver;

use log::LevelFilter;

/// Routes the `log` facade to logcat. Call once, before constructing the
/// bridge.
pub fn init_logging(max_level: LevelFilter) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(max_level)
            .with_tag("obsidian"),
    );
}
