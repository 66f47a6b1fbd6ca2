//=========================================================================
// Input Relay Types
//
// Raw containers for the input events the OS delivers to the surface
// view, plus the handler seam they are forwarded through. The bridge
// performs no event-to-engine translation: the input handler owns that.
//
// Responsibilities:
// - Represent touch, key and generic motion events without interpretation
// - Define the `InputHandler` contract, including the consumed/declined
//   convention used to fall back to default OS handling
//
// Notes:
// Handler methods return `bool`: `true` means the event was consumed,
// `false` means the caller should let the platform apply its default
// behavior for that event.
//
//=========================================================================

//=== TouchAction =========================================================

/// Phase of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// First pointer went down.
    Down,

    /// Last pointer went up.
    Up,

    /// One or more pointers moved.
    Move,

    /// Gesture aborted by the system (e.g. parent view intercepted it).
    Cancel,
}

//=== TouchPoint ==========================================================

/// A single pointer within a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Stable pointer id for the duration of the gesture.
    pub id: i32,

    /// Horizontal position in view coordinates.
    pub x: f32,

    /// Vertical position in view coordinates.
    pub y: f32,
}

//=== TouchEvent ==========================================================

/// A touch event as delivered by the OS, untranslated.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Gesture phase.
    pub action: TouchAction,

    /// All active pointers at the time of the event.
    pub points: Vec<TouchPoint>,
}

//=== KeyEvent ============================================================

/// A hardware key event, untranslated.
///
/// Carries the platform keycode and scancode verbatim; mapping to engine
/// key identifiers happens inside the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Platform key code.
    pub keycode: u32,

    /// Hardware scan code.
    pub scancode: u32,

    /// Whether this event is an auto-repeat of a held key.
    pub repeat: bool,
}

//=== MotionEvent =========================================================

/// Source device class of a generic motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionSource {
    Mouse,
    Touchpad,
    Joystick,
    Unknown,
}

/// A generic (non-touch) motion event: mouse hover, scroll, joystick
/// axis movement, or captured-pointer relative motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    /// Device class that produced the event.
    pub source: MotionSource,

    /// Horizontal position, or relative delta while pointer capture is
    /// active.
    pub x: f32,

    /// Vertical position, or relative delta while pointer capture is
    /// active.
    pub y: f32,

    /// Horizontal scroll delta, if any.
    pub scroll_x: f32,

    /// Vertical scroll delta, if any.
    pub scroll_y: f32,

    /// Bitmask of pressed pointer buttons.
    pub button_state: u32,
}

impl MotionEvent {
    /// A motion event at a position with no scroll and no buttons.
    pub fn at(source: MotionSource, x: f32, y: f32) -> Self {
        Self {
            source,
            x,
            y,
            scroll_x: 0.0,
            scroll_y: 0.0,
            button_state: 0,
        }
    }
}

//=== InputHandler ========================================================

/// The input-handling subsystem the surface bridge forwards events to.
///
/// Owns the actual event-to-native-call translation; the bridge only
/// relays and honors the consumed/declined return value.
pub trait InputHandler: Send {
    /// Called once after construction so the handler can enumerate
    /// attached input devices.
    fn init_devices(&mut self) {}

    /// A touch event arrived. Return `true` if consumed.
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool;

    /// A key went down. Return `true` if consumed; a declined event gets
    /// the platform's default key handling.
    fn on_key_down(&mut self, event: &KeyEvent) -> bool;

    /// A key went up. Same convention as [`InputHandler::on_key_down`].
    fn on_key_up(&mut self, event: &KeyEvent) -> bool;

    /// A generic motion event arrived. Return `true` if consumed.
    fn on_generic_motion(&mut self, event: &MotionEvent) -> bool;

    /// Pointer capture was acquired or lost.
    fn on_pointer_capture_change(&mut self, captured: bool);

    /// Whether the handler currently wants pointer capture. Consulted
    /// before the bridge requests capture from the OS.
    fn can_capture_pointer(&self) -> bool {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
