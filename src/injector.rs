//! Injection Backend Abstraction
//!
//! Defines the sink that translated events are delivered to. The translators
//! normalize and validate client input, then hand fully-resolved events to an
//! [`InputInjector`] implementation (X11 test connection, network protocol
//! writer, in-memory recorder for tests).

#[cfg(test)]
use mockall::automock;

/// Pointer button identifiers
///
/// Codes follow the X11 core button numbering used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// No button (plain motion)
    Undefined,
    /// Left button
    Left,
    /// Middle button
    Middle,
    /// Right button
    Right,
}

impl PointerButton {
    /// Convert to the X11 core button code
    pub fn code(&self) -> i32 {
        match self {
            PointerButton::Undefined => 0,
            PointerButton::Left => 1,
            PointerButton::Middle => 2,
            PointerButton::Right => 3,
        }
    }

    /// Convert from a raw button code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PointerButton::Undefined),
            1 => Some(PointerButton::Left),
            2 => Some(PointerButton::Middle),
            3 => Some(PointerButton::Right),
            _ => None,
        }
    }
}

/// Touch contact lifecycle phase
///
/// Codes are the XInput 2.2 touch event types delivered to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Contact landed on the surface
    Begin,
    /// Contact moved while held down
    Update,
    /// Contact lifted from the surface
    End,
}

impl TouchPhase {
    /// Convert to the XInput 2 event type code
    pub fn code(&self) -> u32 {
        match self {
            TouchPhase::Begin => 18,  // XI_TouchBegin
            TouchPhase::Update => 19, // XI_TouchUpdate
            TouchPhase::End => 20,    // XI_TouchEnd
        }
    }
}

/// Sink for translated input events
///
/// Implementations deliver events to the display server. All coordinates
/// arriving here are already mapped to screen space and clamped; button and
/// contact ids are already validated. Implementations only serialize and send.
#[cfg_attr(test, automock)]
pub trait InputInjector {
    /// Deliver a pointer move or button event
    ///
    /// `button` is [`PointerButton::Undefined`] for plain motion. When
    /// `relative` is set, `x` and `y` are deltas rather than absolute
    /// screen coordinates.
    fn send_pointer_event(&mut self, x: i32, y: i32, button: PointerButton, pressed: bool, relative: bool);

    /// Deliver a scroll wheel event with horizontal and vertical deltas
    fn send_wheel_event(&mut self, delta_x: f32, delta_y: f32);

    /// Deliver one touch contact transition
    fn send_touch_event(&mut self, phase: TouchPhase, id: u32, x: i32, y: i32);

    /// Deliver a raw key press or release
    ///
    /// Returns whether the backend accepted the key. `scancode` is zero when
    /// the event source did not supply one and the backend should resolve the
    /// key from `keycode` alone.
    fn send_key_event(&mut self, scancode: u32, keycode: u32, pressed: bool) -> bool;

    /// Deliver a single Unicode code point as synthesized keyboard input
    fn send_unicode_event(&mut self, code_point: u32);

    /// Deliver a string of committed text
    fn send_text_event(&mut self, text: &str);
}

/// Host-side pointer capture control
///
/// The keyboard translator asks the host to release an active pointer grab
/// when the user presses Escape. Hosts without a grab concept can use
/// [`NoopCaptureHost`].
#[cfg_attr(test, automock)]
pub trait PointerCaptureHost {
    /// Release any active pointer capture
    fn release_pointer_capture(&mut self);
}

/// Capture host that ignores release requests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCaptureHost;

impl PointerCaptureHost for NoopCaptureHost {
    fn release_pointer_capture(&mut self) {}
}
