//! # remote-x11-input
//!
//! Input event translation for remote X11 sessions.
//!
//! Remote clients report pointer, touch, and keyboard activity in their own
//! coordinate space and event vocabulary. This crate turns that activity into
//! the low-level event stream an X server expects, delivered through an
//! [`InputInjector`] implementation supplied by the embedder:
//!
//! - Pointer: button validation, float-to-int truncation, wheel pass-through
//! - Touch: per-contact lifecycle with recovery from dropped lift events
//! - Keyboard: text vs. raw key disambiguation, legacy key expansion,
//!   autorepeat suppression, pointer capture release on Escape
//!
//! # Architecture
//!
//! ```text
//! client events ──> InputTranslator
//!                     ├─> PointerTranslator ──┐
//!                     ├─> TouchTranslator ────┼──> InputInjector ──> X server
//!                     └─> KeyTranslator ──────┘
//! ```
//!
//! The translators are synchronous and suspension-free; the injector is the
//! only seam to the outside world, which keeps every path unit-testable with
//! an in-memory double.
//!
//! # Example
//!
//! ```no_run
//! use remote_x11_input::{InputTranslator, KeyEvent, keycodes};
//! # use remote_x11_input::{InputInjector, PointerButton, TouchPhase};
//! # struct Backend;
//! # impl InputInjector for Backend {
//! #     fn send_pointer_event(&mut self, _: i32, _: i32, _: PointerButton, _: bool, _: bool) {}
//! #     fn send_wheel_event(&mut self, _: f32, _: f32) {}
//! #     fn send_touch_event(&mut self, _: TouchPhase, _: u32, _: i32, _: i32) {}
//! #     fn send_key_event(&mut self, _: u32, _: u32, _: bool) -> bool { true }
//! #     fn send_unicode_event(&mut self, _: u32) {}
//! #     fn send_text_event(&mut self, _: &str) {}
//! # }
//!
//! let mut translator = InputTranslator::new(Backend);
//! translator.send_cursor_move(100.0, 200.0, false);
//! translator.send_key_event(&KeyEvent::key(keycodes::ENTER, true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Input configuration
pub mod config;

/// Error types
pub mod error;

/// Injection backend abstraction
pub mod injector;

/// Keyboard event translation
pub mod keyboard;

/// Client keycode constants
#[allow(missing_docs)]
pub mod keycodes;

/// Pointer event translation
pub mod pointer;

/// Render geometry snapshot
pub mod render;

/// Touch event translation
pub mod touch;

/// Top-level translator facade
pub mod translator;

#[cfg(test)]
mod test_support;

pub use config::InputConfig;
pub use error::{InputError, Result};
pub use injector::{
    InputInjector, NoopCaptureHost, PointerButton, PointerCaptureHost, TouchPhase,
};
pub use keyboard::{KeyEvent, KeyModifiers, KeyTranslator};
pub use pointer::PointerTranslator;
pub use render::RenderData;
pub use touch::{Contact, TouchAction, TouchEvent, TouchTranslator, MAX_TOUCH_SLOTS};
pub use translator::InputTranslator;
