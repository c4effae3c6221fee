//! Input Event Translator
//!
//! Top-level coordinator tying the pointer, touch, and keyboard translators
//! to one injector. Embedders construct it around their backend, feed it
//! client events, and flip the two runtime flags as their session state
//! changes.

use crate::config::InputConfig;
use crate::error::Result;
use crate::injector::{InputInjector, PointerButton, PointerCaptureHost};
use crate::keyboard::{KeyEvent, KeyTranslator};
use crate::pointer::PointerTranslator;
use crate::render::RenderData;
use crate::touch::{TouchEvent, TouchTranslator};
use tracing::debug;

/// Input event translator
///
/// Owns the injector and all per-session translation state. All operations
/// take `&mut self`; callers serialize access, matching the single event
/// stream a client session produces.
pub struct InputTranslator<I: InputInjector> {
    /// Injection backend
    injector: I,

    /// Runtime flags
    config: InputConfig,

    /// Pointer event translator
    pointer: PointerTranslator,

    /// Touch event translator
    touch: TouchTranslator,

    /// Keyboard event translator
    keyboard: KeyTranslator,

    /// Total events accepted for translation
    events_processed: u64,
}

impl<I: InputInjector> InputTranslator<I> {
    /// Create a translator with default configuration and no capture host
    pub fn new(injector: I) -> Self {
        Self::with_config(injector, InputConfig::default())
    }

    /// Create a translator with explicit configuration
    pub fn with_config(injector: I, config: InputConfig) -> Self {
        Self {
            injector,
            config,
            pointer: PointerTranslator::new(),
            touch: TouchTranslator::new(),
            keyboard: KeyTranslator::new(),
            events_processed: 0,
        }
    }

    /// Create a translator wired to a pointer capture host
    pub fn with_capture_host(
        injector: I,
        config: InputConfig,
        capture: Box<dyn PointerCaptureHost>,
    ) -> Self {
        Self {
            injector,
            config,
            pointer: PointerTranslator::new(),
            touch: TouchTranslator::new(),
            keyboard: KeyTranslator::with_capture_host(capture),
            events_processed: 0,
        }
    }

    /// Forward a pointer event carrying a raw button id
    pub fn send_mouse_event(
        &mut self,
        x: f32,
        y: f32,
        button: i32,
        pressed: bool,
        relative: bool,
    ) -> Result<()> {
        self.events_processed += 1;
        self.pointer
            .send_mouse_event(&mut self.injector, x, y, button, pressed, relative)
    }

    /// Press a button at the origin
    pub fn send_mouse_down(&mut self, button: PointerButton, relative: bool) {
        self.events_processed += 1;
        self.pointer.send_mouse_down(&mut self.injector, button, relative);
    }

    /// Release a button at the origin
    pub fn send_mouse_up(&mut self, button: PointerButton, relative: bool) {
        self.events_processed += 1;
        self.pointer.send_mouse_up(&mut self.injector, button, relative);
    }

    /// Press and release a button at the origin
    pub fn send_mouse_click(&mut self, button: PointerButton, relative: bool) {
        self.events_processed += 1;
        self.pointer.send_mouse_click(&mut self.injector, button, relative);
    }

    /// Move the cursor without any button transition
    pub fn send_cursor_move(&mut self, x: f32, y: f32, relative: bool) {
        self.events_processed += 1;
        self.pointer.send_cursor_move(&mut self.injector, x, y, relative);
    }

    /// Forward wheel scroll deltas
    pub fn send_mouse_wheel(&mut self, delta_x: f32, delta_y: f32) {
        self.events_processed += 1;
        self.pointer.send_mouse_wheel(&mut self.injector, delta_x, delta_y);
    }

    /// Translate one touch batch against the given render geometry
    pub fn send_touch_event(&mut self, event: &TouchEvent, render: &RenderData) -> Result<()> {
        self.events_processed += 1;
        self.touch.send_touch_event(&mut self.injector, event, render)
    }

    /// Translate one key event, returning whether it was handled
    pub fn send_key_event(&mut self, event: &KeyEvent) -> bool {
        self.events_processed += 1;
        self.keyboard
            .send_key_event(&mut self.injector, event, &self.config)
    }

    /// Forward client scancodes instead of zero on raw key events
    ///
    /// Also disables the Unicode text path, so physical keyboards behave as
    /// if plugged into the remote host.
    pub fn set_prefer_scancodes(&mut self, prefer: bool) {
        debug!("prefer_scancodes set to {}", prefer);
        self.config.prefer_scancodes = prefer;
    }

    /// Whether client scancodes are forwarded
    pub fn prefer_scancodes(&self) -> bool {
        self.config.prefer_scancodes
    }

    /// Mark the pointer as captured by the remote session
    pub fn set_pointer_capture(&mut self, capture: bool) {
        debug!("pointer_capture set to {}", capture);
        self.config.pointer_capture = capture;
    }

    /// Whether the pointer is treated as captured
    pub fn pointer_capture(&self) -> bool {
        self.config.pointer_capture
    }

    /// Current configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Clear all per-session translation state
    ///
    /// Held touch contacts and remembered text keys are forgotten without
    /// emitting anything; use this on session teardown or reconnect.
    pub fn reset(&mut self) {
        self.touch.reset();
        self.keyboard.reset();
        debug!("Input translator reset");
    }

    /// Total events accepted for translation
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Shared access to the injector
    pub fn injector(&self) -> &I {
        &self.injector
    }

    /// Exclusive access to the injector
    pub fn injector_mut(&mut self) -> &mut I {
        &mut self.injector
    }

    /// Consume the translator, returning the injector
    pub fn into_injector(self) -> I {
        self.injector
    }
}
