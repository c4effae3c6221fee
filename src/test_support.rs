//! Shared test doubles for translator unit tests.
//!
//! Mock expectations work well for single-call assertions, but the touch and
//! keyboard paths emit ordered sequences where recording everything and
//! asserting on the transcript reads much better.

use crate::injector::{InputInjector, PointerButton, TouchPhase};

/// One recorded injector call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Pointer {
        x: i32,
        y: i32,
        button: PointerButton,
        pressed: bool,
        relative: bool,
    },
    Wheel {
        delta_x: f32,
        delta_y: f32,
    },
    Touch {
        phase: TouchPhase,
        id: u32,
        x: i32,
        y: i32,
    },
    Key {
        scancode: u32,
        keycode: u32,
        pressed: bool,
    },
    Unicode {
        code_point: u32,
    },
    Text(String),
}

/// Injector that records every call in order
#[derive(Debug, Default)]
pub(crate) struct RecordingInjector {
    pub(crate) calls: Vec<Call>,

    /// Verdict returned from `send_key_event`
    pub(crate) key_verdict: bool,
}

impl RecordingInjector {
    pub(crate) fn new() -> Self {
        Self {
            calls: Vec::new(),
            key_verdict: true,
        }
    }
}

impl InputInjector for RecordingInjector {
    fn send_pointer_event(&mut self, x: i32, y: i32, button: PointerButton, pressed: bool, relative: bool) {
        self.calls.push(Call::Pointer {
            x,
            y,
            button,
            pressed,
            relative,
        });
    }

    fn send_wheel_event(&mut self, delta_x: f32, delta_y: f32) {
        self.calls.push(Call::Wheel { delta_x, delta_y });
    }

    fn send_touch_event(&mut self, phase: TouchPhase, id: u32, x: i32, y: i32) {
        self.calls.push(Call::Touch { phase, id, x, y });
    }

    fn send_key_event(&mut self, scancode: u32, keycode: u32, pressed: bool) -> bool {
        self.calls.push(Call::Key {
            scancode,
            keycode,
            pressed,
        });
        self.key_verdict
    }

    fn send_unicode_event(&mut self, code_point: u32) {
        self.calls.push(Call::Unicode { code_point });
    }

    fn send_text_event(&mut self, text: &str) {
        self.calls.push(Call::Text(text.to_string()));
    }
}
