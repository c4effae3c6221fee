//! Keyboard Event Translation
//!
//! Decides, per key event, whether input travels as committed text, as a
//! synthesized Unicode code point, or as a raw key transition. Software
//! keyboards should inject exactly what the user sees on screen, while a
//! physical keyboard should behave as if plugged into the remote host; the
//! text paths serve the former, raw forwarding the latter.

use crate::config::InputConfig;
use crate::injector::{InputInjector, NoopCaptureHost, PointerCaptureHost};
use crate::keycodes;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Modifier state attached to a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    /// Left or right Shift pressed
    pub shift: bool,
    /// Left or right Ctrl pressed
    pub ctrl: bool,
    /// Left or right Alt pressed
    pub alt: bool,
    /// Left or right Meta/Super pressed
    pub meta: bool,
}

impl KeyModifiers {
    /// Whether none of Alt, Ctrl and Meta are held
    ///
    /// Shift deliberately does not count: a shifted letter still carries the
    /// character the user saw, so it may travel as text.
    pub fn allows_text_input(&self) -> bool {
        !self.alt && !self.ctrl && !self.meta
    }
}

/// A keyboard event as delivered by the client
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// Client keycode (see [`crate::keycodes`])
    pub keycode: u32,

    /// Hardware scan code, zero when the client did not report one
    pub scancode: u32,

    /// Unicode code point this key produces under the current layout, zero
    /// for keys without a character
    pub unicode: u32,

    /// Modifier state at the time of the event
    pub modifiers: KeyModifiers,

    /// Press (`true`) or release (`false`)
    pub pressed: bool,

    /// Client-side autorepeat count, zero for the initial transition
    pub repeat: u32,

    /// Committed text, present only for text-commit events
    pub characters: Option<String>,
}

impl KeyEvent {
    /// Plain key transition with no character payload
    pub fn key(keycode: u32, pressed: bool) -> Self {
        Self {
            keycode,
            scancode: 0,
            unicode: 0,
            modifiers: KeyModifiers::default(),
            pressed,
            repeat: 0,
            characters: None,
        }
    }

    /// Committed-text event, as produced by software keyboards
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            keycode: keycodes::UNKNOWN,
            scancode: 0,
            unicode: 0,
            modifiers: KeyModifiers::default(),
            pressed: false,
            repeat: 0,
            characters: Some(text.into()),
        }
    }
}

/// Legacy 12-key symbol keys and the Shift-combination each expands to
///
/// Deprecated in the client keycode space, but older devices and third-party
/// keyboards still emit them.
const LEGACY_COMPOSITES: [(u32, u32); 4] = [
    (keycodes::AT, keycodes::DIGIT_2),
    (keycodes::POUND, keycodes::DIGIT_3),
    (keycodes::STAR, keycodes::DIGIT_8),
    (keycodes::PLUS, keycodes::EQUALS),
];

/// Translates client key events into text, unicode, or raw key injection
pub struct KeyTranslator {
    /// Host asked to drop the pointer grab on Escape
    capture: Box<dyn PointerCaptureHost>,

    /// Keys whose latest press went out as a Unicode event
    ///
    /// The matching release must be consumed here; forwarding it raw would
    /// release a key the remote host never saw pressed.
    pressed_text_keys: HashSet<u32>,
}

impl KeyTranslator {
    /// Create a translator whose capture release requests go nowhere
    pub fn new() -> Self {
        Self::with_capture_host(Box::new(NoopCaptureHost))
    }

    /// Create a translator with a capture host
    pub fn with_capture_host(capture: Box<dyn PointerCaptureHost>) -> Self {
        Self {
            capture,
            pressed_text_keys: HashSet::new(),
        }
    }

    /// Translate one key event, returning whether it was handled
    ///
    /// The decision sequence, first match wins:
    ///
    /// 1. Committed text goes out verbatim as a text event.
    /// 2. Unless scancodes are preferred, a character-producing press without
    ///    Alt/Ctrl/Meta goes out as a Unicode event and is remembered, and
    ///    the remembered key's release is swallowed.
    /// 3. Legacy composite keys expand to Shift plus their base key.
    /// 4. Client autorepeat is dropped; everything else is forwarded raw,
    ///    releasing the pointer grab first when Escape is released while
    ///    capture is active.
    pub fn send_key_event<I: InputInjector>(
        &mut self,
        injector: &mut I,
        event: &KeyEvent,
        config: &InputConfig,
    ) -> bool {
        if let Some(text) = &event.characters {
            debug!("Text event with {} chars", text.chars().count());
            injector.send_text_event(text);
            return true;
        }

        // Enter reports a line feed as its character but must always travel
        // as a key event
        let unicode = if event.keycode == keycodes::ENTER {
            0
        } else {
            event.unicode
        };
        let scancode = if config.prefer_scancodes {
            event.scancode
        } else {
            0
        };

        if !config.prefer_scancodes {
            if event.pressed && unicode != 0 && event.modifiers.allows_text_input() {
                self.pressed_text_keys.insert(event.keycode);
                debug!("Key {} sent as unicode {:#x}", event.keycode, unicode);
                injector.send_unicode_event(unicode);
                return true;
            }

            if !event.pressed && self.pressed_text_keys.remove(&event.keycode) {
                trace!("Swallowed release of text key {}", event.keycode);
                return true;
            }
        }

        for (composite, base) in LEGACY_COMPOSITES {
            if event.keycode == composite {
                debug!("Legacy key {} expanded to Shift+{}", composite, base);
                injector.send_key_event(0, keycodes::SHIFT_LEFT, event.pressed);
                injector.send_key_event(0, base, event.pressed);
                return true;
            }
        }

        // The remote host generates its own key repeat
        if event.repeat > 0 {
            trace!("Dropped autorepeat of key {}", event.keycode);
            return true;
        }

        if config.pointer_capture && event.keycode == keycodes::ESCAPE && !event.pressed {
            debug!("Escape released, dropping pointer capture");
            self.capture.release_pointer_capture();
        }

        trace!(
            "Key {} {} (scancode {})",
            event.keycode,
            if event.pressed { "down" } else { "up" },
            scancode
        );
        injector.send_key_event(scancode, event.keycode, event.pressed)
    }

    /// Number of keys whose release is still owed to the text path
    pub fn pressed_text_key_count(&self) -> usize {
        self.pressed_text_keys.len()
    }

    /// Forget all remembered text keys
    pub fn reset(&mut self) {
        debug!("Keyboard translator state reset");
        self.pressed_text_keys.clear();
    }
}

impl Default for KeyTranslator {
    fn default() -> Self {
        Self::new()
    }
}
