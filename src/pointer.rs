//! Pointer Event Translation
//!
//! Stateless forwarding of mouse moves, clicks, and wheel scrolls. Callers
//! map positions into screen space before reaching this module; the only jobs
//! left here are button validation and float-to-int truncation, so the
//! translator keeps no state between calls.

use crate::error::{InputError, Result};
use crate::injector::{InputInjector, PointerButton};
use tracing::{debug, trace, warn};

/// Translates client pointer activity into injector calls
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTranslator;

impl PointerTranslator {
    /// Create a new pointer translator
    pub fn new() -> Self {
        Self
    }

    /// Forward a pointer event carrying a raw button id
    ///
    /// The button id is validated before anything reaches the injector;
    /// unknown ids are rejected with [`InputError::InvalidButton`]. The
    /// position is truncated toward zero, not rounded and not clamped, since
    /// relative events legitimately carry negative deltas.
    pub fn send_mouse_event<I: InputInjector>(
        &self,
        injector: &mut I,
        x: f32,
        y: f32,
        button: i32,
        pressed: bool,
        relative: bool,
    ) -> Result<()> {
        let button = match PointerButton::from_code(button) {
            Some(button) => button,
            None => {
                warn!("Rejected pointer event with unknown button id {}", button);
                return Err(InputError::InvalidButton(button));
            }
        };

        debug!(
            "Pointer event: button {:?} {} at ({}, {}){}",
            button,
            if pressed { "down" } else { "up" },
            x as i32,
            y as i32,
            if relative { " (relative)" } else { "" },
        );
        injector.send_pointer_event(x as i32, y as i32, button, pressed, relative);
        Ok(())
    }

    /// Press a button at the origin
    pub fn send_mouse_down<I: InputInjector>(
        &self,
        injector: &mut I,
        button: PointerButton,
        relative: bool,
    ) {
        debug!("Pointer button {:?} down", button);
        injector.send_pointer_event(0, 0, button, true, relative);
    }

    /// Release a button at the origin
    pub fn send_mouse_up<I: InputInjector>(
        &self,
        injector: &mut I,
        button: PointerButton,
        relative: bool,
    ) {
        debug!("Pointer button {:?} up", button);
        injector.send_pointer_event(0, 0, button, false, relative);
    }

    /// Press and release a button at the origin
    pub fn send_mouse_click<I: InputInjector>(
        &self,
        injector: &mut I,
        button: PointerButton,
        relative: bool,
    ) {
        debug!("Pointer button {:?} click", button);
        injector.send_pointer_event(0, 0, button, true, relative);
        injector.send_pointer_event(0, 0, button, false, relative);
    }

    /// Move the cursor without any button transition
    pub fn send_cursor_move<I: InputInjector>(
        &self,
        injector: &mut I,
        x: f32,
        y: f32,
        relative: bool,
    ) {
        trace!("Cursor move to ({}, {})", x as i32, y as i32);
        injector.send_pointer_event(x as i32, y as i32, PointerButton::Undefined, false, relative);
    }

    /// Forward wheel scroll deltas untouched
    ///
    /// Units and sign conventions belong to the injector backend.
    pub fn send_mouse_wheel<I: InputInjector>(&self, injector: &mut I, delta_x: f32, delta_y: f32) {
        trace!("Wheel scroll ({}, {})", delta_x, delta_y);
        injector.send_wheel_event(delta_x, delta_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injector::MockInputInjector;
    use mockall::Sequence;

    #[test]
    fn test_mouse_event_truncates_toward_zero() {
        let translator = PointerTranslator::new();
        let mut injector = MockInputInjector::new();

        injector
            .expect_send_pointer_event()
            .withf(|x, y, button, pressed, relative| {
                (*x, *y, *button, *pressed, *relative) == (651, -3, PointerButton::Left, true, false)
            })
            .times(1)
            .return_const(());

        translator
            .send_mouse_event(&mut injector, 651.9, -3.7, 1, true, false)
            .unwrap();
    }

    #[test]
    fn test_mouse_event_rejects_unknown_button() {
        let translator = PointerTranslator::new();
        // No expectations: any injector call would panic the test
        let mut injector = MockInputInjector::new();

        let result = translator.send_mouse_event(&mut injector, 10.0, 10.0, 4, true, false);
        assert_eq!(result, Err(InputError::InvalidButton(4)));

        let result = translator.send_mouse_event(&mut injector, 10.0, 10.0, -1, false, false);
        assert_eq!(result, Err(InputError::InvalidButton(-1)));
    }

    #[test]
    fn test_mouse_event_accepts_undefined_button() {
        let translator = PointerTranslator::new();
        let mut injector = MockInputInjector::new();

        injector
            .expect_send_pointer_event()
            .withf(|x, y, button, pressed, relative| {
                (*x, *y, *button, *pressed, *relative)
                    == (5, 6, PointerButton::Undefined, false, true)
            })
            .times(1)
            .return_const(());

        translator
            .send_mouse_event(&mut injector, 5.2, 6.9, 0, false, true)
            .unwrap();
    }

    #[test]
    fn test_mouse_down_and_up_at_origin() {
        let translator = PointerTranslator::new();
        let mut injector = MockInputInjector::new();

        injector
            .expect_send_pointer_event()
            .withf(|x, y, button, pressed, relative| {
                (*x, *y, *button, *pressed, *relative) == (0, 0, PointerButton::Right, true, false)
            })
            .times(1)
            .return_const(());

        translator.send_mouse_down(&mut injector, PointerButton::Right, false);

        let mut injector = MockInputInjector::new();
        injector
            .expect_send_pointer_event()
            .withf(|x, y, button, pressed, relative| {
                (*x, *y, *button, *pressed, *relative) == (0, 0, PointerButton::Right, false, false)
            })
            .times(1)
            .return_const(());

        translator.send_mouse_up(&mut injector, PointerButton::Right, false);
    }

    #[test]
    fn test_mouse_click_presses_then_releases() {
        let translator = PointerTranslator::new();
        let mut injector = MockInputInjector::new();
        let mut seq = Sequence::new();

        injector
            .expect_send_pointer_event()
            .withf(|_, _, button, pressed, _| *button == PointerButton::Left && *pressed)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        injector
            .expect_send_pointer_event()
            .withf(|_, _, button, pressed, _| *button == PointerButton::Left && !*pressed)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        translator.send_mouse_click(&mut injector, PointerButton::Left, false);
    }

    #[test]
    fn test_cursor_move_has_no_button() {
        let translator = PointerTranslator::new();
        let mut injector = MockInputInjector::new();

        injector
            .expect_send_pointer_event()
            .withf(|x, y, button, pressed, relative| {
                (*x, *y, *button, *pressed, *relative)
                    == (120, 240, PointerButton::Undefined, false, false)
            })
            .times(1)
            .return_const(());

        translator.send_cursor_move(&mut injector, 120.7, 240.2, false);
    }

    #[test]
    fn test_wheel_passes_deltas_through() {
        let translator = PointerTranslator::new();
        let mut injector = MockInputInjector::new();

        injector
            .expect_send_wheel_event()
            .withf(|dx, dy| (*dx, *dy) == (-3.5, 12.25))
            .times(1)
            .return_const(());

        translator.send_mouse_wheel(&mut injector, -3.5, 12.25);
    }
}
