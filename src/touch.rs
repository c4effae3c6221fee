//! Touch Event Translation
//!
//! Translates multi-contact touch batches into per-contact lifecycle events.
//! The tricky part is that client platforms drop lift notifications under
//! load, which would leave contacts stuck down on the remote screen forever.
//! Every move-class batch therefore re-derives the full set of held contacts
//! from scratch and explicitly ends everything the batch no longer reports.

use crate::error::{InputError, Result};
use crate::injector::{InputInjector, TouchPhase};
use crate::render::RenderData;
use tracing::{debug, trace, warn};

/// Number of simultaneous touch contacts tracked
///
/// Contact ids at or above this bound are rejected as malformed rather than
/// silently ignored.
pub const MAX_TOUCH_SLOTS: usize = 10;

/// Touch gesture actions as reported by clients
///
/// Codes mirror the client protocol's motion action values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// First contact landed
    Down,
    /// Last contact lifted
    Up,
    /// One or more held contacts moved
    Move,
    /// Gesture aborted by the client
    Cancel,
    /// Additional contact landed mid-gesture
    PointerDown,
    /// Non-final contact lifted mid-gesture
    PointerUp,
    /// Hover position changed without contact
    HoverMove,
    /// Hover entered the surface
    HoverEnter,
    /// Hover left the surface
    HoverExit,
}

impl TouchAction {
    /// Convert from the client protocol action code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(TouchAction::Down),
            1 => Some(TouchAction::Up),
            2 => Some(TouchAction::Move),
            3 => Some(TouchAction::Cancel),
            5 => Some(TouchAction::PointerDown),
            6 => Some(TouchAction::PointerUp),
            7 => Some(TouchAction::HoverMove),
            9 => Some(TouchAction::HoverEnter),
            10 => Some(TouchAction::HoverExit),
            _ => None,
        }
    }

    /// Whether this action reports positions for every held contact
    ///
    /// Move-class batches describe the complete contact set and drive the
    /// slot table; all other actions describe a single active contact.
    pub fn is_move_class(&self) -> bool {
        matches!(
            self,
            TouchAction::Move
                | TouchAction::HoverMove
                | TouchAction::HoverEnter
                | TouchAction::HoverExit
        )
    }
}

/// One touch contact within a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Stable contact id assigned by the client, `0..MAX_TOUCH_SLOTS`
    pub id: u32,

    /// Client-space position
    pub x: f32,

    /// Client-space position
    pub y: f32,
}

/// A batch of touch contacts sharing one action
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// What happened in this batch
    pub action: TouchAction,

    /// Every contact currently known to the client
    pub contacts: Vec<Contact>,

    /// Index into `contacts` of the contact the action applies to
    pub action_index: usize,
}

impl TouchEvent {
    /// Create a touch event
    pub fn new(action: TouchAction, contacts: Vec<Contact>, action_index: usize) -> Self {
        Self {
            action,
            contacts,
            action_index,
        }
    }

    /// Create a single-contact event with the contact as the action target
    pub fn single(action: TouchAction, contact: Contact) -> Self {
        Self::new(action, vec![contact], 0)
    }
}

/// Translates touch batches into per-contact lifecycle events
#[derive(Debug, Clone)]
pub struct TouchTranslator {
    /// Which contact ids the latest move-class batch reported as held
    down_slots: [bool; MAX_TOUCH_SLOTS],
}

impl TouchTranslator {
    /// Create a new touch translator with no held contacts
    pub fn new() -> Self {
        Self {
            down_slots: [false; MAX_TOUCH_SLOTS],
        }
    }

    /// Forget all held contacts without emitting anything
    pub fn reset(&mut self) {
        debug!("Touch translator state reset");
        self.down_slots = [false; MAX_TOUCH_SLOTS];
    }

    /// Translate one touch batch
    ///
    /// Move-class batches update every reported contact and then end every
    /// slot the batch did not mention. Other actions forward only the active
    /// contact: `Down`/`PointerDown` begin it, everything else updates it at
    /// its final position and then ends it there.
    ///
    /// Malformed batches (contact id out of range, action index past the
    /// contact list) are rejected before any event reaches the injector.
    pub fn send_touch_event<I: InputInjector>(
        &mut self,
        injector: &mut I,
        event: &TouchEvent,
        render: &RenderData,
    ) -> Result<()> {
        if event.action.is_move_class() {
            self.send_move_batch(injector, event, render)
        } else {
            self.send_active_contact(injector, event, render)
        }
    }

    fn send_move_batch<I: InputInjector>(
        &mut self,
        injector: &mut I,
        event: &TouchEvent,
        render: &RenderData,
    ) -> Result<()> {
        // Validate the whole batch up front so a rejected batch emits nothing
        for contact in &event.contacts {
            if contact.id as usize >= MAX_TOUCH_SLOTS {
                warn!(
                    "Rejected {:?} batch: contact id {} out of range",
                    event.action, contact.id
                );
                return Err(InputError::InvalidContactId { id: contact.id });
            }
        }

        let previously_down = self.down_slots;
        self.down_slots = [false; MAX_TOUCH_SLOTS];

        for contact in &event.contacts {
            let (x, y) = render.map_to_screen(contact.x, contact.y);
            self.down_slots[contact.id as usize] = true;
            trace!("Touch update: contact {} at ({}, {})", contact.id, x, y);
            injector.send_touch_event(TouchPhase::Update, contact.id, x, y);
        }

        // End every slot the batch no longer reports. Clients drop lift
        // notifications under load; without this sweep those contacts would
        // stay held on the remote screen indefinitely.
        for id in 0..MAX_TOUCH_SLOTS {
            if !self.down_slots[id] {
                if previously_down[id] {
                    debug!("Touch contact {} vanished from batch, ending it", id);
                }
                injector.send_touch_event(TouchPhase::End, id as u32, 0, 0);
            }
        }

        Ok(())
    }

    fn send_active_contact<I: InputInjector>(
        &mut self,
        injector: &mut I,
        event: &TouchEvent,
        render: &RenderData,
    ) -> Result<()> {
        // Only the active contact is forwarded. Passing the co-present
        // contacts here confuses remote gesture recognition.
        let contact = match event.contacts.get(event.action_index) {
            Some(contact) => contact,
            None => {
                warn!(
                    "Rejected {:?} event: action index {} out of bounds ({} contacts)",
                    event.action,
                    event.action_index,
                    event.contacts.len()
                );
                return Err(InputError::InvalidTouchEvent(format!(
                    "action index {} out of bounds for {} contacts",
                    event.action_index,
                    event.contacts.len()
                )));
            }
        };

        if contact.id as usize >= MAX_TOUCH_SLOTS {
            warn!(
                "Rejected {:?} event: contact id {} out of range",
                event.action, contact.id
            );
            return Err(InputError::InvalidContactId { id: contact.id });
        }

        let (x, y) = render.map_to_screen(contact.x, contact.y);

        match event.action {
            TouchAction::Down | TouchAction::PointerDown => {
                debug!("Touch begin: contact {} at ({}, {})", contact.id, x, y);
                injector.send_touch_event(TouchPhase::Begin, contact.id, x, y);
            }
            _ => {
                // Update first so the lift lands at the contact's final
                // position rather than wherever the last move left it
                debug!("Touch end: contact {} at ({}, {})", contact.id, x, y);
                injector.send_touch_event(TouchPhase::Update, contact.id, x, y);
                injector.send_touch_event(TouchPhase::End, contact.id, x, y);
            }
        }

        Ok(())
    }
}

impl Default for TouchTranslator {
    fn default() -> Self {
        Self::new()
    }
}
