//! Input Translation Error Types
//!
//! Error handling for the input translation crate. The error surface is
//! deliberately small: almost every input is accepted and normalized
//! (coordinates clamp, unknown keys fall through to raw forwarding), so
//! only genuinely malformed arguments are rejected.

use crate::touch::MAX_TOUCH_SLOTS;
use thiserror::Error;

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Input translation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Pointer button id outside the supported set
    #[error("unrecognized pointer button id: {0}")]
    InvalidButton(i32),

    /// Touch contact id outside the slot table capacity
    #[error("touch contact id {id} exceeds capacity {max}", max = MAX_TOUCH_SLOTS)]
    InvalidContactId {
        /// Contact id reported by the event source
        id: u32,
    },

    /// Structurally malformed touch batch
    #[error("invalid touch event: {0}")]
    InvalidTouchEvent(String),
}
