//! Input action events.
//!
//! This module defines [`InputEvent`], triggered by the input system for
//! every press or release edge of a direction key. The heading observer in
//! [`crate::systems::heading`] subscribes to these events, so gameplay code
//! never reads the keyboard directly.

use bevy_ecs::prelude::*;

/// Logical direction keys the game recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move up (default: W key).
    Up,
    /// Move down (default: S key).
    Down,
    /// Move left (default: A key).
    Left,
    /// Move right (default: D key).
    Right,
}

/// Event emitted when a direction key is pressed or released.
///
/// `pressed` is true for the key-down edge and false for the key-up edge.
/// Holding a key emits no further events.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}
