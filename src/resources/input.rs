//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes
//! it to systems via the [`InputState`] resource. Defaults use WASD for
//! movement.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

/// Resource capturing the per-frame state of the four direction keys.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState {
                active: false,
                key_binding: KeyboardKey::KEY_W,
            },
            direction_down: BoolState {
                active: false,
                key_binding: KeyboardKey::KEY_S,
            },
            direction_left: BoolState {
                active: false,
                key_binding: KeyboardKey::KEY_A,
            },
            direction_right: BoolState {
                active: false,
                key_binding: KeyboardKey::KEY_D,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.direction_up.active);
        assert!(!input.direction_down.active);
        assert!(!input.direction_left.active);
        assert!(!input.direction_right.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_D);
    }
}
