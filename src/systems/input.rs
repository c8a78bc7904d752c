//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame,
//! writes the results into [`crate::resources::input::InputState`] and
//! triggers an [`InputEvent`](crate::events::input::InputEvent) for every
//! press and release edge of the four direction keys.

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input, update `InputState` and emit edge events.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    input.direction_up.active = is_key_down(input.direction_up.key_binding);
    input.direction_down.active = is_key_down(input.direction_down.key_binding);
    input.direction_left.active = is_key_down(input.direction_left.key_binding);
    input.direction_right.active = is_key_down(input.direction_right.key_binding);

    if rl.is_key_pressed(input.direction_up.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Up,
            pressed: true,
        });
    }
    if rl.is_key_released(input.direction_up.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Up,
            pressed: false,
        });
    }
    if rl.is_key_pressed(input.direction_down.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Down,
            pressed: true,
        });
    }
    if rl.is_key_released(input.direction_down.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Down,
            pressed: false,
        });
    }
    if rl.is_key_pressed(input.direction_left.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Left,
            pressed: true,
        });
    }
    if rl.is_key_released(input.direction_left.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Left,
            pressed: false,
        });
    }
    if rl.is_key_pressed(input.direction_right.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Right,
            pressed: true,
        });
    }
    if rl.is_key_released(input.direction_right.key_binding) {
        commands.trigger(InputEvent {
            action: InputAction::Right,
            pressed: false,
        });
    }
}
