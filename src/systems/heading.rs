//! Heading observer.
//!
//! Applies direction-key edges to every heading-controlled entity. A press
//! sets the direction's flag, clears the opposite flag on the same axis and
//! records the facing direction; a release clears only the flag. Both
//! axes stay independent, so diagonals are reachable.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::heading::{Direction, Heading};
use crate::events::input::{InputAction, InputEvent};

fn direction_for(action: InputAction) -> Direction {
    match action {
        InputAction::Up => Direction::Up,
        InputAction::Down => Direction::Down,
        InputAction::Left => Direction::Left,
        InputAction::Right => Direction::Right,
    }
}

/// Observer that applies an input edge to every heading.
pub fn heading_observer(trigger: On<InputEvent>, mut query: Query<&mut Heading>) {
    let event = trigger.event();
    let direction = direction_for(event.action);
    for mut heading in query.iter_mut() {
        if event.pressed {
            heading.press(direction);
        } else {
            heading.release(direction);
        }
    }
}
