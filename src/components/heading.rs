//! Directional heading for keyboard-driven actors.
//!
//! [`Heading`] tracks which movement keys are held, which direction the
//! actor faces, and whether it is idle. [`Direction`] carries the fixed
//! animation-row table of the player sheet: one idle row and one walk row
//! per direction, plus a mirroring flag. Left and right share rows 1/4;
//! left is drawn mirrored.

use bevy_ecs::prelude::Component;

/// Logical movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Animation rows used by a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionAnim {
    /// Sheet row shown while standing still.
    pub idle_row: usize,
    /// Sheet row shown while walking.
    pub walk_row: usize,
    /// Whether frames of this direction are drawn mirrored horizontally.
    pub flip_h: bool,
}

impl Direction {
    /// Row table of the player sheet for this direction.
    pub const fn anim(self) -> DirectionAnim {
        match self {
            Direction::Up => DirectionAnim {
                idle_row: 2,
                walk_row: 5,
                flip_h: false,
            },
            Direction::Down => DirectionAnim {
                idle_row: 0,
                walk_row: 3,
                flip_h: false,
            },
            Direction::Left => DirectionAnim {
                idle_row: 1,
                walk_row: 4,
                flip_h: true,
            },
            Direction::Right => DirectionAnim {
                idle_row: 1,
                walk_row: 4,
                flip_h: false,
            },
        }
    }

    /// The direction on the same axis pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Movement-key state and facing of a directional actor.
///
/// `press`/`release` implement per-axis exclusivity: pressing a direction
/// sets its flag and clears only the opposite flag on the same axis, so
/// up+left is a valid diagonal state while up+down is not. `facing`
/// records the last pressed direction and is never cleared by a release.
#[derive(Component, Clone, Copy, Debug)]
pub struct Heading {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Last pressed direction; selects the animation row even while idle.
    pub facing: Direction,
    /// True iff no movement key is held. Refreshed once per tick.
    pub idle: bool,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            facing: Direction::Down,
            idle: true,
        }
    }
}

impl Heading {
    /// Apply a key-down edge for `direction`.
    pub fn press(&mut self, direction: Direction) {
        *self.flag_mut(direction) = true;
        *self.flag_mut(direction.opposite()) = false;
        self.facing = direction;
    }

    /// Apply a key-up edge for `direction`. Facing is left untouched.
    pub fn release(&mut self, direction: Direction) {
        *self.flag_mut(direction) = false;
    }

    /// Recompute the idle flag from the four movement flags.
    pub fn refresh_idle(&mut self) {
        self.idle = !(self.up || self.down || self.left || self.right);
    }

    fn flag_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
