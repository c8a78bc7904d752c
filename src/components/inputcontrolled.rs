//! Input-controlled movement component.

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
///
/// `speed` is the walk speed in pixels per tick. The walk controller reads
/// the entity's heading and writes `speed`-scaled velocities into its
/// [`RigidBody`](crate::components::rigidbody::RigidBody).
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Walk speed in pixels per tick.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
