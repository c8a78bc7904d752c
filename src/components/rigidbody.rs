//! Kinematic body component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity applied this tick, in pixels.
///
/// Written by the walk controller each tick and consumed by the movement
/// system. The prototype is purely kinematic: no forces, no friction.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
