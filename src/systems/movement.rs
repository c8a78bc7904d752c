//! Movement system.
//!
//! Integrates per-tick velocities into map positions. Speeds are defined
//! in pixels per tick, so there is no delta-time scaling here; the main
//! loop paces ticks at the configured frame rate.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

/// Add each entity's velocity for this tick to its position.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.x += rigidbody.velocity.x;
        position.y += rigidbody.velocity.y;
    }
}
