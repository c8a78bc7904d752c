//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Accumulate the frame delta into the world clock.
///
/// `dt` is the frame delta in seconds, as reported by Raylib.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    time.elapsed += dt as f64;
    time.delta = dt;
}
