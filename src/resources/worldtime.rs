//! Simulation clock resource.

use bevy_ecs::prelude::Resource;

/// World clock: total elapsed seconds and the last frame delta.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since startup. Kept as f64 so the millisecond clock stays
    /// exact over long sessions.
    pub elapsed: f64,
    /// Seconds of the last frame.
    pub delta: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
        }
    }
}

impl WorldTime {
    /// Elapsed time in whole milliseconds, for millisecond-gated clocks.
    pub fn elapsed_millis(&self) -> u64 {
        (self.elapsed * 1000.0) as u64
    }
}
