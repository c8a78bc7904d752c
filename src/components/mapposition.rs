use bevy_ecs::prelude::Component;

/// World-space position of an entity, in pixels.
///
/// Positions are floating point so diagonal movement keeps its sub-pixel
/// remainder between ticks.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
