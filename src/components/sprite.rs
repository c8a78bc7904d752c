//! Sprite rendering component.

use bevy_ecs::prelude::Component;

/// What the renderer draws for an entity: one frame of a sliced sheet.
///
/// `sheet_key` selects the sheet in the
/// [`SheetStore`](crate::resources::sheetstore::SheetStore), `row` the
/// animation row within it. The frame index inside the row comes from the
/// [`Animation`](crate::components::animation::Animation) component. When
/// `flip_h` is set the frame is drawn mirrored horizontally.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub sheet_key: String,
    pub row: usize,
    pub flip_h: bool,
}
