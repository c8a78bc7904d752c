//! Render system.
//!
//! Draws the baked tile backdrop first, then every sprite frame at its map
//! position. Horizontal mirroring uses a negative source-rectangle width,
//! which Raylib interprets as a flipped blit.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::sheetstore::SheetStore;
use crate::resources::texturestore::TextureStore;

/// Clear color behind the backdrop.
pub const CLEAR_COLOR: Color = Color {
    r: 50,
    g: 50,
    b: 50,
    a: 255,
};

/// Texture key of the baked tile backdrop.
pub const BACKDROP_TEX_KEY: &str = "backdrop";

/// Draw one frame: clear, backdrop, then sprites.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");

    // Collect first; drawing below borrows the stores immutably.
    let to_draw: Vec<(Sprite, usize, MapPosition)> = {
        let mut query = world.query::<(&Sprite, &Animation, &MapPosition)>();
        query
            .iter(world)
            .map(|(sprite, animation, position)| {
                (sprite.clone(), animation.frame_index, *position)
            })
            .collect()
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(CLEAR_COLOR);

        let textures = world.resource::<TextureStore>();
        if let Some(backdrop) = textures.get(BACKDROP_TEX_KEY) {
            d.draw_texture(backdrop, 0, 0, Color::WHITE);
        }

        let sheets = world.resource::<SheetStore>();
        for (sprite, frame_index, position) in to_draw.iter() {
            let Some(frame) = sheets
                .get(&sprite.sheet_key)
                .and_then(|sheet| sheet.frame(sprite.row, *frame_index))
            else {
                continue;
            };

            let mut src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: frame.width as f32,
                height: frame.height as f32,
            };
            if sprite.flip_h {
                src.width = -src.width;
            }

            d.draw_texture_rec(
                frame,
                src,
                Vector2 {
                    x: position.x,
                    y: position.y,
                },
                Color::WHITE,
            );
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
