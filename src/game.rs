//! Game setup: asset loading, sheet slicing, backdrop baking and the
//! player spawn. Runs once before the main loop; problems with assets at
//! this stage are fatal.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::heading::{Direction, Heading};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::framesheet::FrameSheet;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sheetstore::{SheetStore, SheetTextures};
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::Tilemap;
use crate::systems::render::{BACKDROP_TEX_KEY, CLEAR_COLOR};

/// Player sprite sheet: 6 columns x 9 rows of 48x48 frames.
const PLAYER_SHEET_PATH: &str = "./assets/textures/player.png";
const PLAYER_GRID: (i32, i32) = (6, 9);
const PLAYER_FRAME_SIZE: (i32, i32) = (48, 48);
pub const PLAYER_SHEET_KEY: &str = "player";

/// Tile sheet: a 7x7 grid, frame size derived from the image.
const TILE_SHEET_PATH: &str = "./assets/textures/grass.png";
const TILE_GRID: (i32, i32) = (7, 7);

/// Tile map consumed by the backdrop baker; see `--generate-map`.
pub const TILE_MAP_PATH: &str = "./assets/data/tile_map.json";

/// Compose the whole tile map into a single backdrop image.
///
/// Cells indexing past the tile sheet are logged and skipped; one bad cell
/// must not abort the rest of the map.
pub fn bake_backdrop(
    tiles: &FrameSheet,
    map: &Tilemap,
    tile_size: i32,
    width: i32,
    height: i32,
) -> Image {
    let mut backdrop = Image::gen_image_color(width, height, CLEAR_COLOR);
    let (tile_width, tile_height) = tiles.frame_size();
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: tile_width as f32,
        height: tile_height as f32,
    };

    for row in 0..map.rows() {
        for column in 0..map.columns() {
            let Some(index) = map.get(column, row) else {
                continue;
            };
            let Some(tile) = tiles.tile(index as usize) else {
                warn!(
                    "tile index {} at column {}, row {} is outside the {}-tile sheet, skipping",
                    index,
                    column,
                    row,
                    tiles.tile_count()
                );
                continue;
            };
            let dst = Rectangle {
                x: (column as i32 * tile_size) as f32,
                y: (row as i32 * tile_size) as f32,
                width: tile_size as f32,
                height: tile_size as f32,
            };
            let mut tile = tile.clone();
            backdrop.draw(&mut tile, src, dst, Color::WHITE);
        }
    }

    backdrop
}

/// Load assets, slice the sheets, bake the backdrop and spawn the player.
pub fn setup(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");

    let config = world.resource::<GameConfig>().clone();

    // Player sheet: slice on the CPU, then upload one texture per frame.
    let player_sheet =
        FrameSheet::from_file(PLAYER_SHEET_PATH, PLAYER_GRID, Some(PLAYER_FRAME_SIZE))
            .expect("Failed to slice player sheet");
    let frame_count = player_sheet.columns();
    debug!(
        "player sheet: {} rows of {} frames",
        player_sheet.rows(),
        frame_count
    );

    let mut sheet_rows = Vec::new();
    for row in player_sheet.into_frames() {
        let mut frame_textures = Vec::new();
        for frame in &row {
            let texture = rl
                .load_texture_from_image(&thread, frame)
                .expect("Failed to upload player frame");
            frame_textures.push(texture);
        }
        sheet_rows.push(frame_textures);
    }
    let mut sheets = SheetStore::new();
    sheets.insert(PLAYER_SHEET_KEY, SheetTextures::new(sheet_rows));
    world.insert_resource(sheets);

    // Tile backdrop: slice the tile sheet, compose the map once, upload.
    let tiles =
        FrameSheet::from_file(TILE_SHEET_PATH, TILE_GRID, None).expect("Failed to slice tile sheet");
    let map = Tilemap::load_from_file(TILE_MAP_PATH).expect("Failed to load tile map");
    info!("tile map: {}x{} tiles", map.columns(), map.rows());

    let backdrop = bake_backdrop(
        &tiles,
        &map,
        config.tile_size as i32,
        config.window_width as i32,
        config.window_height as i32,
    );
    let backdrop_tex = rl
        .load_texture_from_image(&thread, &backdrop)
        .expect("Failed to upload backdrop");
    let mut textures = TextureStore::new();
    textures.insert(BACKDROP_TEX_KEY, backdrop_tex);
    world.insert_resource(textures);

    // The player starts idle at the origin, facing down.
    world.spawn((
        MapPosition::new(0.0, 0.0),
        Heading::default(),
        RigidBody::new(),
        InputControlled::new(config.player_speed),
        Sprite {
            sheet_key: PLAYER_SHEET_KEY.to_string(),
            row: Direction::Down.anim().idle_row,
            flip_h: false,
        },
        Animation::new(frame_count, config.frame_delay_ms),
    ));

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_backdrop_covers_the_window() {
        let sheet_image = Image::gen_image_color(70, 70, Color::RED);
        let tiles = FrameSheet::from_image(&sheet_image, TILE_GRID, None).expect("tile sheet");
        let map = Tilemap {
            tilemap: vec![vec![0, 1], vec![47, 48]],
        };

        let backdrop = bake_backdrop(&tiles, &map, 20, 40, 40);
        assert_eq!(backdrop.width, 40);
        assert_eq!(backdrop.height, 40);
    }

    #[test]
    fn test_bake_backdrop_skips_out_of_range_tiles() {
        let sheet_image = Image::gen_image_color(70, 70, Color::RED);
        let tiles = FrameSheet::from_image(&sheet_image, TILE_GRID, None).expect("tile sheet");
        // 99 points past the 49-tile sheet; the rest of the map still bakes.
        let map = Tilemap {
            tilemap: vec![vec![0, 99], vec![1, 2]],
        };

        let backdrop = bake_backdrop(&tiles, &map, 20, 40, 40);
        assert_eq!(backdrop.width, 40);
        assert_eq!(backdrop.height, 40);
    }
}
