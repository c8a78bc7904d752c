//! Random tile-map generator behind the `--generate-map` flag.
//!
//! Writes the JSON tile-map object consumed at startup: a rectangular grid
//! of random indices into the 7x7 tile sheet, sized to cover the
//! configured window.

use std::path::Path;

use fastrand::Rng;

use crate::resources::tilemap::Tilemap;

/// Number of cells in the 7x7 tile sheet; generated indices stay below it.
pub const TILE_COUNT: u32 = 49;

/// Generate a `columns` x `rows` map of random tile indices.
pub fn generate(rng: &mut Rng, columns: usize, rows: usize) -> Tilemap {
    let tilemap = (0..rows)
        .map(|_| (0..columns).map(|_| rng.u32(0..TILE_COUNT)).collect())
        .collect();
    Tilemap { tilemap }
}

/// Generate a map and write it as JSON to `path`.
pub fn write_map(path: &Path, columns: usize, rows: usize) -> Result<(), String> {
    let mut rng = Rng::new();
    let map = generate(&mut rng, columns, rows);
    let json = serde_json::to_string(&map)
        .map_err(|e| format!("Failed to serialize tile map: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
