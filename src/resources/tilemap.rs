//! Tile map data and loading.
//!
//! The on-disk format is a JSON object holding a rectangular, row-major
//! grid of tile indices into the tile sheet:
//!
//! ```json
//! {"tilemap": [[0, 7, 12], [3, 3, 48]]}
//! ```
//!
//! Out-of-range indices are representable here; whether they are drawable
//! is decided by the backdrop baker against the sliced tile sheet.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A rectangular grid of tile indices, row-major.
#[derive(Debug, Deserialize, Serialize)]
pub struct Tilemap {
    pub tilemap: Vec<Vec<u32>>,
}

impl Tilemap {
    /// Read and parse a tile map JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tile map {}: {}", path.display(), e))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse tile map: {}", e))
    }

    /// Map height in tiles.
    pub fn rows(&self) -> usize {
        self.tilemap.len()
    }

    /// Map width in tiles, taken from the first row.
    pub fn columns(&self) -> usize {
        self.tilemap.first().map(Vec::len).unwrap_or(0)
    }

    /// Tile index at `(column, row)`, or None outside the map.
    pub fn get(&self, column: usize, row: usize) -> Option<u32> {
        self.tilemap.get(row)?.get(column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tile_map_json() {
        let map: Tilemap = serde_json::from_str(r#"{"tilemap": [[0, 1, 2], [3, 4, 5]]}"#)
            .expect("valid tile map JSON");
        assert_eq!(map.columns(), 3);
        assert_eq!(map.rows(), 2);
        assert_eq!(map.get(2, 1), Some(5));
    }

    #[test]
    fn test_get_outside_the_map() {
        let map = Tilemap {
            tilemap: vec![vec![0, 1], vec![2, 3]],
        };
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    fn test_empty_map() {
        let map = Tilemap { tilemap: vec![] };
        assert_eq!(map.columns(), 0);
        assert_eq!(map.rows(), 0);
        assert_eq!(map.get(0, 0), None);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Tilemap::load_from_file("./does_not_exist.json").is_err());
    }
}
