//! Sliced sprite-sheet texture registry.
//!
//! After a [`FrameSheet`](crate::framesheet::FrameSheet) is sliced on the
//! CPU, its frames are uploaded one texture per frame and kept here in the
//! same row-major layout, so the renderer can address them by
//! `(row, frame index)`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// GPU textures of one sliced sheet, row-major like the source FrameSheet.
pub struct SheetTextures {
    rows: Vec<Vec<Texture2D>>,
}

impl SheetTextures {
    pub fn new(rows: Vec<Vec<Texture2D>>) -> Self {
        Self { rows }
    }

    /// Texture of the frame at `(row, index)`, or None outside the sheet.
    pub fn frame(&self, row: usize, index: usize) -> Option<&Texture2D> {
        self.rows.get(row)?.get(index)
    }
}

/// Registry of uploaded sheets by key.
#[derive(Resource, Default)]
pub struct SheetStore {
    pub map: FxHashMap<String, SheetTextures>,
}

impl SheetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SheetStore {
            map: FxHashMap::default(),
        }
    }

    /// Get a sheet by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&SheetTextures> {
        self.map.get(key.as_ref())
    }

    /// Insert a sheet with a specific key.
    pub fn insert(&mut self, key: impl Into<String>, sheet: SheetTextures) {
        self.map.insert(key.into(), sheet);
    }
}
