//! Sprite-sheet slicing.
//!
//! A [`FrameSheet`] splits a source image into a row-major grid of frames.
//! Every extracted frame gets the fixed colorkey treatment (pure black
//! becomes transparent) and a fixed 2x nearest-neighbor upscale, so a
//! 48x48 cell yields a 96x96 frame. Slicing happens entirely on the CPU;
//! uploading frames to the GPU is the caller's business.
//!
//! Tile sheets go through the same extraction and address cells through
//! the flattened row-major [`FrameSheet::tile`] index.

use raylib::prelude::*;
use std::fmt;
use std::path::Path;

/// Fixed upscale applied to every extracted frame.
pub const SCALE_FACTOR: i32 = 2;

/// Pixel color treated as fully transparent on every frame.
const COLORKEY: Color = Color::BLACK;

/// Errors reported when a sheet cannot be sliced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSheetError {
    /// Grid dimensions must both be positive.
    InvalidGrid { columns: i32, rows: i32 },
    /// The image cannot be cut into the requested cells.
    UnevenSheet {
        width: i32,
        height: i32,
        columns: i32,
        rows: i32,
    },
    /// The source image could not be loaded.
    Load(String),
}

impl fmt::Display for FrameSheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSheetError::InvalidGrid { columns, rows } => {
                write!(f, "invalid sheet grid {}x{}", columns, rows)
            }
            FrameSheetError::UnevenSheet {
                width,
                height,
                columns,
                rows,
            } => write!(
                f,
                "sheet {}x{} cannot be cut into a {}x{} grid",
                width, height, columns, rows
            ),
            FrameSheetError::Load(msg) => write!(f, "failed to load sheet: {}", msg),
        }
    }
}

impl std::error::Error for FrameSheetError {}

/// An immutable, addressable collection of frames sliced from a sheet.
///
/// `frames[row]` holds exactly `columns` frames for every row, and every
/// frame measures `frame_size()` pixels. Built once at startup; read-only
/// afterwards.
pub struct FrameSheet {
    columns: i32,
    rows: i32,
    frame_width: i32,
    frame_height: i32,
    frames: Vec<Vec<Image>>,
}

impl FrameSheet {
    /// Load an image file and slice it. `size` overrides the per-cell
    /// frame size otherwise derived from the grid.
    pub fn from_file(
        path: impl AsRef<Path>,
        grid: (i32, i32),
        size: Option<(i32, i32)>,
    ) -> Result<Self, FrameSheetError> {
        let path = path.as_ref();
        let image = Image::load_image(&path.to_string_lossy())
            .map_err(|e| FrameSheetError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_image(&image, grid, size)
    }

    /// Slice `source` into `rows` rows of `columns` frames.
    ///
    /// Without an explicit `size`, the cell size is
    /// `(width / columns, height / rows)` and the image dimensions must
    /// divide evenly. With an explicit `size`, the grid of cells must fit
    /// inside the image.
    pub fn from_image(
        source: &Image,
        grid: (i32, i32),
        size: Option<(i32, i32)>,
    ) -> Result<Self, FrameSheetError> {
        let (columns, rows) = grid;
        if columns <= 0 || rows <= 0 {
            return Err(FrameSheetError::InvalidGrid { columns, rows });
        }

        let uneven = FrameSheetError::UnevenSheet {
            width: source.width,
            height: source.height,
            columns,
            rows,
        };
        let (frame_width, frame_height) = match size {
            Some((width, height)) => {
                if width <= 0
                    || height <= 0
                    || columns * width > source.width
                    || rows * height > source.height
                {
                    return Err(uneven);
                }
                (width, height)
            }
            None => {
                if source.width % columns != 0 || source.height % rows != 0 {
                    return Err(uneven);
                }
                (source.width / columns, source.height / rows)
            }
        };

        let mut frames = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let mut frame_row = Vec::with_capacity(columns as usize);
            for column in 0..columns {
                let cell = Rectangle {
                    x: (column * frame_width) as f32,
                    y: (row * frame_height) as f32,
                    width: frame_width as f32,
                    height: frame_height as f32,
                };
                let mut frame = source.from_image(cell);
                frame.color_replace(COLORKEY, Color::BLANK);
                frame.resize_nn(frame_width * SCALE_FACTOR, frame_height * SCALE_FACTOR);
                frame_row.push(frame);
            }
            frames.push(frame_row);
        }

        Ok(Self {
            columns,
            rows,
            frame_width,
            frame_height,
            frames,
        })
    }

    /// Frames per row.
    pub fn columns(&self) -> usize {
        self.columns as usize
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Size of an extracted frame in pixels, after upscaling.
    pub fn frame_size(&self) -> (i32, i32) {
        (
            self.frame_width * SCALE_FACTOR,
            self.frame_height * SCALE_FACTOR,
        )
    }

    /// Frame at `(row, index)`, or None outside the grid.
    pub fn frame(&self, row: usize, index: usize) -> Option<&Image> {
        self.frames.get(row)?.get(index)
    }

    /// Cell by flattened row-major index, for tile sheets.
    pub fn tile(&self, index: usize) -> Option<&Image> {
        let columns = self.columns as usize;
        self.frame(index / columns, index % columns)
    }

    /// Total number of cells.
    pub fn tile_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Consume the sheet, yielding the frame grid for texture upload.
    pub fn into_frames(self) -> Vec<Vec<Image>> {
        self.frames
    }
}
