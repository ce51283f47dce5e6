//! Entity sprite loaded from an image file.

use crate::error::GameError;
use image::imageops::FilterType;
use ratatui::style::Color;
use std::path::Path;

/// Alpha below this is treated as fully transparent.
const ALPHA_CUTOFF: u8 = 128;

/// A small pixel grid with a fixed display size in field units.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    cols: u32,
    rows: u32,
    /// Row-major, `None` = transparent.
    pixels: Vec<Option<Color>>,
    display_width: f64,
    display_height: f64,
}

impl Sprite {
    /// Decode `path` and resample it once to `pixels` (cols, rows).
    ///
    /// The sprite is drawn at `display_width` x `display_height` field units.
    pub fn load(
        path: impl AsRef<Path>,
        pixels: (u32, u32),
        display_width: f64,
        display_height: f64,
    ) -> Result<Self, GameError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| GameError::Asset {
            path: path.to_path_buf(),
            source,
        })?;

        let (cols, rows) = (pixels.0.max(1), pixels.1.max(1));
        let img = img.resize_exact(cols, rows, FilterType::Nearest).to_rgba8();

        let pixels = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
            })
            .collect();

        log::info!(
            "Loaded sprite {} as {}x{} pixels",
            path.display(),
            cols,
            rows
        );

        Ok(Self {
            cols,
            rows,
            pixels,
            display_width,
            display_height,
        })
    }

    /// Build a sprite from raw pixels. Missing pixels are transparent.
    pub fn from_pixels(
        cols: u32,
        rows: u32,
        mut pixels: Vec<Option<Color>>,
        display_width: f64,
        display_height: f64,
    ) -> Self {
        pixels.resize((cols * rows) as usize, None);
        Self {
            cols,
            rows,
            pixels,
            display_width,
            display_height,
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn display_width(&self) -> f64 {
        self.display_width
    }

    pub fn display_height(&self) -> f64 {
        self.display_height
    }

    /// Pixel at (`col`, `row`), `None` if transparent or out of range.
    pub fn pixel(&self, col: u32, row: u32) -> Option<Color> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.pixels
            .get((row * self.cols + col) as usize)
            .copied()
            .flatten()
    }

    /// Nearest-neighbour sample at normalized coordinates in `[0, 1)`.
    pub fn sample(&self, u: f64, v: f64) -> Option<Color> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let col = (u * self.cols as f64) as u32;
        let row = (v * self.rows as f64) as u32;
        self.pixel(col, row)
    }
}
