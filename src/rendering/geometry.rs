//! # Grid Geometry
//!
//! Maps grid cells to pixel rectangles on the drawing surface.

use crate::config;
use serde::{Deserialize, Serialize};

/// A pixel rectangle from `(x0, y0)` inclusive to `(x1, y1)` exclusive.
///
/// Coordinates are signed so off-surface cells can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    /// Creates a rectangle from its corners.
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A rectangle covering a whole `width` x `height` surface.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Returns true if the rectangle lies entirely on a surface of the given size.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x0 >= 0 && self.y0 >= 0 && self.x1 <= width as i64 && self.y1 <= height as i64
    }

    /// Returns true if `(x, y)` is inside the rectangle.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// Fixed layout of the board display.
///
/// `pixel_start = origin + index * pitch` and `pixel_end = pixel_start + token_size`.
/// Cells closer together than `token_size` would overlap; nothing prevents
/// that, later draws simply paint over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub surface_width: u32,
    pub surface_height: u32,
    pub pitch: i64,
    pub token_size: i64,
    pub origin_x: i64,
    pub origin_y: i64,
    /// Columns the display is laid out for
    pub extent: usize,
}

impl GridGeometry {
    /// The 450x450 layout with a 20px pitch and 15px tokens.
    pub const STANDARD: GridGeometry = GridGeometry {
        surface_width: config::SURFACE_WIDTH,
        surface_height: config::SURFACE_HEIGHT,
        pitch: config::CELL_PITCH,
        token_size: config::TOKEN_SIZE,
        origin_x: config::ORIGIN_X,
        origin_y: config::ORIGIN_Y,
        extent: config::GRID_EXTENT,
    };

    /// Computes the pixel rectangle of a cell.
    ///
    /// Any indices are accepted; out-of-range ones give off-surface rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban::{GridGeometry, PixelRect};
    ///
    /// let geometry = GridGeometry::STANDARD;
    /// assert_eq!(geometry.cell_rect(0, 0), PixelRect::new(5, 5, 20, 20));
    /// assert_eq!(geometry.cell_rect(0, 8), PixelRect::new(165, 5, 180, 20));
    /// ```
    pub fn cell_rect(&self, row: i32, col: i32) -> PixelRect {
        let x0 = self.origin_x + col as i64 * self.pitch;
        let y0 = self.origin_y + row as i64 * self.pitch;
        PixelRect::new(x0, y0, x0 + self.token_size, y0 + self.token_size)
    }

    /// Rectangle covering the whole surface.
    pub fn surface_rect(&self) -> PixelRect {
        PixelRect::full(self.surface_width, self.surface_height)
    }

    /// Returns true if every cell of a `size` x `size` board lands on the surface.
    pub fn fits_board(&self, size: usize) -> bool {
        if size == 0 {
            return true;
        }
        let Ok(last) = i32::try_from(size - 1) else {
            return false;
        };
        self.cell_rect(last, last)
            .is_within(self.surface_width, self.surface_height)
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
