//! # Raster Surface
//!
//! Headless surface backed by an in-memory RGBA image.

use super::{ImageResource, PixelRect, Surface};
use crate::GobanResult;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// An RGBA canvas that composites images in memory.
///
/// # Examples
///
/// ```
/// use goban::{RasterSurface, Surface};
///
/// let mut surface = RasterSurface::new(450, 450);
/// assert_eq!(surface.size(), (450, 450));
/// ```
#[derive(Debug, Clone)]
pub struct RasterSurface {
    canvas: RgbaImage,
}

impl RasterSurface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
        }
    }

    /// Returns the pixel at `(x, y)`, or None off the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.canvas.get_pixel_checked(x, y).copied()
    }

    /// The composited image.
    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consumes the surface and returns the composited image.
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Writes the surface to disk. The format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> GobanResult<()> {
        self.canvas.save(path.as_ref())?;
        log::info!(
            "Saved {}x{} board to {}",
            self.canvas.width(),
            self.canvas.height(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Loads an image file as RGBA.
pub fn load_rgba(path: impl AsRef<Path>) -> GobanResult<RgbaImage> {
    let image = image::open(path.as_ref())?.to_rgba8();
    log::debug!(
        "Loaded {} ({}x{})",
        path.as_ref().display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Stretches an image to the requested size, skipping work when it already matches.
fn stretched(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image.clone()
    } else {
        imageops::resize(image, width, height, FilterType::Triangle)
    }
}

impl Surface for RasterSurface {
    type Image = RgbaImage;

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas = RgbaImage::new(width, height);
    }

    fn size(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn fill(&mut self, image: &RgbaImage) {
        let (width, height) = self.canvas.dimensions();
        if width == 0 || height == 0 || !image.is_ready() {
            return;
        }
        self.canvas = stretched(image, width, height);
    }

    fn draw_image(&mut self, image: &RgbaImage, rect: PixelRect) {
        let (Ok(width), Ok(height)) = (u32::try_from(rect.width()), u32::try_from(rect.height()))
        else {
            return;
        };
        if width == 0 || height == 0 || !image.is_ready() {
            return;
        }
        let token = stretched(image, width, height);
        imageops::overlay(&mut self.canvas, &token, rect.x0, rect.y0);
    }
}
