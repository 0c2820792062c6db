//! # Drawing Surfaces
//!
//! The drawing primitive the board renderer paints through.

use super::PixelRect;
use std::fmt;

/// A decoded bitmap a surface can draw.
pub trait ImageResource {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// An image is ready once it has pixels to draw.
    fn is_ready(&self) -> bool {
        let (width, height) = self.dimensions();
        width > 0 && height > 0
    }
}

impl ImageResource for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// A 2D pixel drawing target.
///
/// Implementations own the pixels; the renderer only borrows the surface.
pub trait Surface {
    /// The image type this surface draws.
    type Image: ImageResource;

    /// Resizes the surface. Existing content may be discarded.
    fn set_size(&mut self, width: u32, height: u32);

    /// Current width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Replaces every pixel with `image` stretched over the whole surface.
    fn fill(&mut self, image: &Self::Image);

    /// Blends `image`, stretched to `rect`, over the current content.
    ///
    /// Parts of `rect` outside the surface are clipped.
    fn draw_image(&mut self, image: &Self::Image, rect: PixelRect);
}

/// Names the images bound to a renderer, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Background,
    LightToken,
    DarkToken,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Background => "background image",
            ResourceKind::LightToken => "light token image",
            ResourceKind::DarkToken => "dark token image",
        };
        f.write_str(name)
    }
}
