//! # Recording Surface
//!
//! A surface that keeps a log of draw calls instead of pixels.

use super::{ImageResource, PixelRect, Surface};
use serde::{Deserialize, Serialize};

/// Stand-in image that only carries a name and a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledImage {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

impl LabeledImage {
    /// Creates a labeled image of the given size.
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            width,
            height,
        }
    }
}

impl ImageResource for LabeledImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Fill { image: String },
    Draw { image: String, rect: PixelRect },
}

/// Surface that records every call in order.
///
/// # Examples
///
/// ```
/// use goban::{DrawCommand, LabeledImage, RecordingSurface, Surface};
///
/// let mut surface = RecordingSurface::new();
/// surface.fill(&LabeledImage::new("bg", 450, 450));
/// assert_eq!(surface.commands(), &[DrawCommand::Fill { image: "bg".to_string() }]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty 0x0 surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of fill and draw calls, ignoring resizes.
    pub fn paint_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| !matches!(command, DrawCommand::Resize { .. }))
            .count()
    }

    /// Labels of the images drawn with `draw_image`, in order.
    pub fn drawn_labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Draw { image, .. } => Some(image.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Image = LabeledImage;

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, image: &LabeledImage) {
        self.commands.push(DrawCommand::Fill {
            image: image.label.clone(),
        });
    }

    fn draw_image(&mut self, image: &LabeledImage, rect: PixelRect) {
        self.commands.push(DrawCommand::Draw {
            image: image.label.clone(),
            rect,
        });
    }
}
