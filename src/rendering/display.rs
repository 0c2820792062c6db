//! # Display Management
//!
//! Windowed drawing surface using macroquad.

use super::{load_rgba, ImageResource, PixelRect, Surface};
use crate::config::RenderConfig;
use crate::{GobanError, GobanResult};
use macroquad::prelude::*;
use std::path::Path;

impl ImageResource for Texture2D {
    fn dimensions(&self) -> (u32, u32) {
        (self.width() as u32, self.height() as u32)
    }
}

/// Macroquad surface drawing into the current window.
///
/// Must be used from inside a macroquad main loop, after the GL context exists.
pub struct MacroquadSurface {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Colour shown where the background image is transparent
    pub clear_color: Color,
}

impl MacroquadSurface {
    /// Creates a surface sized to the current window.
    pub fn new() -> Self {
        Self {
            width: screen_width() as u32,
            height: screen_height() as u32,
            clear_color: BLACK,
        }
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MacroquadSurface {
    type Image = Texture2D;

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        request_new_screen_size(width as f32, height as f32);
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, image: &Texture2D) {
        clear_background(self.clear_color);
        draw_texture_ex(
            image,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.width as f32, self.height as f32)),
                ..Default::default()
            },
        );
    }

    fn draw_image(&mut self, image: &Texture2D, rect: PixelRect) {
        draw_texture_ex(
            image,
            rect.x0 as f32,
            rect.y0 as f32,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.width() as f32, rect.height() as f32)),
                ..Default::default()
            },
        );
    }
}

/// Loads an image file into a GPU texture.
pub fn load_texture_file(path: impl AsRef<Path>) -> GobanResult<Texture2D> {
    let image = load_rgba(path.as_ref())?;
    let (Ok(width), Ok(height)) = (u16::try_from(image.width()), u16::try_from(image.height()))
    else {
        return Err(GobanError::InvalidConfig(format!(
            "{} is too large for a texture",
            path.as_ref().display()
        )));
    };

    let texture = Texture2D::from_rgba8(width, height, image.as_raw());
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

/// The three textures a board display needs.
pub struct BoardTextures {
    pub background: Texture2D,
    pub light: Texture2D,
    pub dark: Texture2D,
}

impl BoardTextures {
    /// Loads every texture named in the configuration.
    pub fn load(config: &RenderConfig) -> GobanResult<Self> {
        Ok(Self {
            background: load_texture_file(&config.background)?,
            light: load_texture_file(&config.light_stone)?,
            dark: load_texture_file(&config.dark_stone)?,
        })
    }
}
