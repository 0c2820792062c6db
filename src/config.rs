//! # Configuration
//!
//! Fixed geometry constants and the asset configuration loaded by the host
//! binaries.

use crate::rendering::GridGeometry;
use crate::{GobanError, GobanResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Drawing surface width in pixels
pub const SURFACE_WIDTH: u32 = 450;

/// Drawing surface height in pixels
pub const SURFACE_HEIGHT: u32 = 450;

/// Distance between adjacent cell origins in pixels
pub const CELL_PITCH: i64 = 20;

/// Side length of a token square in pixels
pub const TOKEN_SIZE: i64 = 15;

/// Pixel offset of cell (0, 0)
pub const ORIGIN_X: i64 = 5;

/// Pixel offset of cell (0, 0)
pub const ORIGIN_Y: i64 = 5;

/// Number of columns the display is laid out for
pub const GRID_EXTENT: usize = 9;

/// Default Go board size for the board model
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Largest board the label formats can address (one letter per column)
pub const MAX_BOARD_SIZE: usize = 26;

/// Asset locations and board size used by the host binaries.
///
/// # Examples
///
/// ```
/// use goban::RenderConfig;
///
/// let config = RenderConfig::default();
/// assert_eq!(config.board_size, 19);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Background image, stretched over the whole surface
    pub background: PathBuf,
    /// Light (white) stone image
    pub light_stone: PathBuf,
    /// Dark (black) stone image
    pub dark_stone: PathBuf,
    /// Board size used when parsing point labels
    pub board_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: PathBuf::from("assets/img/bg.png"),
            light_stone: PathBuf::from("assets/img/W_stone.png"),
            dark_stone: PathBuf::from("assets/img/B_stone.png"),
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl RenderConfig {
    /// Reads a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> GobanResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Checks that every cell of the configured board fits on the surface.
    pub fn validate(&self) -> GobanResult<()> {
        if self.board_size == 0 {
            return Err(GobanError::InvalidConfig(
                "board_size must be at least 1".to_string(),
            ));
        }

        let geometry = GridGeometry::STANDARD;
        if !geometry.fits_board(self.board_size) {
            return Err(GobanError::InvalidConfig(format!(
                "a {0}x{0} board does not fit on a {1}x{2} surface",
                self.board_size, geometry.surface_width, geometry.surface_height
            )));
        }

        Ok(())
    }
}
