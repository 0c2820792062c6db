//! # Goban
//!
//! Rendering helpers for a Go board display.
//!
//! ## Architecture Overview
//!
//! The crate is split into two halves:
//!
//! - **Game**: board coordinates, stone sides, Go label parsing and the
//!   black/white JSON board format. This side knows nothing about pixels.
//! - **Rendering**: a fixed grid geometry, a [`Surface`] abstraction over the
//!   drawing primitive, and the [`BoardRenderer`] that paints a background and
//!   stone tokens onto any surface backend.
//!
//! Three surface backends ship with the crate: a headless [`RasterSurface`]
//! backed by the `image` crate, a [`MacroquadSurface`] that draws into a window,
//! and a [`RecordingSurface`] that only remembers what it was asked to draw.

pub mod config;
pub mod game;
pub mod rendering;

pub use config::RenderConfig;
pub use game::*;
pub use rendering::*;

/// Core error type for the Goban crate.
#[derive(thiserror::Error, Debug)]
pub enum GobanError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// An image handed to the renderer has no pixels
    #[error("Image resource not ready: {0}")]
    ResourceNotReady(ResourceKind),

    /// A token rectangle does not lie fully on the surface
    #[error("Cell ({row}, {col}) falls outside the drawing surface")]
    OffSurface { row: i32, col: i32 },

    /// A side code other than 0 (light) or 1 (dark)
    #[error("Invalid side code: {0}")]
    InvalidSide(i64),

    /// A point label could not be parsed
    #[error("Invalid point label: {0}")]
    PointFormat(String),

    /// A point lies outside the board
    #[error("Point ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    /// A stone is already placed at the point
    #[error("Point ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the Goban codebase.
pub type GobanResult<T> = Result<T, GobanError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
