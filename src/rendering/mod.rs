//! # Rendering Module
//!
//! Grid geometry, drawing surfaces and the board renderer.

pub mod display;
pub mod geometry;
pub mod raster;
pub mod recording;
pub mod renderer;
pub mod surface;

pub use display::*;
pub use geometry::*;
pub use raster::*;
pub use recording::*;
pub use renderer::*;
pub use surface::*;
