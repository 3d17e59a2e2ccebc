//! Raster access and drawing
//!
//! The pipeline reads and writes pixels through the `Raster` traits so that
//! the image codec stays an external collaborator.

/// Outline drawing for bounding boxes
pub mod annotate;
/// Pixel access traits and the output canvas
pub mod canvas;

pub use annotate::Annotator;
pub use canvas::{Color, Raster, RasterMut, blank_canvas};
