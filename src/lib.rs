//! Pixel-level comparison of a golden image against an actual image
//!
//! Differing pixels are collected into a diff mask, clustered into bounding boxes
//! (connected components or greedy distance merge), and annotated onto a transparent
//! canvas alongside a summary of how much of the image changed.

#![forbid(unsafe_code)]

/// Bounding-box clustering strategies for differing pixels
pub mod cluster;
/// Pixel comparison, pipeline orchestration and summary statistics
pub mod diff;
/// Input/output operations and error handling
pub mod io;
/// Raster access abstraction and annotation drawing
pub mod raster;
/// Points, bounding boxes and the diff mask grid
pub mod spatial;

pub use io::error::{DiffError, Result};
