//! Spatial data structures for the diff pipeline
//!
//! This module contains the geometry shared by every stage:
//! - Pixel coordinates and axis-aligned bounding boxes
//! - The boolean diff mask over the image grid

/// Pixel coordinates and bounding boxes
pub mod bounds;
/// Bit-packed grid of differing pixels
pub mod mask;

pub use bounds::{BoundingBox, Point};
pub use mask::DiffMask;
