//! Bounding-box outlines drawn over the diff canvas

use crate::io::configuration::BOX_OUTLINE;
use crate::raster::canvas::{Color, RasterMut};
use crate::spatial::BoundingBox;

/// Draws unfilled rectangle outlines in a single color
///
/// Outlines overwrite whatever is underneath, including diff highlights.
/// Boxes are drawn in order, so a later outline wins where two overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotator {
    color: Color,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(BOX_OUTLINE)
    }
}

impl Annotator {
    /// Create an annotator drawing in `color`
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Draw the outline of every box onto the canvas
    pub fn draw_boxes<C: RasterMut + ?Sized>(self, canvas: &mut C, boxes: &[BoundingBox]) {
        for &bounds in boxes {
            self.draw_outline(canvas, bounds);
        }
    }

    fn draw_outline<C: RasterMut + ?Sized>(self, canvas: &mut C, bounds: BoundingBox) {
        for x in bounds.min_x..=bounds.max_x {
            canvas.set_pixel(x, bounds.min_y, self.color);
            canvas.set_pixel(x, bounds.max_y, self.color);
        }
        for y in bounds.min_y..=bounds.max_y {
            canvas.set_pixel(bounds.min_x, y, self.color);
            canvas.set_pixel(bounds.max_x, y, self.color);
        }
    }
}
