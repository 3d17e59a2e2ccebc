use bitvec::prelude::*;
use std::fmt;

use crate::spatial::bounds::Point;

/// Boolean grid marking which pixels differ between two images
///
/// Stored row-major as one bit per pixel (`index = y * width + x`).
/// Only the comparator can set bits; everything downstream sees a frozen mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffMask {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl DiffMask {
    /// Create a mask with no pixels marked
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: bitvec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Create a mask with the given points marked
    ///
    /// Points outside the grid are ignored.
    pub fn from_points(width: u32, height: u32, points: &[Point]) -> Self {
        let mut mask = Self::new(width, height);
        for &point in points {
            mask.mark(point);
        }
        mask
    }

    pub(crate) fn mark(&mut self, point: Point) {
        if let Some(index) = self.index_of(point) {
            self.bits.set(index, true);
        }
    }

    /// Test whether a pixel is marked as differing
    pub fn is_set(&self, point: Point) -> bool {
        self.index_of(point)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count marked pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pixel is marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Grid width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Iterate marked pixels in raster order (row by row, left to right)
    pub fn iter_set(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.bits
            .iter_ones()
            .map(move |index| Point::new((index % width) as u32, (index / width) as u32))
    }

    const fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < self.width && point.y < self.height {
            Some(point.y as usize * self.width as usize + point.x as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for DiffMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiffMask({}x{}, {} marked)",
            self.width,
            self.height,
            self.count()
        )
    }
}
