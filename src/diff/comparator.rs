//! Pixel-by-pixel comparison of two equally sized images

use crate::io::configuration::DIFF_HIGHLIGHT;
use crate::io::error::{DiffError, Result, dimension_mismatch};
use crate::raster::canvas::{Color, Raster, RasterMut};
use crate::spatial::{DiffMask, Point};

/// Which channels take part in deciding whether two pixels differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    /// Red, green and blue only; alpha is ignored
    Rgb,
    /// All four channels including alpha
    #[default]
    Rgba,
}

impl ComparisonMode {
    /// Select the mode from a compare-alpha flag
    pub const fn from_compare_alpha(compare_alpha: bool) -> Self {
        if compare_alpha { Self::Rgba } else { Self::Rgb }
    }

    /// Decide whether two colors differ under this mode
    pub fn differs(self, a: Color, b: Color) -> bool {
        match self {
            Self::Rgba => a != b,
            Self::Rgb => a.get(..3) != b.get(..3),
        }
    }
}

/// Differing pixels found by one comparison pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Grid of differing pixels
    pub mask: DiffMask,
    /// Differing pixels in discovery (raster) order
    pub points: Vec<Point>,
}

impl Comparison {
    /// Number of differing pixels
    pub const fn differing_pixels(&self) -> usize {
        self.points.len()
    }

    /// Number of pixels compared
    pub const fn total_pixels(&self) -> usize {
        self.mask.width() as usize * self.mask.height() as usize
    }
}

/// Compares two images and highlights every differing pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelComparator {
    mode: ComparisonMode,
    highlight: Color,
}

impl Default for PixelComparator {
    fn default() -> Self {
        Self::new(ComparisonMode::default())
    }
}

impl PixelComparator {
    /// Create a comparator that highlights differences in opaque red
    pub const fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            highlight: DIFF_HIGHLIGHT,
        }
    }

    /// Use a different highlight color
    #[must_use]
    pub const fn with_highlight(mut self, highlight: Color) -> Self {
        self.highlight = highlight;
        self
    }

    /// Active comparison mode
    pub const fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Compare `golden` against `actual`, painting differences onto `canvas`
    ///
    /// Pixels are visited row by row, so `points` comes out in raster order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The two images, or the canvas, differ in size (checked before any pixel work)
    /// - The images have no pixels
    /// - Either image has no pixel at a position inside its reported size
    pub fn compare<G, A, C>(&self, golden: &G, actual: &A, canvas: &mut C) -> Result<Comparison>
    where
        G: Raster + ?Sized,
        A: Raster + ?Sized,
        C: RasterMut + ?Sized,
    {
        let (width, height) = ensure_same_dimensions(golden, actual)?;
        if canvas.dimensions() != (width, height) {
            return Err(dimension_mismatch((width, height), canvas.dimensions()));
        }

        let mut mask = DiffMask::new(width, height);
        let mut points = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let (Some(a), Some(b)) = (golden.pixel(x, y), actual.pixel(x, y)) else {
                    return Err(DiffError::InvalidSourceData {
                        reason: format!("no pixel at ({x}, {y}) inside a {width}x{height} image"),
                    });
                };

                if self.mode.differs(a, b) {
                    let point = Point::new(x, y);
                    canvas.set_pixel(x, y, self.highlight);
                    mask.mark(point);
                    points.push(point);
                }
            }
        }

        Ok(Comparison { mask, points })
    }
}

/// Check that two images share the same non-empty size
///
/// Returns the shared `(width, height)`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the sizes differ, or `InvalidSourceData`
/// if the images have zero width or height.
pub fn ensure_same_dimensions<G, A>(golden: &G, actual: &A) -> Result<(u32, u32)>
where
    G: Raster + ?Sized,
    A: Raster + ?Sized,
{
    let expected = golden.dimensions();
    let found = actual.dimensions();
    if expected != found {
        return Err(dimension_mismatch(expected, found));
    }

    if expected.0 == 0 || expected.1 == 0 {
        return Err(DiffError::InvalidSourceData {
            reason: format!("image has no pixels ({}x{})", expected.0, expected.1),
        });
    }

    Ok(expected)
}
