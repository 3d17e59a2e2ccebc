//! Pixel coordinates and the axis-aligned boxes that enclose clusters of them

use std::fmt;

/// Integer pixel coordinate, `x` along the row and `y` down the columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Smallest axis-aligned rectangle enclosing a set of points
///
/// Both corners are inclusive, so a box built from a single point has a
/// width and height of one. Boxes are plain values: growing one returns a
/// new box rather than editing the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Minimum column (inclusive)
    pub min_x: u32,
    /// Minimum row (inclusive)
    pub min_y: u32,
    /// Maximum column (inclusive)
    pub max_x: u32,
    /// Maximum row (inclusive)
    pub max_y: u32,
}

impl BoundingBox {
    /// Create a box from its corners
    ///
    /// Returns `None` when a minimum exceeds the matching maximum.
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Option<Self> {
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Create a 1x1 box covering a single point
    pub const fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Return the smallest box enclosing both this box and `point`
    #[must_use]
    pub const fn grow(self, point: Point) -> Self {
        Self {
            min_x: if point.x < self.min_x {
                point.x
            } else {
                self.min_x
            },
            min_y: if point.y < self.min_y {
                point.y
            } else {
                self.min_y
            },
            max_x: if point.x > self.max_x {
                point.x
            } else {
                self.max_x
            },
            max_y: if point.y > self.max_y {
                point.y
            } else {
                self.max_y
            },
        }
    }

    /// Check if a point lies inside the box
    pub const fn contains(&self, point: Point) -> bool {
        self.reaches(point, 0)
    }

    /// Check if a point lies inside the box once it is extended by `distance`
    /// pixels on every side
    ///
    /// The extension saturates at the coordinate range instead of wrapping.
    pub const fn reaches(&self, point: Point, distance: u32) -> bool {
        point.x >= self.min_x.saturating_sub(distance)
            && point.x <= self.max_x.saturating_add(distance)
            && point.y >= self.min_y.saturating_sub(distance)
            && point.y <= self.max_y.saturating_add(distance)
    }

    /// Number of columns covered
    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the box lies entirely inside an image of the given size
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.max_x < width && self.max_y < height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
