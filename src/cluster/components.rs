//! Connected-component labeling over the diff mask
//!
//! A multi-source flood fill: every unvisited marked pixel found by the raster
//! scan seeds a new region, which is expanded through its 8 neighbors with an
//! explicit stack until exhausted.

use ndarray::Array2;

use crate::spatial::{BoundingBox, DiffMask, Point};

/// Neighbor offsets for 8-connectivity (diagonals included)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Extract one tight bounding box per 8-connected region of marked pixels
///
/// Regions are returned in the raster order of their first pixel. Every
/// marked pixel is visited exactly once, so time and memory are O(width x height).
pub fn extract_regions(mask: &DiffMask) -> Vec<BoundingBox> {
    let (width, height) = (mask.width(), mask.height());
    let mut visited = Array2::<bool>::default((height as usize, width as usize));
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for seed in mask.iter_set() {
        if is_visited(&visited, seed) {
            continue;
        }

        mark_visited(&mut visited, seed);
        stack.push(seed);
        let mut bounds = BoundingBox::from_point(seed);

        while let Some(current) = stack.pop() {
            for neighbor in neighbors(current, width, height) {
                if mask.is_set(neighbor) && !is_visited(&visited, neighbor) {
                    mark_visited(&mut visited, neighbor);
                    bounds = bounds.grow(neighbor);
                    stack.push(neighbor);
                }
            }
        }

        regions.push(bounds);
    }

    regions
}

/// In-bounds 8-neighbors of a point
fn neighbors(point: Point, width: u32, height: u32) -> impl Iterator<Item = Point> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = point.x.checked_add_signed(dx).filter(|&x| x < width)?;
        let y = point.y.checked_add_signed(dy).filter(|&y| y < height)?;
        Some(Point::new(x, y))
    })
}

fn is_visited(visited: &Array2<bool>, point: Point) -> bool {
    visited
        .get([point.y as usize, point.x as usize])
        .copied()
        .unwrap_or(true)
}

fn mark_visited(visited: &mut Array2<bool>, point: Point) {
    if let Some(cell) = visited.get_mut([point.y as usize, point.x as usize]) {
        *cell = true;
    }
}
