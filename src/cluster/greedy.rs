//! Greedy distance-based merging of points into boxes
//!
//! Each point joins the first existing box whose bounds, extended by the merge
//! distance, contain it; otherwise it starts a new 1x1 box. This is an online
//! approximation of clustering, not connected-component labeling:
//! - First match wins, not nearest match
//! - Boxes are never merged with each other, even after growing into contact
//! - Output depends on input order
//!
//! Cost is O(points x boxes), quadratic in the worst case. Prefer
//! `components::extract_regions` for large diffs.

use crate::spatial::{BoundingBox, Point};

/// Merge points into boxes in input order
///
/// Boxes are returned in creation order.
pub fn merge_boxes(points: &[Point], merge_distance: u32) -> Vec<BoundingBox> {
    let mut boxes: Vec<BoundingBox> = Vec::new();

    for &point in points {
        match first_reaching(&boxes, point, merge_distance) {
            Some(index) => {
                if let Some(slot) = boxes.get_mut(index) {
                    *slot = slot.grow(point);
                }
            }
            None => boxes.push(BoundingBox::from_point(point)),
        }
    }

    boxes
}

/// Index of the first box that reaches `point` within `merge_distance`
pub fn first_reaching(boxes: &[BoundingBox], point: Point, merge_distance: u32) -> Option<usize> {
    boxes
        .iter()
        .position(|bounds| bounds.reaches(point, merge_distance))
}
