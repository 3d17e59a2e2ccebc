//! Clustering of differing pixels into bounding boxes
//!
//! Two interchangeable strategies are provided:
//! - Connected components: exact 8-connected flood fill over the diff mask
//! - Greedy merge: single-pass, order-dependent absorption of points into the
//!   first box within a merge distance

use std::fmt;
use std::str::FromStr;

use crate::diff::comparator::Comparison;
use crate::spatial::BoundingBox;

/// 8-connected region extraction
pub mod components;
/// Greedy distance-based box merging
pub mod greedy;

/// Selects how differing pixels are grouped into boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClusteringStrategy {
    /// One box per 8-connected region of differing pixels
    #[default]
    ConnectedComponents,
    /// Online first-match merging of points into boxes within the merge distance
    ///
    /// Boxes are never re-tested against each other once created, so the
    /// result depends on point order and may split regions the
    /// connected-components strategy would join. Cost grows with
    /// points times boxes.
    GreedyMerge,
}

impl ClusteringStrategy {
    /// Every strategy, in declaration order
    pub const ALL: [Self; 2] = [Self::ConnectedComponents, Self::GreedyMerge];

    /// Name accepted by `FromStr` and printed by `Display`
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConnectedComponents => "connected-components",
            Self::GreedyMerge => "greedy-merge",
        }
    }

    /// Group the differing pixels of a comparison into boxes
    ///
    /// `merge_distance` is only used by `GreedyMerge`. Boxes are returned in
    /// discovery order.
    pub fn cluster(self, comparison: &Comparison, merge_distance: u32) -> Vec<BoundingBox> {
        match self {
            Self::ConnectedComponents => components::extract_regions(&comparison.mask),
            Self::GreedyMerge => greedy::merge_boxes(&comparison.points, merge_distance),
        }
    }
}

impl fmt::Display for ClusteringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClusteringStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown clustering strategy '{s}' (expected one of: {})",
                    Self::ALL.map(Self::name).join(", ")
                )
            })
    }
}
