//! Pipeline constants and runtime configuration defaults

use crate::raster::canvas::Color;

// Comparison defaults
/// Compare the alpha channel along with RGB unless told otherwise
pub const DEFAULT_COMPARE_ALPHA: bool = true;

/// Distance in pixels within which the greedy strategy absorbs a point into a box
pub const DEFAULT_MERGE_DISTANCE: u32 = 5;

// Default file locations
/// Reference image path
pub const DEFAULT_GOLDEN_PATH: &str = "golden.png";
/// Image under test path
pub const DEFAULT_ACTUAL_PATH: &str = "actual.png";
/// Annotated output path
pub const DEFAULT_OUTPUT_PATH: &str = "diff.png";

// Annotation colors
/// Color painted over every differing pixel
pub const DIFF_HIGHLIGHT: Color = [255, 0, 0, 255];
/// Color of bounding-box outlines
pub const BOX_OUTLINE: Color = [0, 255, 0, 255];
/// Background of a fresh output canvas
pub const TRANSPARENT: Color = [0, 0, 0, 0];

/// Decimal places kept in the reported percentage
pub const PERCENT_DECIMALS: i32 = 2;

// Greedy merging is O(points x boxes), so large diffs get a warning
/// Point count above which the greedy strategy logs a warning
pub const GREEDY_MERGE_WARN_POINTS: usize = 100_000;

/// Refresh interval for the stage spinner
pub const SPINNER_TICK_MS: u64 = 80;
