//! Summary statistics derived from a finished comparison

use std::fmt;

use crate::io::configuration::PERCENT_DECIMALS;

/// Counts and percentage describing how much of an image changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffSummary {
    /// Number of differing pixels
    pub differing_pixels: usize,
    /// Number of pixels compared (width x height)
    pub total_pixels: usize,
    /// Share of differing pixels, in percent, rounded to two decimals
    pub percent_changed: f64,
    /// Number of bounding boxes found
    pub box_count: usize,
}

impl DiffSummary {
    /// Build a summary from raw counts
    pub fn new(differing_pixels: usize, total_pixels: usize, box_count: usize) -> Self {
        Self {
            differing_pixels,
            total_pixels,
            percent_changed: percent_changed(differing_pixels, total_pixels),
            box_count,
        }
    }

    /// Check if no pixel differed
    pub const fn is_identical(&self) -> bool {
        self.differing_pixels == 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identical() {
            return write!(f, "Images are identical");
        }

        writeln!(
            f,
            "{} pixel{} differed ({:.prec$}%)",
            self.differing_pixels,
            if self.differing_pixels == 1 { "" } else { "s" },
            self.percent_changed,
            prec = PERCENT_DECIMALS as usize
        )?;
        write!(
            f,
            "Found {} bounding box{}",
            self.box_count,
            if self.box_count == 1 { "" } else { "es" }
        )
    }
}

/// Percentage of `differing` out of `total`, rounded half away from zero to
/// two decimals
///
/// An empty image reports 0%.
pub fn percent_changed(differing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(PERCENT_DECIMALS);
    let percent = 100.0 * differing as f64 / total as f64;
    (percent * scale).round() / scale
}
