//! Configurable diff pipeline: comparison, clustering, annotation and summary
//!
//! The engine owns no state between runs. Each run reads the two source
//! images, writes only to its own canvas, and either completes or fails
//! before anything is handed back.

use image::RgbaImage;

use crate::cluster::ClusteringStrategy;
use crate::diff::comparator::{ComparisonMode, PixelComparator, ensure_same_dimensions};
use crate::diff::report::DiffSummary;
use crate::io::configuration::{
    BOX_OUTLINE, DEFAULT_COMPARE_ALPHA, DEFAULT_MERGE_DISTANCE, GREEDY_MERGE_WARN_POINTS,
};
use crate::io::error::Result;
use crate::raster::annotate::Annotator;
use crate::raster::canvas::{Raster, RasterMut, blank_canvas};
use crate::spatial::BoundingBox;

/// Parameters for a diff run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Include the alpha channel when comparing pixels
    pub compare_alpha: bool,
    /// Merge distance in pixels for `ClusteringStrategy::GreedyMerge`
    pub merge_distance: u32,
    /// How differing pixels are grouped into boxes
    pub strategy: ClusteringStrategy,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            compare_alpha: DEFAULT_COMPARE_ALPHA,
            merge_distance: DEFAULT_MERGE_DISTANCE,
            strategy: ClusteringStrategy::default(),
        }
    }
}

impl DiffConfig {
    /// Comparison mode implied by `compare_alpha`
    pub const fn mode(&self) -> ComparisonMode {
        ComparisonMode::from_compare_alpha(self.compare_alpha)
    }
}

/// Boxes and pixel counts produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    /// Bounding boxes in discovery order
    pub boxes: Vec<BoundingBox>,
    /// Number of differing pixels
    pub differing_pixels: usize,
    /// Number of pixels compared
    pub total_pixels: usize,
}

impl DiffResult {
    /// Derive the summary statistics
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::new(self.differing_pixels, self.total_pixels, self.boxes.len())
    }
}

/// Annotated canvas together with the run's result
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    /// Transparent canvas with highlighted pixels and box outlines
    pub canvas: RgbaImage,
    /// Boxes and counts
    pub result: DiffResult,
}

impl DiffOutcome {
    /// Derive the summary statistics
    pub fn summary(&self) -> DiffSummary {
        self.result.summary()
    }
}

/// Runs the comparison pipeline with a fixed configuration
#[derive(Debug, Clone)]
pub struct DiffEngine {
    config: DiffConfig,
    comparator: PixelComparator,
    annotator: Annotator,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(DiffConfig::default())
    }
}

impl DiffEngine {
    /// Create an engine with default highlight and outline colors
    pub const fn new(config: DiffConfig) -> Self {
        Self {
            config,
            comparator: PixelComparator::new(config.mode()),
            annotator: Annotator::new(BOX_OUTLINE),
        }
    }

    /// Replace the annotator used for box outlines
    #[must_use]
    pub const fn with_annotator(mut self, annotator: Annotator) -> Self {
        self.annotator = annotator;
        self
    }

    /// Active configuration
    pub const fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare two images onto a fresh transparent canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the images differ in size or have no pixels
    pub fn run<G, A>(&self, golden: &G, actual: &A) -> Result<DiffOutcome>
    where
        G: Raster + ?Sized,
        A: Raster + ?Sized,
    {
        let (width, height) = ensure_same_dimensions(golden, actual)?;
        let mut canvas = blank_canvas(width, height);
        let result = self.run_into(golden, actual, &mut canvas)?;
        Ok(DiffOutcome { canvas, result })
    }

    /// Compare two images, annotating a caller-supplied canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the images or canvas differ in size, or the images
    /// have no pixels. The canvas is untouched in that case.
    pub fn run_into<G, A, C>(&self, golden: &G, actual: &A, canvas: &mut C) -> Result<DiffResult>
    where
        G: Raster + ?Sized,
        A: Raster + ?Sized,
        C: RasterMut + ?Sized,
    {
        log::debug!(
            "Comparing {}x{} images ({:?}, {})",
            golden.width(),
            golden.height(),
            self.config.mode(),
            self.config.strategy
        );

        let comparison = self.comparator.compare(golden, actual, canvas)?;
        log::debug!("{} differing pixels", comparison.differing_pixels());

        if self.config.strategy == ClusteringStrategy::GreedyMerge
            && comparison.differing_pixels() > GREEDY_MERGE_WARN_POINTS
        {
            log::warn!(
                "Greedy merge over {} points is quadratic in the worst case; \
                 connected-components scales linearly",
                comparison.differing_pixels()
            );
        }

        let boxes = self
            .config
            .strategy
            .cluster(&comparison, self.config.merge_distance);
        log::debug!("{} bounding boxes", boxes.len());

        self.annotator.draw_boxes(canvas, &boxes);

        Ok(DiffResult {
            differing_pixels: comparison.differing_pixels(),
            total_pixels: comparison.total_pixels(),
            boxes,
        })
    }
}
