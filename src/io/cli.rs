//! Command-line interface for comparing a golden image against an actual image

use crate::cluster::ClusteringStrategy;
use crate::diff::engine::{DiffConfig, DiffEngine};
use crate::diff::report::DiffSummary;
use crate::io::configuration::{
    DEFAULT_ACTUAL_PATH, DEFAULT_GOLDEN_PATH, DEFAULT_MERGE_DISTANCE, DEFAULT_OUTPUT_PATH,
};
use crate::io::error::Result;
use crate::io::image::{load_image, save_image};
use crate::io::progress::StageProgress;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "boxdiff")]
#[command(
    author,
    version,
    about = "Compare two images and outline the regions that differ"
)]
/// Command-line arguments for the image comparison tool
pub struct Cli {
    /// Reference (golden) image
    #[arg(value_name = "GOLDEN", default_value = DEFAULT_GOLDEN_PATH)]
    pub golden: PathBuf,

    /// Image under test, compared against the golden image
    #[arg(value_name = "ACTUAL", default_value = DEFAULT_ACTUAL_PATH)]
    pub actual: PathBuf,

    /// Where to write the annotated diff image
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Compare RGB channels only, ignoring alpha
    #[arg(long)]
    pub ignore_alpha: bool,

    /// Merge distance in pixels for the greedy-merge strategy
    #[arg(short = 'd', long, default_value_t = DEFAULT_MERGE_DISTANCE)]
    pub merge_distance: u32,

    /// Clustering strategy: connected-components or greedy-merge
    #[arg(short, long, default_value_t = ClusteringStrategy::default())]
    pub strategy: ClusteringStrategy,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the alpha channel takes part in the comparison
    pub const fn compare_alpha(&self) -> bool {
        !self.ignore_alpha
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration described by the arguments
    pub const fn diff_config(&self) -> DiffConfig {
        DiffConfig {
            compare_alpha: self.compare_alpha(),
            merge_distance: self.merge_distance,
            strategy: self.strategy,
        }
    }
}

/// Summary of a completed run and where its image was written
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Counts and percentage
    pub summary: DiffSummary,
    /// Path of the saved diff image
    pub output_path: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        write!(f, "Diff image saved to {}", self.output_path.display())
    }
}

/// Orchestrates one comparison run from the command line
pub struct DiffRunner {
    cli: Cli,
    progress: StageProgress,
}

impl DiffRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = StageProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Load both images, diff them and save the annotated result
    ///
    /// The output file is written only after every in-memory step succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either input is missing or cannot be decoded
    /// - The images differ in size or are empty
    /// - The output image cannot be written
    pub fn run(&self) -> Result<RunReport> {
        let start_time = Instant::now();
        let result = self.execute();
        self.progress.finish();

        if let Ok(report) = &result {
            log::info!(
                "Compared {} and {} in {:?}: {} differing pixels, {} boxes",
                self.cli.golden.display(),
                self.cli.actual.display(),
                start_time.elapsed(),
                report.summary.differing_pixels,
                report.summary.box_count
            );
        }

        result
    }

    fn execute(&self) -> Result<RunReport> {
        self.progress.stage("Loading images");
        let golden = load_image(&self.cli.golden)?;
        let actual = load_image(&self.cli.actual)?;
        log::info!(
            "Loaded golden {}x{} and actual {}x{}",
            golden.width(),
            golden.height(),
            actual.width(),
            actual.height()
        );

        self.progress.stage("Comparing pixels");
        let engine = DiffEngine::new(self.cli.diff_config());
        let outcome = engine.run(&golden, &actual)?;

        self.progress.stage("Saving diff image");
        save_image(&outcome.canvas, &self.cli.output)?;
        log::info!("Diff image saved to {}", self.cli.output.display());

        Ok(RunReport {
            summary: outcome.summary(),
            output_path: self.cli.output.clone(),
        })
    }
}
