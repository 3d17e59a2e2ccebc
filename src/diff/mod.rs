/// Per-pixel comparison and diff highlighting
pub mod comparator;
/// Configurable pipeline running comparison, clustering and annotation
pub mod engine;
/// Summary statistics for a finished comparison
pub mod report;

pub use comparator::{Comparison, ComparisonMode, PixelComparator};
pub use engine::{DiffConfig, DiffEngine, DiffOutcome, DiffResult};
pub use report::DiffSummary;
