//! Error types and path context for diff operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all diff operations
#[derive(Debug)]
pub enum DiffError {
    /// Input image does not exist
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Failed to decode an input image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Golden, actual or canvas sizes disagree
    ///
    /// Raised before any pixel is compared, so no output is produced.
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Dimensions that were found instead (width, height)
        found: (u32, u32),
    },

    /// Source images can't be compared meaningfully
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to save the annotated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Image not found: '{}'", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Image dimensions do not match: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for diff results
pub type Result<T> = std::result::Result<T, DiffError>;

/// Attaches the path and operation to file system errors
pub trait WithPath<T> {
    /// Convert the error into `DiffError::FileSystem` for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| DiffError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create a dimension mismatch error
pub const fn dimension_mismatch(expected: (u32, u32), found: (u32, u32)) -> DiffError {
    DiffError::DimensionMismatch { expected, found }
}
