//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use boxdiff::DiffError;
    use boxdiff::io::error::dimension_mismatch;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = DiffError::FileSystem {
            path: "/tmp/out".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
    }

    // Tests dimension mismatch lists both sizes
    // Verified by omitting found dimensions from message
    #[test]
    fn test_dimension_mismatch_message() {
        let error = dimension_mismatch((640, 480), (640, 481));
        let message = error.to_string();

        assert!(message.contains("640x480"));
        assert!(message.contains("640x481"));
        assert!(error.source().is_none());
    }

    // Tests not-found error names the path
    // Verified by omitting the path from message
    #[test]
    fn test_not_found_message() {
        let error = DiffError::NotFound {
            path: PathBuf::from("missing/golden.png"),
        };
        assert!(error.to_string().contains("missing/golden.png"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = DiffError::ImageExport {
            path: PathBuf::from("/restricted/diff.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/diff.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests invalid source data carries its reason
    // Verified by omitting reason from message
    #[test]
    fn test_invalid_source_data() {
        let error = DiffError::InvalidSourceData {
            reason: "image has no pixels (0x3)".to_string(),
        };
        assert!(error.to_string().contains("no pixels"));
    }
}
