//! Tests for pipeline constants and defaults

#[cfg(test)]
mod tests {
    use boxdiff::io::configuration::{
        BOX_OUTLINE, DEFAULT_ACTUAL_PATH, DEFAULT_COMPARE_ALPHA, DEFAULT_GOLDEN_PATH,
        DEFAULT_MERGE_DISTANCE, DEFAULT_OUTPUT_PATH, DIFF_HIGHLIGHT, GREEDY_MERGE_WARN_POINTS,
        PERCENT_DECIMALS, TRANSPARENT,
    };

    // Tests comparison defaults
    // Verified by disabling alpha comparison by default
    #[test]
    fn test_comparison_defaults() {
        assert!(DEFAULT_COMPARE_ALPHA);
        assert_eq!(DEFAULT_MERGE_DISTANCE, 5);
        assert_eq!(PERCENT_DECIMALS, 2);
    }

    // Tests default file names are PNGs
    // Verified by changing the output extension
    #[test]
    fn test_default_paths() {
        assert_eq!(DEFAULT_GOLDEN_PATH, "golden.png");
        assert_eq!(DEFAULT_ACTUAL_PATH, "actual.png");
        assert_eq!(DEFAULT_OUTPUT_PATH, "diff.png");
    }

    // Tests annotation colors are opaque red and green on a transparent background
    // Verified by making the highlight translucent
    #[test]
    fn test_colors() {
        assert_eq!(DIFF_HIGHLIGHT, [255, 0, 0, 255]);
        assert_eq!(BOX_OUTLINE, [0, 255, 0, 255]);
        assert_eq!(TRANSPARENT, [0, 0, 0, 0]);
    }

    // Tests the greedy warning threshold is large enough for typical diffs
    // Verified by lowering the threshold
    #[test]
    fn test_greedy_warning_threshold() {
        assert!(GREEDY_MERGE_WARN_POINTS >= 10_000);
    }
}
