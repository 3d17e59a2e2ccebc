//! Tests for the bit-packed diff mask

#[cfg(test)]
mod tests {
    use boxdiff::spatial::{DiffMask, Point};

    // Tests a fresh mask has nothing marked
    // Verified by initializing all bits to 1
    #[test]
    fn test_new_mask_is_empty() {
        let mask = DiffMask::new(4, 3);
        assert!(mask.is_empty());
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 3);
    }

    // Tests marked points are reported and others are not
    // Verified by transposing the row-major index
    #[test]
    fn test_from_points_marks_pixels() {
        let mask = DiffMask::from_points(4, 3, &[Point::new(3, 0), Point::new(0, 2)]);

        assert!(mask.is_set(Point::new(3, 0)));
        assert!(mask.is_set(Point::new(0, 2)));
        assert!(!mask.is_set(Point::new(0, 3)));
        assert!(!mask.is_set(Point::new(2, 0)));
        assert_eq!(mask.count(), 2);
    }

    // Tests points outside the grid are dropped rather than wrapped
    // Verified by removing the bounds check in the index computation
    #[test]
    fn test_out_of_bounds_points_are_ignored() {
        let mask = DiffMask::from_points(3, 3, &[Point::new(3, 0), Point::new(0, 5)]);
        assert!(mask.is_empty());
        assert!(!mask.is_set(Point::new(3, 0)));
        assert!(!mask.is_set(Point::new(0, 1)));
    }

    // Tests iteration yields raster order regardless of insertion order
    // Verified by iterating column-major
    #[test]
    fn test_iter_set_raster_order() {
        let mask = DiffMask::from_points(
            5,
            5,
            &[Point::new(1, 4), Point::new(4, 0), Point::new(0, 2), Point::new(2, 2)],
        );

        let points: Vec<Point> = mask.iter_set().collect();
        assert_eq!(
            points,
            vec![Point::new(4, 0), Point::new(0, 2), Point::new(2, 2), Point::new(1, 4)]
        );
    }

    // Tests duplicate points count once
    // Verified by counting insertions instead of bits
    #[test]
    fn test_duplicates_count_once() {
        let point = Point::new(1, 1);
        let mask = DiffMask::from_points(2, 2, &[point, point]);
        assert_eq!(mask.count(), 1);
        assert_eq!(mask.to_string(), "DiffMask(2x2, 1 marked)");
    }
}
