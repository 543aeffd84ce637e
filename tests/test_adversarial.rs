//! Adversarial edge-case integration tests.
//!
//! Degenerate, boundary and pathological inputs: nothing may panic, bad
//! input must be rejected with an invalid-argument error, and non-finite
//! values propagate through the arithmetic instead of being rejected.

use cartesian_geometry::{BoundedPointCloud, GeometryError, Point, MAX_BOUND_IDX, MIN_BOUND_IDX};
use proptest::prelude::*;

// ────────────────── Rejection ──────────────────

#[test]
fn empty_vec_is_rejected() {
    let res = BoundedPointCloud::<Point>::new(Vec::new());
    assert!(matches!(res, Err(GeometryError::EmptyPointCloud)));
}

#[test]
fn empty_raw_arrays_are_rejected() {
    let res = BoundedPointCloud::<[f64; 3]>::new(Vec::new());
    assert!(res.unwrap_err().is_invalid_argument());
}

#[test]
fn mismatch_in_last_position() {
    let mut pts = vec![Point::xyz(0.0, 0.0, 0.0); 100];
    pts.push(Point::xy(0.0, 0.0));
    let err = BoundedPointCloud::new(pts).unwrap_err();
    assert_eq!(
        err,
        GeometryError::InconsistentDimensions {
            index: 100,
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn error_messages_name_the_problem() {
    let empty = BoundedPointCloud::<Point>::new(Vec::new()).unwrap_err();
    assert!(empty.to_string().contains("empty"));

    let mixed = BoundedPointCloud::new(vec![Point::xy(0.0, 0.0), Point::xyz(0.0, 0.0, 0.0)])
        .unwrap_err();
    let msg = mixed.to_string();
    assert!(msg.contains("inconsistent dimensions"), "{msg}");
    assert!(msg.contains("expected 2"), "{msg}");
}

// ────────────────── Non-finite values ──────────────────

#[test]
fn infinities_widen_bounds() {
    let obj = BoundedPointCloud::new(vec![
        Point::xy(f64::INFINITY, 0.0),
        Point::xy(f64::NEG_INFINITY, 0.0),
        Point::xy(1.0, 0.0),
    ])
    .unwrap();
    assert_eq!(obj.bounds()[0][MIN_BOUND_IDX], f64::NEG_INFINITY);
    assert_eq!(obj.bounds()[0][MAX_BOUND_IDX], f64::INFINITY);
    // inf + -inf
    assert!(obj.centroid_of_bounds().dim(0).is_nan());
    assert!(obj.centroid_of_cloud().dim(0).is_nan());
    // Untouched dimension stays exact.
    assert_eq!(obj.bounds()[1], [0.0, 0.0]);
    assert_eq!(obj.centroid_of_cloud().dim(1), 0.0);
}

#[test]
fn nan_first_point_poisons_that_dimension() {
    let obj = BoundedPointCloud::new(vec![Point::xy(f64::NAN, 1.0), Point::xy(5.0, 2.0)]).unwrap();
    // Comparisons against a NaN seed are always false.
    assert!(obj.bounds()[0][MIN_BOUND_IDX].is_nan());
    assert!(obj.bounds()[0][MAX_BOUND_IDX].is_nan());
    assert_eq!(obj.bounds()[1], [1.0, 2.0]);
}

#[test]
fn huge_coordinates_overflow_cloud_centroid() {
    let obj = BoundedPointCloud::new(vec![Point::new(vec![f64::MAX]), Point::new(vec![f64::MAX])])
        .unwrap();
    assert_eq!(obj.bounds()[0], [f64::MAX, f64::MAX]);
    assert!(obj.centroid_of_cloud().dim(0).is_infinite());
}

// ────────────────── Degenerate shapes ──────────────────

#[test]
fn one_dimensional_cloud() {
    let obj = BoundedPointCloud::new(vec![[3.0], [-1.0], [7.0], [1.0]]).unwrap();
    assert_eq!(obj.num_dimensions(), 1);
    assert_eq!(obj.bounds(), &[[-1.0, 7.0]]);
    assert_eq!(obj.centroid_of_bounds(), &Point::new(vec![3.0]));
    assert_eq!(obj.centroid_of_cloud(), &Point::new(vec![2.5]));
}

#[test]
fn high_dimensional_cloud() {
    let dims = 64;
    let pts: Vec<Vec<f64>> = (0..10)
        .map(|i| (0..dims).map(|d| (i * d) as f64).collect())
        .collect();
    let obj = BoundedPointCloud::new(pts).unwrap();
    assert_eq!(obj.num_dimensions(), dims);
    for d in 0..dims {
        assert_eq!(obj.min_bound(d), 0.0);
        assert_eq!(obj.max_bound(d), (9 * d) as f64);
    }
}

#[test]
fn all_points_identical() {
    let obj = BoundedPointCloud::new(vec![Point::xyz(-2.0, 0.5, 9.0); 1000]).unwrap();
    assert_eq!(obj.bounds(), &[[-2.0, -2.0], [0.5, 0.5], [9.0, 9.0]]);
    assert_eq!(obj.centroid_of_bounds(), &Point::xyz(-2.0, 0.5, 9.0));
    assert!(obj.contains_point(&[-2.0, 0.5, 9.0]));
    assert!(!obj.contains_point(&[-2.0, 0.5, 9.000001]));
}

#[test]
#[should_panic]
fn min_bound_out_of_range_panics() {
    let obj = BoundedPointCloud::new(vec![Point::xy(0.0, 0.0)]).unwrap();
    let _ = obj.min_bound(2);
}

// ────────────────── Properties ──────────────────

proptest! {
    #[test]
    fn source_points_and_centroids_lie_within_bounds(
        pts in prop::collection::vec(
            (-1e6f64..1e6f64, -1e6f64..1e6f64, -1e6f64..1e6f64),
            1..300
        )
    ) {
        let obj = BoundedPointCloud::new(
            pts.iter().map(|&(x, y, z)| [x, y, z]).collect::<Vec<_>>()
        ).unwrap();
        for p in obj.point_cloud() {
            prop_assert!(obj.contains_point(p));
        }
        prop_assert!(obj.contains_point(obj.centroid_of_bounds()));
    }

    #[test]
    fn repeated_point_centroid_is_exact(
        x in -1000i32..1000,
        n in 1usize..200,
    ) {
        // Integer coordinates keep the running sum exact.
        let x = f64::from(x);
        let obj = BoundedPointCloud::new(vec![[x]; n]).unwrap();
        prop_assert_eq!(obj.centroid_of_cloud(), &Point::new(vec![x]));
        prop_assert!(obj.contains_point(obj.centroid_of_cloud()));
    }
}
