use std::sync::Arc;

use crate::error::GeometryError;
use crate::point::Point;
use crate::traits::{HasCoordinates, HasDimensions};
use crate::vector::Vector;

/// Column of the bounds table holding the per-dimension minimum.
pub const MIN_BOUND_IDX: usize = 0;
/// Column of the bounds table holding the per-dimension maximum.
pub const MAX_BOUND_IDX: usize = 1;

/// An object in n-dimensional cartesian space defined by a point cloud.
///
/// The axis-aligned bounds and both centroids are computed once in
/// [`BoundedPointCloud::new`] and never change afterwards. The source points
/// are retained as a shared `Arc<[P]>`; cloning the entity or the handle
/// returned by [`BoundedPointCloud::point_cloud_arc`] never copies them.
#[derive(Debug, Clone)]
pub struct BoundedPointCloud<P> {
    num_dimensions: usize,
    point_cloud: Arc<[P]>,
    bounds: Vec<[f64; 2]>,
    centroid_of_bounds: Point,
    centroid_of_cloud: Point,
}

impl<P: HasCoordinates> BoundedPointCloud<P> {
    pub const MIN_BOUND_IDX: usize = MIN_BOUND_IDX;
    pub const MAX_BOUND_IDX: usize = MAX_BOUND_IDX;

    /// Builds the bounded cloud, or fails if `points` is empty or its points
    /// do not all share the first point's dimension.
    pub fn new(points: impl Into<Arc<[P]>>) -> Result<Self, GeometryError> {
        let point_cloud: Arc<[P]> = points.into();
        let num_dimensions = validate(&point_cloud)?;

        let bounds = compute_bounds(&point_cloud, num_dimensions);
        let centroid_of_bounds = compute_centroid_of_bounds(&bounds);
        let centroid_of_cloud = compute_centroid_of_cloud(&point_cloud, num_dimensions);

        tracing::debug!(
            num_points = point_cloud.len(),
            num_dimensions,
            "computed bounded point cloud"
        );

        Ok(Self {
            num_dimensions,
            point_cloud,
            bounds,
            centroid_of_bounds,
            centroid_of_cloud,
        })
    }

    /// The points this object was built from, in their original order.
    pub fn point_cloud(&self) -> &[P] {
        &self.point_cloud
    }

    /// Shared handle to the source points.
    pub fn point_cloud_arc(&self) -> Arc<[P]> {
        Arc::clone(&self.point_cloud)
    }

    pub fn num_points(&self) -> usize {
        self.point_cloud.len()
    }

    pub fn num_dimensions(&self) -> usize {
        self.num_dimensions
    }

    /// Bounds table: one row per dimension, columns indexed by
    /// [`MIN_BOUND_IDX`] and [`MAX_BOUND_IDX`].
    pub fn bounds(&self) -> &[[f64; 2]] {
        &self.bounds
    }

    pub fn min_bound_index(&self) -> usize {
        MIN_BOUND_IDX
    }

    pub fn max_bound_index(&self) -> usize {
        MAX_BOUND_IDX
    }

    /// # Panics
    ///
    /// Panics if `d >= self.num_dimensions()`.
    pub fn min_bound(&self, d: usize) -> f64 {
        self.bounds[d][MIN_BOUND_IDX]
    }

    /// # Panics
    ///
    /// Panics if `d >= self.num_dimensions()`.
    pub fn max_bound(&self, d: usize) -> f64 {
        self.bounds[d][MAX_BOUND_IDX]
    }

    /// Center of the bounding box.
    pub fn centroid_of_bounds(&self) -> &Point {
        &self.centroid_of_bounds
    }

    /// Mean position of all points in the cloud.
    pub fn centroid_of_cloud(&self) -> &Point {
        &self.centroid_of_cloud
    }

    /// Inclusive point-in-box test against the bounds.
    ///
    /// Returns `false` for a point of a different dimension or with any
    /// non-finite coordinate.
    pub fn contains_point(&self, p: &impl HasCoordinates) -> bool {
        if p.num_dimensions() != self.num_dimensions {
            return false;
        }
        self.bounds.iter().enumerate().all(|(d, b)| {
            let v = p.dim(d);
            v.is_finite() && v >= b[MIN_BOUND_IDX] && v <= b[MAX_BOUND_IDX]
        })
    }
}

impl<P> HasDimensions for BoundedPointCloud<P> {
    fn num_dimensions(&self) -> usize {
        self.num_dimensions
    }
}

fn validate<P: HasDimensions>(points: &[P]) -> Result<usize, GeometryError> {
    let first = points.first().ok_or(GeometryError::EmptyPointCloud)?;
    let expected = first.num_dimensions();
    if expected == 0 {
        return Err(GeometryError::ZeroDimensional);
    }

    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, p)| p.num_dimensions() != expected)
    {
        tracing::trace!(index, expected, "rejected point cloud with mixed dimensions");
        return Err(GeometryError::InconsistentDimensions {
            index,
            expected,
            found: p.num_dimensions(),
        });
    }

    Ok(expected)
}

// The first point seeds both columns; afterwards a value can only move one
// of them, so ties and NaN leave the running bounds untouched.
fn compute_bounds<P: HasCoordinates>(points: &[P], num_dimensions: usize) -> Vec<[f64; 2]> {
    let mut bounds = vec![[0.0; 2]; num_dimensions];
    let mut non_finite = 0usize;

    for (i, p) in points.iter().enumerate() {
        for (d, b) in bounds.iter_mut().enumerate() {
            let v = p.dim(d);
            if !v.is_finite() {
                non_finite += 1;
            }
            if i == 0 {
                b[MIN_BOUND_IDX] = v;
                b[MAX_BOUND_IDX] = v;
            } else if v < b[MIN_BOUND_IDX] {
                b[MIN_BOUND_IDX] = v;
            } else if v > b[MAX_BOUND_IDX] {
                b[MAX_BOUND_IDX] = v;
            }
        }
    }

    if non_finite > 0 {
        tracing::warn!(
            non_finite,
            "point cloud contains non-finite coordinates; bounds may be unreliable"
        );
    }

    bounds
}

fn compute_centroid_of_bounds(bounds: &[[f64; 2]]) -> Point {
    Point::new(
        bounds
            .iter()
            .map(|b| (b[MIN_BOUND_IDX] + b[MAX_BOUND_IDX]) / 2.0)
            .collect(),
    )
}

fn compute_centroid_of_cloud<P: HasCoordinates>(points: &[P], num_dimensions: usize) -> Point {
    let mut sum = Vector::zeros(num_dimensions);
    for p in points {
        sum.add_coordinates(p);
    }
    sum.scalar_divide(points.len() as f64).to_point()
}
