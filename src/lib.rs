//! Axis-aligned bounds and centroids of n-dimensional point clouds.
//!
//! ```
//! use cartesian_geometry::{BoundedPointCloud, Point, MAX_BOUND_IDX};
//!
//! let obj = BoundedPointCloud::new(vec![
//!     Point::xy(0.0, 0.0),
//!     Point::xy(2.0, 0.0),
//!     Point::xy(0.0, 4.0),
//! ])?;
//! assert_eq!(obj.bounds()[1][MAX_BOUND_IDX], 4.0);
//! assert_eq!(obj.centroid_of_bounds(), &Point::xy(1.0, 2.0));
//! # Ok::<(), cartesian_geometry::GeometryError>(())
//! ```

#![forbid(unsafe_code)]

pub use cartesian_core::*;
