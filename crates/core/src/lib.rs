#![forbid(unsafe_code)]

pub mod bounded_cloud;
pub mod error;
pub mod point;
pub mod traits;
pub mod vector;

pub use bounded_cloud::{BoundedPointCloud, MAX_BOUND_IDX, MIN_BOUND_IDX};
pub use error::GeometryError;
pub use point::Point;
pub use traits::{HasCoordinates, HasDimensions};
pub use vector::Vector;
