/// Errors raised while building a [`BoundedPointCloud`](crate::BoundedPointCloud).
///
/// Every variant is an invalid-argument failure: the input point sequence was
/// unusable and nothing was constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("empty list of points provided to bounded point cloud")]
    EmptyPointCloud,
    #[error(
        "inconsistent dimensions in point cloud: point {index} has {found} dimensions, expected {expected}"
    )]
    InconsistentDimensions {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("point cloud points have zero dimensions")]
    ZeroDimensional,
}

impl GeometryError {
    /// Family predicate: `true` for every current variant. Callers that treat
    /// all construction failures alike can test this instead of matching.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GeometryError::EmptyPointCloud
                | GeometryError::InconsistentDimensions { .. }
                | GeometryError::ZeroDimensional
        )
    }
}
