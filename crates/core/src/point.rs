use crate::traits::{HasCoordinates, HasDimensions};

/// An immutable point in n-dimensional cartesian space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(vec![x, y])
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(vec![x, y, z])
    }

    /// Coordinate along dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_dimensions()`.
    pub fn dim(&self, i: usize) -> f64 {
        assert!(i < self.coords.len(), "dimension index out of bounds");
        self.coords[i]
    }

    pub fn num_dimensions(&self) -> usize {
        self.coords.len()
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coords
    }

    /// Euclidean distance to `other`, or `None` if the dimensions differ.
    pub fn distance_from(&self, other: &Point) -> Option<f64> {
        if self.num_dimensions() != other.num_dimensions() {
            return None;
        }
        let sq: f64 = self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Some(sq.sqrt())
    }
}

impl HasDimensions for Point {
    fn num_dimensions(&self) -> usize {
        Point::num_dimensions(self)
    }
}

impl HasCoordinates for Point {
    fn dim(&self, i: usize) -> f64 {
        Point::dim(self, i)
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}
