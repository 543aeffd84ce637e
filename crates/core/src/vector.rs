use nalgebra::DVector;

use crate::point::Point;
use crate::traits::{HasCoordinates, HasDimensions};

/// Dimension-agnostic vector used to accumulate coordinate sums.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: DVector<f64>,
}

impl Vector {
    pub fn zeros(num_dimensions: usize) -> Self {
        Self {
            data: DVector::zeros(num_dimensions),
        }
    }

    pub fn from_point(p: &impl HasCoordinates) -> Self {
        let n = p.num_dimensions();
        Self {
            data: DVector::from_fn(n, |i, _| p.dim(i)),
        }
    }

    pub fn num_dimensions(&self) -> usize {
        self.data.len()
    }

    pub fn dim(&self, i: usize) -> f64 {
        self.data[i]
    }

    /// Elementwise sum, or `None` if the dimensions differ.
    pub fn checked_add(&self, other: &Vector) -> Option<Vector> {
        if self.num_dimensions() != other.num_dimensions() {
            return None;
        }
        Some(Self {
            data: &self.data + &other.data,
        })
    }

    /// Adds a point's coordinates in place.
    ///
    /// # Panics
    ///
    /// Panics if `p` has fewer dimensions than `self`.
    pub fn add_coordinates(&mut self, p: &impl HasCoordinates) {
        for (i, acc) in self.data.iter_mut().enumerate() {
            *acc += p.dim(i);
        }
    }

    pub fn scalar_multiply(&self, scalar: f64) -> Vector {
        Self {
            data: &self.data * scalar,
        }
    }

    /// Divides every dimension by `divisor`.
    pub fn scalar_divide(&self, divisor: f64) -> Vector {
        Self {
            data: &self.data / divisor,
        }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.data.iter().copied().collect())
    }
}

impl HasDimensions for Vector {
    fn num_dimensions(&self) -> usize {
        Vector::num_dimensions(self)
    }
}

impl HasCoordinates for Vector {
    fn dim(&self, i: usize) -> f64 {
        Vector::dim(self, i)
    }
}
