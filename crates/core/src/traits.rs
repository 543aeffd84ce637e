/// Anything that lives in an n-dimensional cartesian space.
pub trait HasDimensions {
    fn num_dimensions(&self) -> usize;
}

/// Indexed coordinate access for n-dimensional points.
///
/// Implementors must return a value for every `i` in `0..num_dimensions()`
/// and may panic outside that range.
pub trait HasCoordinates: HasDimensions {
    fn dim(&self, i: usize) -> f64;
}

impl<const N: usize> HasDimensions for [f64; N] {
    fn num_dimensions(&self) -> usize {
        N
    }
}

impl<const N: usize> HasCoordinates for [f64; N] {
    fn dim(&self, i: usize) -> f64 {
        self[i]
    }
}

impl HasDimensions for Vec<f64> {
    fn num_dimensions(&self) -> usize {
        self.len()
    }
}

impl HasCoordinates for Vec<f64> {
    fn dim(&self, i: usize) -> f64 {
        self[i]
    }
}

impl<T: HasDimensions + ?Sized> HasDimensions for &T {
    fn num_dimensions(&self) -> usize {
        (**self).num_dimensions()
    }
}

impl<T: HasCoordinates + ?Sized> HasCoordinates for &T {
    fn dim(&self, i: usize) -> f64 {
        (**self).dim(i)
    }
}

#[cfg(test)]
mod tests {
    use super::{HasCoordinates, HasDimensions};

    #[test]
    fn arrays_expose_coordinates() {
        let p = [1.0, -2.0, 3.5];
        assert_eq!(p.num_dimensions(), 3);
        assert_eq!(p.dim(1), -2.0);
    }

    #[test]
    fn vecs_expose_coordinates() {
        let p = vec![4.0, 5.0];
        assert_eq!(p.num_dimensions(), 2);
        assert_eq!(p.dim(0), 4.0);
    }

    #[test]
    fn references_forward() {
        let p = [7.0, 8.0];
        let r = &p;
        assert_eq!(r.num_dimensions(), 2);
        assert_eq!(r.dim(1), 8.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_dim_panics() {
        let p = [1.0, 2.0];
        let _ = p.dim(2);
    }
}
