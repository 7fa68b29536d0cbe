//! Uniform sampling lattice over a rectangular domain.
//!
//! A `SampleGrid` describes `nx * ny` evaluation points with inclusive
//! endpoints on both axes: `x(0) == x_min` and `x(nx - 1) == x_max`.
//! The grid carries its domain so that derived lattices (the interior
//! source sampling used by engines) can span the same region at a
//! different resolution.

use glam::DVec2;

use crate::error::FieldError;

/// A uniform 2D sampling lattice with inclusive domain endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    nx: usize,
    ny: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl SampleGrid {
    /// Creates a grid of `nx * ny` points over `[x_min, x_max] x [y_min, y_max]`.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or if `nx * ny` overflows `usize`.
    pub fn new(
        nx: usize,
        ny: usize,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Result<Self, FieldError> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        nx.checked_mul(ny).ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            nx,
            ny,
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
        })
    }

    /// Creates an `n x n` grid over the centered square `[-half_extent, half_extent]^2`.
    pub fn centered_square(n: usize, half_extent: f64) -> Result<Self, FieldError> {
        Self::new(n, n, (-half_extent, half_extent), (-half_extent, half_extent))
    }

    /// Creates a grid spanning the same domain as `self` at a different resolution.
    pub fn with_resolution(&self, nx: usize, ny: usize) -> Result<Self, FieldError> {
        Self::new(nx, ny, (self.x_min, self.x_max), (self.y_min, self.y_max))
    }

    /// Points per row.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Points per column.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of sample points.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Always false for a constructed grid (dimensions are validated non-zero).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The domain as `((x_min, x_max), (y_min, y_max))`.
    pub fn extent(&self) -> ((f64, f64), (f64, f64)) {
        ((self.x_min, self.x_max), (self.y_min, self.y_max))
    }

    /// x-coordinate of column `i`. A single-column grid sits at `x_min`.
    pub fn x(&self, i: usize) -> f64 {
        debug_assert!(i < self.nx);
        if self.nx > 1 {
            self.x_min + (self.x_max - self.x_min) * i as f64 / (self.nx - 1) as f64
        } else {
            self.x_min
        }
    }

    /// y-coordinate of row `j`. A single-row grid sits at `y_min`.
    pub fn y(&self, j: usize) -> f64 {
        debug_assert!(j < self.ny);
        if self.ny > 1 {
            self.y_min + (self.y_max - self.y_min) * j as f64 / (self.ny - 1) as f64
        } else {
            self.y_min
        }
    }

    /// The sample point at `(i, j)`.
    pub fn point(&self, i: usize, j: usize) -> DVec2 {
        DVec2::new(self.x(i), self.y(j))
    }

    /// Converts `(i, j)` indices to a flat row-major index.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        j * self.nx + i
    }

    /// Iterates over all sample points as `(i, j, point)` in row-major order.
    pub fn iter_points(&self) -> impl Iterator<Item = (usize, usize, DVec2)> + '_ {
        (0..self.ny).flat_map(move |j| (0..self.nx).map(move |i| (i, j, self.point(i, j))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_indexing_is_consistent() {
        let g = SampleGrid::new(4, 3, (0.0, 1.0), (0.0, 1.0)).unwrap();
        assert_eq!(g.idx(0, 0), 0);
        assert_eq!(g.idx(1, 0), 1);
        assert_eq!(g.idx(0, 1), 4);
        assert_eq!(g.idx(3, 2), 11); // (j=2)*4 + i=3 = 11
        assert_eq!(g.len(), 12);
    }

    #[test]
    fn endpoints_are_inclusive() {
        let g = SampleGrid::new(5, 5, (-6.0, 6.0), (-6.0, 6.0)).unwrap();
        assert!((g.x(0) + 6.0).abs() < 1e-12);
        assert!((g.x(4) - 6.0).abs() < 1e-12);
        assert!((g.y(0) + 6.0).abs() < 1e-12);
        assert!((g.y(4) - 6.0).abs() < 1e-12);
        // Interior point of linspace(-6, 6, 5) is 0
        assert!(g.x(2).abs() < 1e-12);
    }

    #[test]
    fn centered_square_spans_symmetric_domain() {
        let g = SampleGrid::centered_square(150, 6.0).unwrap();
        assert_eq!(g.nx(), 150);
        assert_eq!(g.ny(), 150);
        let ((x0, x1), (y0, y1)) = g.extent();
        assert_eq!((x0, x1), (-6.0, 6.0));
        assert_eq!((y0, y1), (-6.0, 6.0));
    }

    #[test]
    fn with_resolution_keeps_domain() {
        let g = SampleGrid::centered_square(150, 6.0).unwrap();
        let src = g.with_resolution(40, 40).unwrap();
        assert_eq!(src.nx(), 40);
        assert_eq!(src.extent(), g.extent());
        assert!((src.x(0) + 6.0).abs() < 1e-12);
        assert!((src.x(39) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            SampleGrid::new(0, 5, (0.0, 1.0), (0.0, 1.0)),
            Err(FieldError::InvalidDimensions)
        ));
        assert!(matches!(
            SampleGrid::new(5, 0, (0.0, 1.0), (0.0, 1.0)),
            Err(FieldError::InvalidDimensions)
        ));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(SampleGrid::new(usize::MAX, 2, (0.0, 1.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn single_point_axis_sits_at_min() {
        let g = SampleGrid::new(1, 1, (2.0, 5.0), (-3.0, 3.0)).unwrap();
        assert_eq!(g.x(0), 2.0);
        assert_eq!(g.y(0), -3.0);
    }

    #[test]
    fn iter_points_yields_row_major_order() {
        let g = SampleGrid::new(2, 2, (0.0, 1.0), (0.0, 1.0)).unwrap();
        let pts: Vec<(usize, usize, DVec2)> = g.iter_points().collect();
        assert_eq!(pts.len(), 4);
        assert_eq!((pts[0].0, pts[0].1), (0, 0));
        assert_eq!((pts[1].0, pts[1].1), (1, 0));
        assert_eq!((pts[2].0, pts[2].1), (0, 1));
        assert_eq!(pts[3].2, DVec2::new(1.0, 1.0));
    }
}
