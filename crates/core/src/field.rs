//! Two-dimensional vector field result grids.
//!
//! A `VectorField` stores `nx * ny` (bx, by) component pairs in row-major
//! layout. Cells where the field is defined as absent hold NaN in both
//! components; all arithmetic lets NaN propagate, so a masked cell stays
//! masked through accumulation and scaling.

use crate::error::FieldError;

/// A 2D vector field with NaN as the "field absent" sentinel.
#[derive(Debug, Clone)]
pub struct VectorField {
    nx: usize,
    ny: usize,
    bx: Vec<f64>,
    by: Vec<f64>,
}

impl VectorField {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or if `nx * ny` overflows `usize`.
    pub fn zeros(nx: usize, ny: usize) -> Result<Self, FieldError> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = nx.checked_mul(ny).ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            nx,
            ny,
            bx: vec![0.0; len],
            by: vec![0.0; len],
        })
    }

    /// Creates a field from pre-built component vectors.
    ///
    /// Returns `FieldError::DimensionMismatch` if either vector's length
    /// differs from `nx * ny`.
    pub fn from_components(
        nx: usize,
        ny: usize,
        bx: Vec<f64>,
        by: Vec<f64>,
    ) -> Result<Self, FieldError> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let expected = nx.checked_mul(ny).ok_or(FieldError::InvalidDimensions)?;
        if bx.len() != expected || by.len() != expected {
            return Err(FieldError::DimensionMismatch {
                lhs_nx: nx,
                lhs_ny: ny,
                rhs_nx: bx.len(),
                rhs_ny: by.len(),
            });
        }
        Ok(Self { nx, ny, bx, by })
    }

    /// Points per row.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Points per column.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.bx.len()
    }

    /// Always false for a constructed field.
    pub fn is_empty(&self) -> bool {
        self.bx.is_empty()
    }

    /// Read-only x-component data in row-major order.
    pub fn bx(&self) -> &[f64] {
        &self.bx
    }

    /// Read-only y-component data in row-major order.
    pub fn by(&self) -> &[f64] {
        &self.by
    }

    /// Mutable x-component data. Engine hot paths accumulate directly.
    pub fn bx_mut(&mut self) -> &mut [f64] {
        &mut self.bx
    }

    /// Mutable y-component data.
    pub fn by_mut(&mut self) -> &mut [f64] {
        &mut self.by
    }

    /// Both component slices mutably at once, for accumulation loops.
    pub fn components_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.bx, &mut self.by)
    }

    /// Converts `(i, j)` indices to a flat row-major index.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        j * self.nx + i
    }

    /// The (bx, by) pair at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> (f64, f64) {
        let idx = self.idx(i, j);
        (self.bx[idx], self.by[idx])
    }

    /// Sets both components at `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, bx: f64, by: f64) {
        let idx = self.idx(i, j);
        self.bx[idx] = bx;
        self.by[idx] = by;
    }

    /// True if both components at `(i, j)` are finite.
    pub fn is_finite_at(&self, i: usize, j: usize) -> bool {
        let (bx, by) = self.get(i, j);
        bx.is_finite() && by.is_finite()
    }

    /// Marks the cell at `(i, j)` as "field absent" (both components NaN).
    pub fn set_absent(&mut self, i: usize, j: usize) {
        self.set(i, j, f64::NAN, f64::NAN);
    }

    /// Marks every cell where `absent(i, j)` returns true.
    pub fn mask_where<F>(&mut self, mut absent: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        for j in 0..self.ny {
            for i in 0..self.nx {
                if absent(i, j) {
                    self.set_absent(i, j);
                }
            }
        }
    }

    /// In-place element-wise addition. NaN in either operand propagates.
    ///
    /// Returns `FieldError::DimensionMismatch` if the fields differ in size.
    pub fn add_assign(&mut self, other: &VectorField) -> Result<(), FieldError> {
        if self.nx != other.nx || self.ny != other.ny {
            return Err(FieldError::DimensionMismatch {
                lhs_nx: self.nx,
                lhs_ny: self.ny,
                rhs_nx: other.nx,
                rhs_ny: other.ny,
            });
        }
        self.bx
            .iter_mut()
            .zip(other.bx.iter())
            .for_each(|(a, b)| *a += b);
        self.by
            .iter_mut()
            .zip(other.by.iter())
            .for_each(|(a, b)| *a += b);
        Ok(())
    }

    /// In-place scaling of both components by `factor`.
    pub fn scale_assign(&mut self, factor: f64) {
        self.bx.iter_mut().for_each(|v| *v *= factor);
        self.by.iter_mut().for_each(|v| *v *= factor);
    }

    /// Per-cell field magnitude `hypot(bx, by)` in row-major order.
    ///
    /// Masked cells yield NaN.
    pub fn magnitude(&self) -> Vec<f64> {
        self.bx
            .iter()
            .zip(self.by.iter())
            .map(|(&bx, &by)| bx.hypot(by))
            .collect()
    }

    /// Number of cells where both components are finite.
    pub fn finite_count(&self) -> usize {
        self.bx
            .iter()
            .zip(self.by.iter())
            .filter(|(bx, by)| bx.is_finite() && by.is_finite())
            .count()
    }
}
