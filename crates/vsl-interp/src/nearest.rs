//! Nearest-neighbor interpolation.

use crate::boundary::{BoundaryType, Resolved};
use crate::grid::FixedGridInterpolation;
use vsl_core::{Matrix, Sample};

/// Picks the sample whose node is closest to the position.
///
/// Ties round up: `1.5` selects sample `2`.
///
/// ```rust
/// use vsl_interp::{FixedGridInterpolation, NearestNeighborInterpolation};
///
/// let nn = NearestNeighborInterpolation::default();
/// assert_eq!(nn.apply(&[1u8, 2, 3], 0.4), 1);
/// assert_eq!(nn.apply(&[1u8, 2, 3], 1.5), 3);
/// assert_eq!(nn.range_of_influence(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NearestNeighborInterpolation {
    boundary: BoundaryType,
}

impl NearestNeighborInterpolation {
    /// Nearest-neighbor interpolator with the given boundary policy.
    pub fn new(boundary: BoundaryType) -> Self {
        Self { boundary }
    }
}

#[inline]
fn nearest(coord: f32) -> isize {
    (coord + 0.5).floor() as isize
}

impl FixedGridInterpolation for NearestNeighborInterpolation {
    #[inline]
    fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    fn set_boundary_type(&mut self, boundary: BoundaryType) {
        self.boundary = boundary;
    }

    #[inline]
    fn range_of_influence(&self) -> usize {
        0
    }

    #[inline]
    fn apply<T: Sample>(&self, src: &[T], x: f32) -> T {
        self.boundary.fetch(src, nearest(x)).unwrap_or_else(T::zero)
    }

    #[inline]
    fn apply_unchecked<T: Sample>(&self, src: &[T], x: f32) -> T {
        src[nearest(x) as usize]
    }

    #[inline]
    fn interpolate<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        match self
            .boundary
            .resolve_2d(nearest(row), nearest(col), src.rows(), src.columns())
        {
            Resolved::Index((r, c)) => *src.at(r, c),
            Resolved::Zero | Resolved::Undefined => T::zero(),
        }
    }

    #[inline]
    fn interpolate_unchecked<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        *src.at(nearest(row) as usize, nearest(col) as usize)
    }
}
