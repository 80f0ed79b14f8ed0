//! Interpolation on a regular integer grid.
//!
//! [`FixedGridInterpolation`] is the interface consumers program against:
//! scaling, warping, local sampling and pyramid access are all generic over
//! it. Elements are integer-indexed samples; positions are real-valued.
//!
//! # Checked and Unchecked Access
//!
//! The checked entries ([`apply`](FixedGridInterpolation::apply),
//! [`interpolate`](FixedGridInterpolation::interpolate)) accept any
//! coordinate and consult the boundary policy when the support window
//! leaves the array. The unchecked entries skip that test and require the
//! window to be inside; a violation panics on an index check rather than
//! reading out of bounds. [`is_interior`](FixedGridInterpolation::is_interior)
//! tells a caller when the unchecked path is safe. Whenever it is, both
//! entries return identical values.
//!
//! # Bound Handles
//!
//! [`bind`](FixedGridInterpolation::bind) pairs an interpolator with an array
//! so a position can be evaluated without passing the array each time:
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_interp::{BilinearInterpolation, FixedGridInterpolation};
//!
//! let m = Matrix::from_fn(3, 3, |r, c| (r * 3 + c) as f32);
//! let interp = BilinearInterpolation::default();
//! let bound = interp.bind(&m);
//! assert_eq!(bound.apply(0.5, 0.5), 2.0);
//! ```

use crate::boundary::BoundaryType;
use vsl_core::{Matrix, Point, Sample};

/// Interpolation of 1D and 2D sample arrays at real-valued positions.
///
/// The 2D methods take `(row, col)`; [`interpolate_at`](Self::interpolate_at)
/// takes a [`Point`] with `x` the column and `y` the row.
pub trait FixedGridInterpolation {
    /// Current boundary policy.
    fn boundary_type(&self) -> BoundaryType;

    /// Replaces the boundary policy.
    fn set_boundary_type(&mut self, boundary: BoundaryType);

    /// Half-width of the support window.
    ///
    /// A coordinate `c` along an axis of `size` samples only touches samples
    /// inside the axis when `range <= c <= size - 1 - range`.
    fn range_of_influence(&self) -> usize;

    /// Value of `src` at position `x`.
    fn apply<T: Sample>(&self, src: &[T], x: f32) -> T;

    /// Value of `src` at position `x` without a boundary test.
    ///
    /// # Panics
    ///
    /// Panics if the support window leaves `src`.
    fn apply_unchecked<T: Sample>(&self, src: &[T], x: f32) -> T;

    /// Value of `src` at `(row, col)`.
    fn interpolate<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T;

    /// Value of `src` at `(row, col)` without a boundary test.
    ///
    /// # Panics
    ///
    /// Panics if the support window leaves `src`.
    fn interpolate_unchecked<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T;

    /// Value of `src` at `p`.
    #[inline]
    fn interpolate_at<T: Sample>(&self, src: &Matrix<T>, p: Point) -> T {
        self.interpolate(src, p.y, p.x)
    }

    /// Returns `true` if the window around `coord` lies inside `0..size`.
    ///
    /// ```rust
    /// use vsl_interp::{FixedGridInterpolation, GenericInterpolation};
    ///
    /// let bicubic = GenericInterpolation::new();
    /// assert!(bicubic.is_interior(2.5, 6));
    /// assert!(!bicubic.is_interior(1.5, 6));
    /// ```
    #[inline]
    fn is_interior(&self, coord: f32, size: usize) -> bool {
        let range = self.range_of_influence() as f32;
        coord >= range && coord <= size as f32 - 1.0 - range
    }

    /// Binds a matrix for repeated evaluation.
    #[inline]
    fn bind<'a, T: Sample>(&'a self, src: &'a Matrix<T>) -> BoundMatrix<'a, Self, T>
    where
        Self: Sized,
    {
        BoundMatrix { interp: self, src }
    }

    /// Binds a slice for repeated evaluation.
    #[inline]
    fn bind_slice<'a, T: Sample>(&'a self, src: &'a [T]) -> BoundVector<'a, Self, T>
    where
        Self: Sized,
    {
        BoundVector { interp: self, src }
    }
}

/// An interpolator borrowed together with the matrix it evaluates.
#[derive(Debug)]
pub struct BoundMatrix<'a, I, T> {
    interp: &'a I,
    src: &'a Matrix<T>,
}

impl<I, T> Clone for BoundMatrix<'_, I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T> Copy for BoundMatrix<'_, I, T> {}

impl<'a, I: FixedGridInterpolation, T: Sample> BoundMatrix<'a, I, T> {
    /// The bound matrix.
    #[inline]
    pub fn source(&self) -> &'a Matrix<T> {
        self.src
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn apply(&self, row: f32, col: f32) -> T {
        self.interp.interpolate(self.src, row, col)
    }

    /// Value at `p`.
    #[inline]
    pub fn apply_at(&self, p: Point) -> T {
        self.interp.interpolate_at(self.src, p)
    }

    /// Value at `(row, col)` without a boundary test.
    #[inline]
    pub fn apply_unchecked(&self, row: f32, col: f32) -> T {
        self.interp.interpolate_unchecked(self.src, row, col)
    }
}

/// An interpolator borrowed together with the slice it evaluates.
#[derive(Debug)]
pub struct BoundVector<'a, I, T> {
    interp: &'a I,
    src: &'a [T],
}

impl<I, T> Clone for BoundVector<'_, I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T> Copy for BoundVector<'_, I, T> {}

impl<'a, I: FixedGridInterpolation, T: Sample> BoundVector<'a, I, T> {
    /// The bound slice.
    #[inline]
    pub fn source(&self) -> &'a [T] {
        self.src
    }

    /// Value at `x`.
    #[inline]
    pub fn apply(&self, x: f32) -> T {
        self.interp.apply(self.src, x)
    }

    /// Value at `x` without a boundary test.
    #[inline]
    pub fn apply_unchecked(&self, x: f32) -> T {
        self.interp.apply_unchecked(self.src, x)
    }
}
