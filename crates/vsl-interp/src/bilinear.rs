//! Closed-form bilinear interpolation.
//!
//! Same support as the bilinear kernel table but evaluates the weights
//! `1 - f` and `f` directly, without quantizing the fractional offset.

use crate::boundary::BoundaryType;
use crate::grid::FixedGridInterpolation;
use crate::window::SupportWindow;
use vsl_core::{Accumulator, Matrix, Sample};

/// Linear blend of the two samples around a position, per axis.
///
/// ```rust
/// use vsl_core::Matrix;
/// use vsl_interp::{BilinearInterpolation, BoundaryType, FixedGridInterpolation};
///
/// let interp = BilinearInterpolation::new(BoundaryType::Constant);
/// assert_eq!(interp.apply(&[0.0f32, 10.0], 0.25), 2.5);
///
/// let m = Matrix::from_vec(2, 2, vec![0.0f32, 10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(interp.interpolate(&m, 0.5, 0.5), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BilinearInterpolation {
    boundary: BoundaryType,
}

impl BilinearInterpolation {
    /// Bilinear interpolator with the given boundary policy.
    pub fn new(boundary: BoundaryType) -> Self {
        Self { boundary }
    }
}

#[inline]
fn blend<A: Accumulator>(a: A, b: A, f: f32) -> A {
    A::ZERO.add_weighted(a, 1.0 - f).add_weighted(b, f)
}

impl FixedGridInterpolation for BilinearInterpolation {
    #[inline]
    fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    fn set_boundary_type(&mut self, boundary: BoundaryType) {
        self.boundary = boundary;
    }

    #[inline]
    fn range_of_influence(&self) -> usize {
        1
    }

    fn apply<T: Sample>(&self, src: &[T], x: f32) -> T {
        let w = SupportWindow::locate(x, 2);
        if w.fits(2, src.len()) {
            return self.apply_unchecked(src, x);
        }
        if !self.boundary.extends(src.len()) {
            return T::zero();
        }
        let at = |i| {
            self.boundary
                .fetch(src, w.index(i))
                .map_or(<T::Accum as Accumulator>::ZERO, T::to_accum)
        };
        T::from_accum(blend(at(0), at(1), w.fraction))
    }

    #[inline]
    fn apply_unchecked<T: Sample>(&self, src: &[T], x: f32) -> T {
        let w = SupportWindow::locate(x, 2);
        let i = w.anchor as usize;
        T::from_accum(blend(src[i].to_accum(), src[i + 1].to_accum(), w.fraction))
    }

    fn interpolate<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        let wy = SupportWindow::locate(row, 2);
        let wx = SupportWindow::locate(col, 2);
        if wy.fits(2, src.rows()) && wx.fits(2, src.columns()) {
            return self.interpolate_unchecked(src, row, col);
        }
        if !(self.boundary.extends(src.rows()) && self.boundary.extends(src.columns())) {
            return T::zero();
        }
        let at = |r, c| {
            self.boundary
                .fetch_2d(src, wy.index(r), wx.index(c))
                .map_or(<T::Accum as Accumulator>::ZERO, T::to_accum)
        };
        let top = blend(at(0, 0), at(0, 1), wx.fraction);
        let bottom = blend(at(1, 0), at(1, 1), wx.fraction);
        T::from_accum(blend(top, bottom, wy.fraction))
    }

    #[inline]
    fn interpolate_unchecked<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        let wy = SupportWindow::locate(row, 2);
        let wx = SupportWindow::locate(col, 2);
        let (r, c) = (wy.anchor as usize, wx.anchor as usize);
        let line = |r: usize| {
            let s = &src.row(r)[c..c + 2];
            blend(s[0].to_accum(), s[1].to_accum(), wx.fraction)
        };
        T::from_accum(blend(line(r), line(r + 1), wy.fraction))
    }
}
