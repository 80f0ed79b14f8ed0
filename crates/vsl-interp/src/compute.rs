//! Separable weighted-sum evaluation.
//!
//! Every evaluation path, checked or unchecked, 1D or 2D, funnels into
//! [`accumulate`]. Samples are pulled through an accessor closure instead of
//! being copied into a scratch window, so a configured kernel is never
//! mutated while evaluating and the boundary path differs from the fast path
//! only in how a sample is fetched. Both paths therefore perform the same
//! floating-point operations in the same order and agree bit-for-bit.
//!
//! The 2D sum runs the 1D pass once per support row at the column fraction
//! and a final 1D pass over those `N` intermediates at the row fraction. The
//! intermediates stay in the accumulator type.

use crate::boundary::BoundaryType;
use crate::kernel::KernelLut;
use crate::window::SupportWindow;
use vsl_core::{Accumulator, Matrix, Sample};

/// Folds `N` samples with the weights for quantized offset `q`.
///
/// `sample(i)` yields support sample `i`, leftmost first.
#[inline]
pub fn accumulate<A: Accumulator>(lut: &KernelLut, q: usize, mut sample: impl FnMut(usize) -> A) -> A {
    (0..lut.intervals()).fold(A::ZERO, |acc, i| acc.add_weighted(sample(i), lut.weight_at(i, q)))
}

/// Weighted sum over an already gathered window of `N` samples.
///
/// # Panics
///
/// Panics if `window` holds fewer than `N` samples.
#[inline]
pub fn compute_1d<T: Sample>(lut: &KernelLut, fraction: f32, window: &[T]) -> T {
    let q = lut.quantize(fraction);
    T::from_accum(accumulate(lut, q, |i| window[i].to_accum()))
}

/// Separable weighted sum over an already gathered `N x N` window.
///
/// # Panics
///
/// Panics if `window` holds fewer than `N` rows of `N` samples.
#[inline]
pub fn compute_2d<T: Sample>(lut: &KernelLut, fy: f32, fx: f32, window: &[&[T]]) -> T {
    let (qy, qx) = (lut.quantize(fy), lut.quantize(fx));
    T::from_accum(accumulate(lut, qy, |r| {
        let row = window[r];
        accumulate(lut, qx, |c| row[c].to_accum())
    }))
}

pub(crate) fn eval_1d_unchecked<T: Sample>(lut: &KernelLut, src: &[T], x: f32) -> T {
    let n = lut.intervals();
    let w = SupportWindow::locate(x, n);
    let start = w.anchor as usize;
    compute_1d(lut, w.fraction, &src[start..start + n])
}

pub(crate) fn eval_1d<T: Sample>(lut: &KernelLut, boundary: BoundaryType, src: &[T], x: f32) -> T {
    let n = lut.intervals();
    let w = SupportWindow::locate(x, n);
    if w.fits(n, src.len()) {
        return eval_1d_unchecked(lut, src, x);
    }
    if !boundary.extends(src.len()) {
        return T::zero();
    }
    let q = lut.quantize(w.fraction);
    T::from_accum(accumulate(lut, q, |i| {
        boundary
            .fetch(src, w.index(i))
            .map_or(<T::Accum as Accumulator>::ZERO, T::to_accum)
    }))
}

pub(crate) fn eval_2d_unchecked<T: Sample>(lut: &KernelLut, src: &Matrix<T>, row: f32, col: f32) -> T {
    let n = lut.intervals();
    let wy = SupportWindow::locate(row, n);
    let wx = SupportWindow::locate(col, n);
    let (top, left) = (wy.anchor as usize, wx.anchor as usize);
    let (qy, qx) = (lut.quantize(wy.fraction), lut.quantize(wx.fraction));
    T::from_accum(accumulate(lut, qy, |r| {
        let line = &src.row(top + r)[left..left + n];
        accumulate(lut, qx, |c| line[c].to_accum())
    }))
}

pub(crate) fn eval_2d<T: Sample>(
    lut: &KernelLut,
    boundary: BoundaryType,
    src: &Matrix<T>,
    row: f32,
    col: f32,
) -> T {
    let n = lut.intervals();
    let wy = SupportWindow::locate(row, n);
    let wx = SupportWindow::locate(col, n);
    if wy.fits(n, src.rows()) && wx.fits(n, src.columns()) {
        return eval_2d_unchecked(lut, src, row, col);
    }
    if !(boundary.extends(src.rows()) && boundary.extends(src.columns())) {
        return T::zero();
    }
    let (qy, qx) = (lut.quantize(wy.fraction), lut.quantize(wx.fraction));
    T::from_accum(accumulate(lut, qy, |r| {
        accumulate(lut, qx, |c| {
            boundary
                .fetch_2d(src, wy.index(r), wx.index(c))
                .map_or(<T::Accum as Accumulator>::ZERO, T::to_accum)
        })
    }))
}
