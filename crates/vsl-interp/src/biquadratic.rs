//! Biquadratic interpolation.
//!
//! Fits a parabola through the node nearest the position and its two
//! neighbors, per axis. With `f` the offset from that node in `(-0.5, 0.5]`
//! the three samples are weighted by
//!
//! ```text
//! w0 = f (f - 1) / 2    w1 = 1 - f^2    w2 = f (f + 1) / 2
//! ```
//!
//! so quadratic data is reproduced exactly and nodes are returned unchanged.

use crate::boundary::BoundaryType;
use crate::grid::FixedGridInterpolation;
use crate::window::SupportWindow;
use vsl_core::{Accumulator, Matrix, Sample};

/// Quadratic fit through the three samples around the nearest node.
///
/// ```rust
/// use vsl_interp::{BiquadraticInterpolation, FixedGridInterpolation};
///
/// let interp = BiquadraticInterpolation::default();
/// let squares = [0.0f32, 1.0, 4.0, 9.0, 16.0];
/// assert_eq!(interp.apply(&squares, 2.5), 6.25);
/// assert_eq!(interp.range_of_influence(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BiquadraticInterpolation {
    boundary: BoundaryType,
}

impl BiquadraticInterpolation {
    /// Biquadratic interpolator with the given boundary policy.
    pub fn new(boundary: BoundaryType) -> Self {
        Self { boundary }
    }
}

/// Three-sample window centered on the node nearest a coordinate.
#[derive(Debug, Clone, Copy)]
struct Span {
    anchor: isize,
    offset: f32,
}

impl Span {
    #[inline]
    fn locate(coord: f32) -> Self {
        let w = SupportWindow::locate(coord, 2);
        if w.fraction <= 0.5 {
            Self {
                anchor: w.anchor.saturating_sub(1),
                offset: w.fraction,
            }
        } else {
            Self {
                anchor: w.anchor,
                offset: w.fraction - 1.0,
            }
        }
    }

    #[inline]
    fn fits(&self, size: usize) -> bool {
        self.anchor >= 0 && (self.anchor as usize).saturating_add(3) <= size
    }

    #[inline]
    fn index(&self, i: usize) -> isize {
        self.anchor.saturating_add(i as isize)
    }
}

#[inline]
fn parabola<A: Accumulator>(a: A, b: A, c: A, f: f32) -> A {
    A::ZERO
        .add_weighted(a, 0.5 * f * (f - 1.0))
        .add_weighted(b, 1.0 - f * f)
        .add_weighted(c, 0.5 * f * (f + 1.0))
}

impl FixedGridInterpolation for BiquadraticInterpolation {
    #[inline]
    fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    fn set_boundary_type(&mut self, boundary: BoundaryType) {
        self.boundary = boundary;
    }

    #[inline]
    fn range_of_influence(&self) -> usize {
        2
    }

    fn apply<T: Sample>(&self, src: &[T], x: f32) -> T {
        let s = Span::locate(x);
        if s.fits(src.len()) {
            return self.apply_unchecked(src, x);
        }
        if !self.boundary.extends(src.len()) {
            return T::zero();
        }
        let at = |i| {
            self.boundary
                .fetch(src, s.index(i))
                .map_or(<T::Accum as Accumulator>::ZERO, T::to_accum)
        };
        T::from_accum(parabola(at(0), at(1), at(2), s.offset))
    }

    #[inline]
    fn apply_unchecked<T: Sample>(&self, src: &[T], x: f32) -> T {
        let s = Span::locate(x);
        let w = &src[s.anchor as usize..][..3];
        T::from_accum(parabola(w[0].to_accum(), w[1].to_accum(), w[2].to_accum(), s.offset))
    }

    fn interpolate<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        let sy = Span::locate(row);
        let sx = Span::locate(col);
        if sy.fits(src.rows()) && sx.fits(src.columns()) {
            return self.interpolate_unchecked(src, row, col);
        }
        if !(self.boundary.extends(src.rows()) && self.boundary.extends(src.columns())) {
            return T::zero();
        }
        let line = |r| {
            let at = |c| {
                self.boundary
                    .fetch_2d(src, sy.index(r), sx.index(c))
                    .map_or(<T::Accum as Accumulator>::ZERO, T::to_accum)
            };
            parabola(at(0), at(1), at(2), sx.offset)
        };
        T::from_accum(parabola(line(0), line(1), line(2), sy.offset))
    }

    #[inline]
    fn interpolate_unchecked<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        let sy = Span::locate(row);
        let sx = Span::locate(col);
        let (r, c) = (sy.anchor as usize, sx.anchor as usize);
        let line = |r: usize| {
            let w = &src.row(r)[c..c + 3];
            parabola(w[0].to_accum(), w[1].to_accum(), w[2].to_accum(), sx.offset)
        };
        T::from_accum(parabola(line(r), line(r + 1), line(r + 2), sy.offset))
    }
}
