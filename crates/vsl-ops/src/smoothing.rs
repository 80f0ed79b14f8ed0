//! Separable Gaussian smoothing.
//!
//! Used by [`ScaleSpacePyramid`](crate::ScaleSpacePyramid) to low-pass a
//! level before it is downsampled. Samples past the edges replicate the
//! nearest edge sample.
//!
//! # Example
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_ops::smoothing::{gaussian_blur, GaussianKernel};
//!
//! let kernel = GaussianKernel::new(5, 1.0).unwrap();
//! let src = Matrix::filled(6, 6, 40u8);
//! assert_eq!(gaussian_blur(&src, &kernel).unwrap(), src);
//! ```

use crate::rows::fill_rows;
use crate::{OpsError, OpsResult};
use tracing::trace;
use vsl_core::{Accumulator, Matrix, Sample};
use vsl_interp::{BoundaryType, Resolved};

/// Normalized 1D Gaussian taps, applied along rows and then columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    weights: Vec<f32>,
    variance: f32,
}

impl GaussianKernel {
    /// Creates a kernel of `size` taps with the given variance.
    ///
    /// Even sizes are rounded up to the next odd size.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] for a zero size or a variance
    /// that is not finite and positive.
    pub fn new(size: usize, variance: f32) -> OpsResult<Self> {
        if size == 0 {
            return Err(OpsError::InvalidParameter("kernel size must be > 0".into()));
        }
        if !(variance.is_finite() && variance > 0.0) {
            return Err(OpsError::InvalidParameter(format!(
                "variance must be finite and > 0, got {variance}"
            )));
        }
        let size = if size % 2 == 0 { size + 1 } else { size };
        let half = (size / 2) as i64;

        let mut weights: Vec<f32> = (-half..=half)
            .map(|x| (-((x * x) as f32) / (2.0 * variance)).exp())
            .collect();
        let sum: f32 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }
        Ok(Self { weights, variance })
    }

    /// Kernel matched to a downsampling `factor` in `(0, 1)`.
    ///
    /// The variance is `(1 / factor^2 - 1) / 2`; the size is the smallest
    /// odd width at which the tails have fallen to 5% of the peak, and at
    /// least 3.
    ///
    /// ```rust
    /// use vsl_ops::smoothing::GaussianKernel;
    ///
    /// let k = GaussianKernel::for_factor(0.5).unwrap();
    /// assert_eq!(k.variance(), 1.5);
    /// assert_eq!(k.size(), 7);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] unless `0 < factor < 1`.
    pub fn for_factor(factor: f32) -> OpsResult<Self> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(OpsError::InvalidParameter(format!(
                "factor must be in (0, 1), got {factor}"
            )));
        }
        let variance = 0.5 * (1.0 / (factor * factor) - 1.0);
        let reach = (-2.0 * variance * 0.05f32.ln()).sqrt().round() as usize;
        Self::new((1 + 2 * reach).max(3), variance)
    }

    /// Number of taps (always odd).
    #[inline]
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Taps on each side of the center.
    #[inline]
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// Variance the taps were sampled from.
    #[inline]
    pub fn variance(&self) -> f32 {
        self.variance
    }

    /// Normalized taps, centered.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

/// Smooths `src` with `kernel` along both axes.
///
/// # Errors
///
/// Returns [`OpsError::Core`] only if the intermediate buffer cannot be
/// sized.
pub fn gaussian_blur<T: Sample>(src: &Matrix<T>, kernel: &GaussianKernel) -> OpsResult<Matrix<T>> {
    if src.is_empty() {
        return Ok(src.clone());
    }
    let (rows, columns) = src.size();
    let radius = kernel.radius() as isize;
    let edge = BoundaryType::Constant;
    trace!(rows, columns, taps = kernel.size(), variance = kernel.variance, "gaussian_blur");

    let zero = <T::Accum as Accumulator>::ZERO;
    let mut horizontal = Matrix::try_filled(rows, columns, zero)?;
    fill_rows(&mut horizontal, |r, out| {
        let line = src.row(r);
        for (c, acc) in out.iter_mut().enumerate() {
            *acc = kernel.weights.iter().enumerate().fold(zero, |sum, (k, &w)| {
                match edge.fetch(line, c as isize + k as isize - radius) {
                    Some(v) => sum.add_weighted(v.to_accum(), w),
                    None => sum,
                }
            });
        }
    });

    let mut dst = Matrix::try_new(rows, columns)?;
    fill_rows(&mut dst, |r, out| {
        for (c, v) in out.iter_mut().enumerate() {
            let sum = kernel.weights.iter().enumerate().fold(zero, |sum, (k, &w)| {
                match edge.resolve(r as isize + k as isize - radius, rows) {
                    Resolved::Index(j) => sum.add_weighted(*horizontal.at(j, c), w),
                    Resolved::Zero | Resolved::Undefined => sum,
                }
            });
            *v = T::from_accum(sum);
        }
    });
    Ok(dst)
}
