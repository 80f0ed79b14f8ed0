//! LUT-driven interpolation with pluggable kernels.
//!
//! [`GenericInterpolation`] evaluates any even-width symmetric kernel stored
//! in a [`KernelLut`]. Configuration builds the table once; evaluation only
//! reads it, so a configured instance can be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use vsl_interp::{BoundaryType, FixedGridInterpolation, GenericInterpolation, KernelType};
//! use vsl_interp::InterpolationParams;
//!
//! let params = InterpolationParams::new()
//!     .with_kernel(KernelType::Bilinear)
//!     .with_boundary(BoundaryType::Constant);
//! let interp = GenericInterpolation::with_params(params);
//!
//! let v = [10.0f32, 20.0, 30.0, 40.0];
//! assert_eq!(interp.apply(&v, -0.5), 10.0);
//! assert_eq!(interp.apply(&v, 1.5), 25.0);
//! assert_eq!(interp.apply(&v, 4.5), 40.0);
//! ```

use crate::boundary::BoundaryType;
use crate::compute;
use crate::grid::FixedGridInterpolation;
use crate::kernel::KernelLut;
use crate::params::InterpolationParams;
use tracing::{debug, warn};
use vsl_core::{Matrix, Sample};

/// Interpolator driven by a sampled kernel table.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericInterpolation {
    params: InterpolationParams,
    lut: KernelLut,
    valid: bool,
}

impl Default for GenericInterpolation {
    fn default() -> Self {
        Self::new()
    }
}

impl GenericInterpolation {
    /// Bicubic interpolator with [`Constant`](BoundaryType::Constant) boundary.
    pub fn new() -> Self {
        Self::with_params(InterpolationParams::default())
    }

    /// Interpolator configured from `params`.
    ///
    /// An unusable generic table falls back to the bilinear kernel; check
    /// [`is_valid`](Self::is_valid) to detect that.
    pub fn with_params(params: InterpolationParams) -> Self {
        let (lut, valid) = Self::build_lut(&params);
        Self { params, lut, valid }
    }

    /// Default kernel with the given boundary policy.
    pub fn with_boundary(boundary: BoundaryType) -> Self {
        Self::with_params(InterpolationParams::default().with_boundary(boundary))
    }

    fn build_lut(params: &InterpolationParams) -> (KernelLut, bool) {
        match KernelLut::build(params.kernel_type, params.samples_per_interval, &params.kernel_lut) {
            Ok(lut) => {
                debug!(
                    kernel = %params.kernel_type,
                    intervals = lut.intervals(),
                    samples_per_interval = lut.samples_per_interval(),
                    boundary = %params.boundary_type,
                    "Configured interpolation kernel"
                );
                (lut, true)
            }
            Err(e) => {
                warn!(
                    kernel = %params.kernel_type,
                    error = %e,
                    "Rejected interpolation kernel, falling back to bilinear"
                );
                (KernelLut::fallback(params.samples_per_interval), false)
            }
        }
    }

    /// Reconfigures the interpolator and rebuilds the kernel table.
    ///
    /// Returns `false` if the kernel was rejected, in which case the
    /// bilinear kernel is used instead. The parameters are stored either way.
    ///
    /// ```rust
    /// use vsl_interp::{FixedGridInterpolation, GenericInterpolation, InterpolationParams};
    ///
    /// let mut interp = GenericInterpolation::new();
    /// // 10 entries are not a whole number of 4-sample intervals
    /// assert!(!interp.set_params(InterpolationParams::generic(vec![0.0; 10], 4)));
    /// assert_eq!(interp.range_of_influence(), 1);
    /// assert!(!interp.is_valid());
    /// ```
    pub fn set_params(&mut self, params: InterpolationParams) -> bool {
        let (lut, valid) = Self::build_lut(&params);
        self.params = params;
        self.lut = lut;
        self.valid = valid;
        valid
    }

    /// Current parameters.
    #[inline]
    pub fn params(&self) -> &InterpolationParams {
        &self.params
    }

    /// Kernel table in use.
    #[inline]
    pub fn lut(&self) -> &KernelLut {
        &self.lut
    }

    /// `false` if the configured kernel was rejected and replaced by the bilinear one.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Weighted sum over a gathered window of [`intervals`](KernelLut::intervals)
    /// samples at fractional offset `fx`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is shorter than the kernel support.
    #[inline]
    pub fn compute<T: Sample>(&self, fx: f32, window: &[T]) -> T {
        compute::compute_1d(&self.lut, fx, window)
    }

    /// Separable weighted sum over a gathered square window, `window[row][col]`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is smaller than the kernel support in either axis.
    #[inline]
    pub fn compute_2d<T: Sample>(&self, fy: f32, fx: f32, window: &[&[T]]) -> T {
        compute::compute_2d(&self.lut, fy, fx, window)
    }
}

impl FixedGridInterpolation for GenericInterpolation {
    #[inline]
    fn boundary_type(&self) -> BoundaryType {
        self.params.boundary_type
    }

    fn set_boundary_type(&mut self, boundary: BoundaryType) {
        self.params.boundary_type = boundary;
    }

    #[inline]
    fn range_of_influence(&self) -> usize {
        self.lut.range_of_influence()
    }

    #[inline]
    fn apply<T: Sample>(&self, src: &[T], x: f32) -> T {
        compute::eval_1d(&self.lut, self.params.boundary_type, src, x)
    }

    #[inline]
    fn apply_unchecked<T: Sample>(&self, src: &[T], x: f32) -> T {
        compute::eval_1d_unchecked(&self.lut, src, x)
    }

    #[inline]
    fn interpolate<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        compute::eval_2d(&self.lut, self.params.boundary_type, src, row, col)
    }

    #[inline]
    fn interpolate_unchecked<T: Sample>(&self, src: &Matrix<T>, row: f32, col: f32) -> T {
        compute::eval_2d_unchecked(&self.lut, src, row, col)
    }
}
