//! Sampled interpolation kernels.
//!
//! A [`KernelLut`] stores a symmetric interpolation kernel that spans `N`
//! unit intervals (`N` even) sampled `M` times per interval, so the table
//! holds `N * M` weights.
//!
//! # Table Layout
//!
//! Entry `j` holds the kernel evaluated at
//!
//! ```text
//! x(j) = (j - (N/2) * M) / M        j = 0 .. N*M
//! ```
//!
//! i.e. the table starts at `x = -N/2` and its center entry `(N/2) * M` is
//! `h(0)`. The unit interval `[0, 1)` of the fractional offset therefore
//! lies between table positions `(N/2 - 1) * M` and `(N/2) * M` once the
//! table is viewed as `N` blocks of `M` samples. Generic kernels supplied by
//! the caller must use this layout. `h(N/2)` is not stored and is taken to
//! be zero.
//!
//! # Weight Lookup
//!
//! For support sample `i` (`0` is the leftmost of the window) and
//! fractional offset `f` in `[0, 1)`, the weight is
//! `h(i - (N/2 - 1) - f)`, read at table entry `(i + 1) * M - q` where
//! `q = floor(f * M)` is the quantized offset.
//!
//! # Example
//!
//! ```rust
//! use vsl_interp::KernelLut;
//!
//! let lut = KernelLut::bilinear(256).unwrap();
//! assert_eq!(lut.intervals(), 2);
//! assert_eq!(lut.weight(0, 0.5), 0.5);
//! assert_eq!(lut.weight(1, 0.5), 0.5);
//! assert_eq!(lut.weight(0, 0.0), 1.0);
//! ```

use crate::{InterpError, InterpResult};
use std::fmt;
use std::str::FromStr;

/// Default number of table entries per unit interval.
pub const DEFAULT_SAMPLES_PER_INTERVAL: usize = 256;

/// Kernel family used to build a [`KernelLut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KernelType {
    /// Triangular kernel over two intervals.
    Bilinear,
    /// Piecewise cubic kernel over four intervals.
    #[default]
    Bicubic,
    /// Caller-supplied table.
    Generic,
}

impl KernelType {
    /// All kernel families, in declaration order.
    pub const ALL: [KernelType; 3] = [KernelType::Bilinear, KernelType::Bicubic, KernelType::Generic];

    /// Canonical name of the kernel family.
    pub const fn name(self) -> &'static str {
        match self {
            KernelType::Bilinear => "BilinearKernel",
            KernelType::Bicubic => "BicubicKernel",
            KernelType::Generic => "GenericKernel",
        }
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelType {
    type Err = InterpError;

    /// Accepts `"Bilinear"`, `"BilinearKernel"` and so on, ignoring ASCII case.
    fn from_str(s: &str) -> InterpResult<Self> {
        let s = s.trim();
        KernelType::ALL
            .into_iter()
            .find(|k| {
                let name = k.name();
                name.eq_ignore_ascii_case(s)
                    || name
                        .strip_suffix("Kernel")
                        .is_some_and(|short| short.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| InterpError::UnknownName {
                kind: "kernel type",
                name: s.to_string(),
            })
    }
}

/// Triangular kernel: `h(x) = 1 - |x|` on `[-1, 1]`.
#[inline]
fn bilinear_weight(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 1.0 { 1.0 - ax } else { 0.0 }
}

/// Cubic kernel with `h(0) = 1`, `h(1) = h(2) = 0`.
#[inline]
fn bicubic_weight(x: f32) -> f32 {
    let x = x.abs();
    if x <= 1.0 {
        1.0 + x * x * (x - 2.0)
    } else if x <= 2.0 {
        4.0 + x * (x * (5.0 - x) - 8.0)
    } else {
        0.0
    }
}

fn check_samples_per_interval(samples_per_interval: usize) -> InterpResult<()> {
    if samples_per_interval == 0 {
        return Err(InterpError::InvalidSamplesPerInterval(samples_per_interval));
    }
    Ok(())
}

/// Immutable sampled kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelLut {
    table: Vec<f32>,
    intervals: usize,
    samples_per_interval: usize,
    kernel_type: KernelType,
}

impl KernelLut {
    /// Builds the table for `kernel_type`.
    ///
    /// `generic` is only read for [`KernelType::Generic`].
    ///
    /// # Errors
    ///
    /// - [`InterpError::InvalidSamplesPerInterval`] if `samples_per_interval == 0`
    /// - [`InterpError::InvalidKernel`] if a generic table is not `N * M`
    ///   entries long with `N` even and at least 2
    pub fn build(
        kernel_type: KernelType,
        samples_per_interval: usize,
        generic: &[f32],
    ) -> InterpResult<Self> {
        match kernel_type {
            KernelType::Bilinear => Self::bilinear(samples_per_interval),
            KernelType::Bicubic => Self::bicubic(samples_per_interval),
            KernelType::Generic => Self::generic(generic, samples_per_interval),
        }
    }

    /// Triangular kernel, `N = 2`.
    pub fn bilinear(samples_per_interval: usize) -> InterpResult<Self> {
        check_samples_per_interval(samples_per_interval)?;
        Ok(Self::sampled(KernelType::Bilinear, 2, samples_per_interval, bilinear_weight))
    }

    /// Piecewise cubic kernel, `N = 4`.
    ///
    /// ```rust
    /// use vsl_interp::KernelLut;
    ///
    /// let lut = KernelLut::bicubic(256).unwrap();
    /// assert_eq!(lut.range_of_influence(), 2);
    /// // exact at nodes: only the sample under the coordinate contributes
    /// let w: Vec<f32> = (0..4).map(|i| lut.weight(i, 0.0)).collect();
    /// assert_eq!(w, vec![0.0, 1.0, 0.0, 0.0]);
    /// ```
    pub fn bicubic(samples_per_interval: usize) -> InterpResult<Self> {
        check_samples_per_interval(samples_per_interval)?;
        Ok(Self::sampled(KernelType::Bicubic, 4, samples_per_interval, bicubic_weight))
    }

    /// Bilinear table used when a configuration is rejected.
    ///
    /// Never fails: a zero sample count is replaced by
    /// [`DEFAULT_SAMPLES_PER_INTERVAL`].
    pub fn fallback(samples_per_interval: usize) -> Self {
        let m = if samples_per_interval == 0 {
            DEFAULT_SAMPLES_PER_INTERVAL
        } else {
            samples_per_interval
        };
        Self::sampled(KernelType::Bilinear, 2, m, bilinear_weight)
    }

    /// Wraps a caller-supplied table laid out as described in the
    /// [module documentation](self).
    pub fn generic(table: &[f32], samples_per_interval: usize) -> InterpResult<Self> {
        check_samples_per_interval(samples_per_interval)?;
        let invalid = |reason| InterpError::InvalidKernel {
            len: table.len(),
            samples_per_interval,
            reason,
        };
        if table.len() % samples_per_interval != 0 {
            return Err(invalid("length is not a multiple of the samples per interval"));
        }
        let intervals = table.len() / samples_per_interval;
        if intervals < 2 {
            return Err(invalid("kernel must span at least two intervals"));
        }
        if intervals % 2 != 0 {
            return Err(invalid("kernel must span an even number of intervals"));
        }
        Ok(Self {
            table: table.to_vec(),
            intervals,
            samples_per_interval,
            kernel_type: KernelType::Generic,
        })
    }

    fn sampled(
        kernel_type: KernelType,
        intervals: usize,
        samples_per_interval: usize,
        h: fn(f32) -> f32,
    ) -> Self {
        let center = (intervals / 2 * samples_per_interval) as isize;
        let m = samples_per_interval as f32;
        let table = (0..intervals * samples_per_interval)
            .map(|j| h((j as isize - center) as f32 / m))
            .collect();
        Self {
            table,
            intervals,
            samples_per_interval,
            kernel_type,
        }
    }

    /// Kernel family this table was built from.
    #[inline]
    pub fn kernel_type(&self) -> KernelType {
        self.kernel_type
    }

    /// Number of unit intervals `N` the kernel spans (the support width).
    #[inline]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Table entries per unit interval `M`.
    #[inline]
    pub fn samples_per_interval(&self) -> usize {
        self.samples_per_interval
    }

    /// Half-width of the support window, `N / 2`.
    #[inline]
    pub fn range_of_influence(&self) -> usize {
        self.intervals / 2
    }

    /// Offset from `floor(coordinate)` back to the first support sample, `N/2 - 1`.
    #[inline]
    pub fn first_sample_offset(&self) -> usize {
        self.intervals / 2 - 1
    }

    /// The raw table, `N * M` entries.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.table
    }

    /// Quantizes a fractional offset in `[0, 1)` to a table step `q` in `[0, M)`.
    #[inline]
    pub fn quantize(&self, fraction: f32) -> usize {
        // saturating float->int cast maps negatives and NaN to 0
        ((fraction * self.samples_per_interval as f32) as usize).min(self.samples_per_interval - 1)
    }

    /// Weight of support sample `i` at quantized offset `q`.
    #[inline]
    pub fn weight_at(&self, i: usize, q: usize) -> f32 {
        self.table
            .get((i + 1) * self.samples_per_interval - q)
            .copied()
            .unwrap_or(0.0)
    }

    /// Weight of support sample `i` at fractional offset `fraction`.
    #[inline]
    pub fn weight(&self, i: usize, fraction: f32) -> f32 {
        self.weight_at(i, self.quantize(fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bilinear_table() {
        let lut = KernelLut::bilinear(4).unwrap();
        assert_eq!(lut.weights(), &[0.0, 0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25]);
        assert_eq!(lut.range_of_influence(), 1);
        assert_eq!(lut.first_sample_offset(), 0);
    }

    #[test]
    fn test_bilinear_weights_are_linear() {
        let lut = KernelLut::bilinear(256).unwrap();
        for q in 0..256 {
            let f = q as f32 / 256.0;
            assert_abs_diff_eq!(lut.weight(0, f), 1.0 - f, epsilon = 1e-6);
            assert_abs_diff_eq!(lut.weight(1, f), f, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_bicubic_endpoints() {
        assert_eq!(bicubic_weight(0.0), 1.0);
        assert_eq!(bicubic_weight(1.0), 0.0);
        assert_eq!(bicubic_weight(2.0), 0.0);
        assert_eq!(bicubic_weight(-1.0), 0.0);
        assert_eq!(bicubic_weight(2.5), 0.0);
        assert_abs_diff_eq!(bicubic_weight(0.5), 0.625);
        assert_abs_diff_eq!(bicubic_weight(1.5), -0.125);
    }

    #[test]
    fn test_bicubic_partition_of_unity() {
        let lut = KernelLut::bicubic(256).unwrap();
        for q in 0..256 {
            let sum: f32 = (0..4).map(|i| lut.weight_at(i, q)).sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_bicubic_symmetry() {
        let lut = KernelLut::bicubic(64).unwrap();
        let t = lut.weights();
        let center = 2 * 64;
        for i in 1..center {
            assert_eq!(t[center - i], t[center + i]);
        }
        assert_eq!(t[center], 1.0);
    }

    #[test]
    fn test_generic_accepts_even_intervals() {
        let bilinear = KernelLut::bilinear(8).unwrap();
        let lut = KernelLut::generic(bilinear.weights(), 8).unwrap();
        assert_eq!(lut.kernel_type(), KernelType::Generic);
        assert_eq!(lut.intervals(), 2);
        assert_eq!(lut.weight(1, 0.25), bilinear.weight(1, 0.25));

        let wide = KernelLut::generic(&[0.0; 6 * 16], 16).unwrap();
        assert_eq!(wide.range_of_influence(), 3);
    }

    #[test]
    fn test_generic_rejects_bad_shapes() {
        assert!(matches!(
            KernelLut::generic(&[0.0; 10], 4),
            Err(InterpError::InvalidKernel { len: 10, .. })
        ));
        assert!(KernelLut::generic(&[0.0; 12], 4).is_err()); // N = 3
        assert!(KernelLut::generic(&[0.0; 4], 4).is_err()); // N = 1
        assert!(KernelLut::generic(&[], 4).is_err());
        assert_eq!(
            KernelLut::generic(&[0.0; 8], 0),
            Err(InterpError::InvalidSamplesPerInterval(0))
        );
    }

    #[test]
    fn test_fallback_is_bilinear() {
        let lut = KernelLut::fallback(0);
        assert_eq!(lut.kernel_type(), KernelType::Bilinear);
        assert_eq!(lut.samples_per_interval(), DEFAULT_SAMPLES_PER_INTERVAL);
        assert_eq!(KernelLut::fallback(16), KernelLut::bilinear(16).unwrap());
        assert!(KernelLut::bicubic(0).is_err());
    }

    #[test]
    fn test_quantize_clamps() {
        let lut = KernelLut::bilinear(256).unwrap();
        assert_eq!(lut.quantize(0.0), 0);
        assert_eq!(lut.quantize(0.5), 128);
        assert_eq!(lut.quantize(1.0), 255);
        assert_eq!(lut.quantize(-0.1), 0);
        assert_eq!(lut.quantize(f32::NAN), 0);
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!("bicubic".parse::<KernelType>().unwrap(), KernelType::Bicubic);
        assert_eq!("GenericKernel".parse::<KernelType>().unwrap(), KernelType::Generic);
        assert_eq!(KernelType::Bilinear.to_string(), "BilinearKernel");
        assert!("lanczos".parse::<KernelType>().is_err());
    }
}
