//! Interpolation parameters.

use crate::boundary::BoundaryType;
use crate::kernel::{DEFAULT_SAMPLES_PER_INTERVAL, KernelType};

/// Configuration of a [`GenericInterpolation`](crate::GenericInterpolation).
///
/// # Example
///
/// ```rust
/// use vsl_interp::{BoundaryType, InterpolationParams, KernelType};
///
/// let params = InterpolationParams::new()
///     .with_kernel(KernelType::Bilinear)
///     .with_boundary(BoundaryType::Mirror);
/// assert_eq!(params.samples_per_interval, 256);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterpolationParams {
    /// Kernel family.
    pub kernel_type: KernelType,
    /// Table entries per unit interval; must be positive.
    pub samples_per_interval: usize,
    /// Caller-supplied table, read only for [`KernelType::Generic`].
    pub kernel_lut: Vec<f32>,
    /// Policy for samples outside the array.
    pub boundary_type: BoundaryType,
}

impl Default for InterpolationParams {
    fn default() -> Self {
        Self {
            kernel_type: KernelType::default(),
            samples_per_interval: DEFAULT_SAMPLES_PER_INTERVAL,
            kernel_lut: Vec::new(),
            boundary_type: BoundaryType::default(),
        }
    }
}

impl InterpolationParams {
    /// Default parameters: bicubic kernel, 256 samples per interval,
    /// [`Constant`](BoundaryType::Constant) boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a caller-supplied kernel table.
    pub fn generic(kernel_lut: Vec<f32>, samples_per_interval: usize) -> Self {
        Self {
            kernel_type: KernelType::Generic,
            samples_per_interval,
            kernel_lut,
            ..Self::default()
        }
    }

    /// Sets the kernel family.
    pub fn with_kernel(mut self, kernel_type: KernelType) -> Self {
        self.kernel_type = kernel_type;
        self
    }

    /// Sets the number of table entries per unit interval.
    pub fn with_samples_per_interval(mut self, samples_per_interval: usize) -> Self {
        self.samples_per_interval = samples_per_interval;
        self
    }

    /// Sets the boundary policy.
    pub fn with_boundary(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = boundary_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = InterpolationParams::default();
        assert_eq!(p.kernel_type, KernelType::Bicubic);
        assert_eq!(p.samples_per_interval, 256);
        assert!(p.kernel_lut.is_empty());
        assert_eq!(p.boundary_type, BoundaryType::Constant);
    }

    #[test]
    fn test_builders() {
        let p = InterpolationParams::generic(vec![0.0; 8], 4).with_boundary(BoundaryType::Periodic);
        assert_eq!(p.kernel_type, KernelType::Generic);
        assert_eq!(p.kernel_lut.len(), 8);
        assert_eq!(p.boundary_type, BoundaryType::Periodic);
        let p = p.with_kernel(KernelType::Bilinear).with_samples_per_interval(64);
        assert_eq!(p.samples_per_interval, 64);
    }
}
