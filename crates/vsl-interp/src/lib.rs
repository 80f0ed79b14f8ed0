//! # vsl-interp
//!
//! Fixed-grid interpolation of 1D and 2D sample arrays.
//!
//! The engine evaluates sampled signals at real-valued coordinates by a
//! separable weighted sum over a kernel's support window, reading weights
//! from a precomputed lookup table and synthesizing samples outside the
//! array with a boundary policy.
//!
//! # Modules
//!
//! - [`boundary`] - Boundary extension policies
//! - [`kernel`] - Kernel families and sampled weight tables
//! - [`window`] - Support window location
//! - [`compute`] - Separable weighted-sum evaluation
//! - [`grid`] - The [`FixedGridInterpolation`] interface and bound handles
//!
//! # Interpolators
//!
//! | Type | Range of influence | Notes |
//! |------|--------------------|-------|
//! | [`NearestNeighborInterpolation`] | 0 | Rounds to the closest node |
//! | [`BilinearInterpolation`] | 1 | Closed-form weights |
//! | [`BiquadraticInterpolation`] | 2 | Parabola through the nearest node and its neighbors |
//! | [`GenericInterpolation`] | `N / 2` | Bilinear, bicubic or caller-supplied table |
//!
//! # Example
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_interp::prelude::*;
//!
//! let m = Matrix::from_fn(4, 4, |r, c| (r * 10 + c) as f32);
//! let bicubic = GenericInterpolation::new();
//!
//! let checked = bicubic.interpolate(&m, 1.5, 1.5);
//! let fast = bicubic.interpolate_unchecked(&m, 1.5, 1.5);
//! assert_eq!(checked, fast);
//! ```
//!
//! # Configuration Errors
//!
//! Evaluation never fails. Building a [`KernelLut`] reports an
//! [`InterpError`]; [`GenericInterpolation::set_params`] logs it with
//! `tracing`, substitutes the bilinear kernel and returns `false`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod bilinear;
pub mod biquadratic;
pub mod boundary;
pub mod compute;
pub mod generic;
pub mod grid;
pub mod kernel;
pub mod nearest;
pub mod params;
pub mod window;

pub use bilinear::BilinearInterpolation;
pub use biquadratic::BiquadraticInterpolation;
pub use boundary::{BoundaryType, Resolved};
pub use error::{InterpError, InterpResult};
pub use generic::GenericInterpolation;
pub use grid::{BoundMatrix, BoundVector, FixedGridInterpolation};
pub use kernel::{DEFAULT_SAMPLES_PER_INTERVAL, KernelLut, KernelType};
pub use nearest::NearestNeighborInterpolation;
pub use params::InterpolationParams;
pub use window::SupportWindow;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        BilinearInterpolation, BiquadraticInterpolation, BoundaryType, FixedGridInterpolation,
        GenericInterpolation, InterpolationParams, KernelType, NearestNeighborInterpolation,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;
    use vsl_core::{Matrix, Rgba8};

    #[test]
    fn test_half_precision_elements() {
        let interp = GenericInterpolation::with_params(
            InterpolationParams::new().with_kernel(KernelType::Bilinear),
        );
        let v = [f16::from_f32(1.0), f16::from_f32(3.0)];
        assert_eq!(interp.apply(&v, 0.5), f16::from_f32(2.0));
    }

    #[test]
    fn test_rgba_midpoint() {
        let interp = GenericInterpolation::with_params(
            InterpolationParams::new().with_kernel(KernelType::Bilinear),
        );
        let m = Matrix::from_vec(
            1,
            2,
            vec![Rgba8::new(0, 100, 200, 255), Rgba8::new(10, 101, 255, 255)],
        )
        .unwrap();
        assert_eq!(interp.interpolate(&m, 0.0, 0.5), Rgba8::new(5, 101, 228, 255));
    }

    #[test]
    fn test_interpolators_are_interchangeable() {
        fn center<I: FixedGridInterpolation>(interp: &I) -> f32 {
            let m = Matrix::from_fn(5, 5, |r, c| (r + c) as f32);
            interp.interpolate(&m, 2.0, 2.0)
        }
        assert_eq!(center(&NearestNeighborInterpolation::default()), 4.0);
        assert_eq!(center(&BilinearInterpolation::default()), 4.0);
        assert_eq!(center(&BiquadraticInterpolation::default()), 4.0);
        assert_eq!(center(&GenericInterpolation::new()), 4.0);
    }
}
