//! # vsl-ops
//!
//! Resampling operations built on fixed-grid interpolation.
//!
//! Every operation is generic over the element type and over the
//! [`FixedGridInterpolation`](vsl_interp::FixedGridInterpolation)
//! implementation, so the same code scales with nearest-neighbor,
//! bilinear, bicubic or a caller-supplied kernel.
//!
//! # Modules
//!
//! - [`scaling`] - Corner-aligned scaling and separable resampling
//! - [`transform`] - Affine warps and rotation
//! - [`sampling`] - Rotated patches and scattered positions
//! - [`pyramid`] - Scale-space pyramid level access
//! - [`smoothing`] - Separable Gaussian smoothing
//! - [`expansion`] - Boundary expansion (padding)
//!
//! # Example
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_interp::prelude::*;
//! use vsl_ops::{expansion, scaling};
//!
//! let src = Matrix::from_fn(8, 8, |r, c| (r * 8 + c) as f32);
//! let bicubic = GenericInterpolation::with_boundary(BoundaryType::Mirror);
//!
//! let half = scaling::scale_by(&bicubic, &src, 0.5, 0.5).unwrap();
//! assert_eq!(half.size(), (4, 4));
//!
//! let padded = expansion::expand(&src, 2, BoundaryType::Mirror).unwrap();
//! assert_eq!(padded.size(), (12, 12));
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - fill output rows concurrently with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod rows;
pub mod expansion;
pub mod pyramid;
pub mod sampling;
pub mod scaling;
pub mod smoothing;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use pyramid::{ScaleSpacePyramid, Smoothing};
