//! # vsl-core
//!
//! Core types for the vision support library.
//!
//! This crate provides the foundational types shared by every other
//! `vsl` crate:
//!
//! - [`Sample`], [`Accumulator`] - Element-type contract for interpolation
//! - [`Rgb8`], [`Rgba8`] - 8-bit multi-channel pixels
//! - [`Matrix`] - Row-major 2D sample array
//! - [`Point`] - Real-valued 2D position (`x` = column, `y` = row)
//! - [`Error`], [`Result`] - Container errors
//!
//! ## Crate Structure
//!
//! ```text
//! vsl-core (this crate)
//!    ^
//!    |
//!    +-- vsl-interp (kernel LUTs, boundary policies, interpolators)
//!    +-- vsl-ops (scaling, warping, local sampling, pyramids)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod matrix;
pub mod pixel;
pub mod sample;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use pixel::{Rgb8, Rgba8};
pub use sample::{Accumulator, Lanes, Sample};

/// Real-valued 2D position; `x` is the column and `y` the row.
pub type Point = glam::Vec2;

/// Prelude module for convenient imports.
///
/// ```
/// use vsl_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::pixel::{Rgb8, Rgba8};
    pub use crate::sample::{Accumulator, Lanes, Sample};
    pub use crate::Point;
}
