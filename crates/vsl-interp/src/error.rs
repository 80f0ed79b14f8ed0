//! Interpolation error types.

use thiserror::Error;

/// Result type for interpolation configuration.
pub type InterpResult<T> = Result<T, InterpError>;

/// Errors raised while configuring an interpolator.
///
/// Evaluation never fails; these only come out of kernel construction and
/// name parsing. [`GenericInterpolation::set_params`](crate::GenericInterpolation::set_params)
/// turns them into a `false` return plus a bilinear fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpError {
    /// Generic kernel table has an unusable shape.
    #[error("invalid kernel LUT of {len} entries for {samples_per_interval} samples per interval: {reason}")]
    InvalidKernel {
        /// Table length supplied
        len: usize,
        /// Samples per unit interval requested
        samples_per_interval: usize,
        /// What is wrong with the shape
        reason: &'static str,
    },

    /// Samples per interval must be positive.
    #[error("samples per interval must be > 0, got {0}")]
    InvalidSamplesPerInterval(usize),

    /// Unrecognized kernel or boundary name.
    #[error("unknown {kind} name: {name}")]
    UnknownName {
        /// What was being parsed ("kernel type", "boundary type")
        kind: &'static str,
        /// The rejected input
        name: String,
    },
}
