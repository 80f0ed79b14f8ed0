//! Error types for resampling operations.

use thiserror::Error;

/// Error type for resampling operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Container error from `vsl-core`.
    #[error(transparent)]
    Core(#[from] vsl_core::Error),
}

/// Result type for resampling operations.
pub type OpsResult<T> = Result<T, OpsError>;
