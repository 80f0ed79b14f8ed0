//! Boundary expansion.
//!
//! Surrounds a matrix with a border synthesized by a [`BoundaryType`], so
//! that later stages can index past the original edges without any
//! boundary handling of their own.
//!
//! # Example
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_interp::BoundaryType;
//! use vsl_ops::expansion::expand;
//!
//! let src = Matrix::from_vec(1, 3, vec![1u8, 2, 3]).unwrap();
//! let dst = expand(&src, 2, BoundaryType::Periodic).unwrap();
//! assert_eq!(dst.size(), (5, 7));
//! assert_eq!(dst.row(2), &[2, 3, 1, 2, 3, 1, 2]);
//! ```

use crate::rows::fill_rows;
use crate::{OpsError, OpsResult};
use tracing::trace;
use vsl_core::{Matrix, Sample};
use vsl_interp::BoundaryType;

/// Expands `src` by `border` elements on every side.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if a side overflows and
/// [`OpsError::Core`] if the element count does.
pub fn expand<T: Sample>(src: &Matrix<T>, border: usize, boundary: BoundaryType) -> OpsResult<Matrix<T>> {
    expand_sides(src, border, border, border, border, boundary)
}

/// Expands `src` by independent amounts per side.
///
/// The original elements land at offset `(top, left)`. Border elements take
/// the value `boundary` assigns to the corresponding out-of-range index;
/// where the policy leaves it undefined ([`NoBoundary`](BoundaryType::NoBoundary),
/// or any policy on an empty source) the border is zero.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if a side overflows and
/// [`OpsError::Core`] if the element count does.
pub fn expand_sides<T: Sample>(
    src: &Matrix<T>,
    top: usize,
    right: usize,
    bottom: usize,
    left: usize,
    boundary: BoundaryType,
) -> OpsResult<Matrix<T>> {
    let overflow = || OpsError::InvalidDimensions("expanded size overflows".into());
    let rows = src
        .rows()
        .checked_add(top)
        .and_then(|v| v.checked_add(bottom))
        .ok_or_else(overflow)?;
    let columns = src
        .columns()
        .checked_add(left)
        .and_then(|v| v.checked_add(right))
        .ok_or_else(overflow)?;
    let top = isize::try_from(top).map_err(|_| overflow())?;
    let left = isize::try_from(left).map_err(|_| overflow())?;

    trace!(
        src_rows = src.rows(),
        src_columns = src.columns(),
        rows,
        columns,
        %boundary,
        "expand"
    );

    let mut dst = Matrix::try_new(rows, columns)?;
    fill_rows(&mut dst, |r, row| {
        let sr = r as isize - top;
        for (c, out) in row.iter_mut().enumerate() {
            *out = boundary
                .fetch_2d(src, sr, c as isize - left)
                .unwrap_or_else(T::zero);
        }
    });
    Ok(dst)
}
