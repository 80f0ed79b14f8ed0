//! Matrix scaling and resampling.
//!
//! Scaling is corner-aligned: the first and last rows and columns of the
//! destination sample the first and last rows and columns of the source,
//! and the positions in between are evenly spaced.
//!
//! # Fast Path
//!
//! Each destination element is evaluated with
//! [`interpolate_unchecked`](FixedGridInterpolation::interpolate_unchecked)
//! when [`is_interior`](FixedGridInterpolation::is_interior) proves the
//! support window lies inside the source, and with the boundary-aware
//! [`interpolate`](FixedGridInterpolation::interpolate) otherwise. Both
//! give identical results where the fast path applies.
//!
//! # Example
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_interp::BilinearInterpolation;
//! use vsl_ops::scaling::scale;
//!
//! let src = Matrix::from_vec(2, 2, vec![0.0f32, 10.0, 20.0, 30.0]).unwrap();
//! let dst = scale(&BilinearInterpolation::default(), &src, 3, 3).unwrap();
//! assert_eq!(dst.row(1), &[10.0, 15.0, 20.0]);
//! ```

use crate::rows::fill_rows;
use crate::{OpsError, OpsResult};
use tracing::trace;
use vsl_core::{Matrix, Sample};
use vsl_interp::FixedGridInterpolation;

/// Evenly spaced source positions for `dst` destination samples spanning
/// `0..=src - 1`.
fn corner_aligned(src: usize, dst: usize) -> Vec<f32> {
    let last_src = src.saturating_sub(1);
    match dst {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..dst)
            .map(|i| ((i * last_src) as f64 / (dst - 1) as f64) as f32)
            .collect(),
    }
}

fn check_sizes<T>(src: &Matrix<T>, rows: usize, columns: usize) -> OpsResult<()> {
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("source matrix is empty".into()));
    }
    if rows == 0 || columns == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "destination size must be > 0, got {rows}x{columns}"
        )));
    }
    Ok(())
}

/// Scales `src` to `rows x columns`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if the source is empty or the
/// destination size is zero.
pub fn scale<T, I>(interp: &I, src: &Matrix<T>, rows: usize, columns: usize) -> OpsResult<Matrix<T>>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    check_sizes(src, rows, columns)?;
    trace!(
        src_rows = src.rows(),
        src_columns = src.columns(),
        rows,
        columns,
        range = interp.range_of_influence(),
        "scale"
    );
    let ys = corner_aligned(src.rows(), rows);
    let xs = corner_aligned(src.columns(), columns);
    resample(interp, src, &ys, &xs)
}

/// Scales `src` by independent row and column factors.
///
/// The destination has `round(rows * factor_y)` rows and
/// `round(columns * factor_x)` columns, at least one of each.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for non-positive or non-finite
/// factors, and [`OpsError::InvalidDimensions`] for an empty source.
///
/// # Example
///
/// ```rust
/// use vsl_core::Matrix;
/// use vsl_interp::GenericInterpolation;
/// use vsl_ops::scaling::scale_by;
///
/// let src = Matrix::filled(10, 8, 3u8);
/// let dst = scale_by(&GenericInterpolation::new(), &src, 0.5, 1.5).unwrap();
/// assert_eq!(dst.size(), (5, 12));
/// assert!(dst.as_slice().iter().all(|&v| v == 3));
/// ```
pub fn scale_by<T, I>(interp: &I, src: &Matrix<T>, factor_y: f32, factor_x: f32) -> OpsResult<Matrix<T>>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    for (name, f) in [("factor_y", factor_y), ("factor_x", factor_x)] {
        if !(f.is_finite() && f > 0.0) {
            return Err(OpsError::InvalidParameter(format!(
                "{name} must be finite and > 0, got {f}"
            )));
        }
    }
    let rows = ((src.rows() as f32 * factor_y).round() as usize).max(1);
    let columns = ((src.columns() as f32 * factor_x).round() as usize).max(1);
    scale(interp, src, rows, columns)
}

/// Samples `src` on the separable grid `ys x xs`.
///
/// Destination element `(i, j)` is `src` interpolated at `(ys[i], xs[j])`.
///
/// # Errors
///
/// Returns [`OpsError::Core`] if `ys.len() * xs.len()` overflows.
///
/// ```rust
/// use vsl_core::Matrix;
/// use vsl_interp::BilinearInterpolation;
/// use vsl_ops::scaling::resample;
///
/// let src = Matrix::from_fn(3, 3, |r, c| (r * 3 + c) as f32);
/// let dst = resample(&BilinearInterpolation::default(), &src, &[0.5], &[0.0, 1.5]).unwrap();
/// assert_eq!(dst.as_slice(), &[1.5, 3.0]);
/// ```
pub fn resample<T, I>(interp: &I, src: &Matrix<T>, ys: &[f32], xs: &[f32]) -> OpsResult<Matrix<T>>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    let cols: Vec<(f32, bool)> = xs
        .iter()
        .map(|&x| (x, interp.is_interior(x, src.columns())))
        .collect();
    let mut dst = Matrix::try_new(ys.len(), xs.len())?;
    fill_rows(&mut dst, |i, row| {
        let y = ys[i];
        let row_inside = interp.is_interior(y, src.rows());
        for (out, &(x, col_inside)) in row.iter_mut().zip(&cols) {
            *out = if row_inside && col_inside {
                interp.interpolate_unchecked(src, y, x)
            } else {
                interp.interpolate(src, y, x)
            };
        }
    });
    Ok(dst)
}
