//! Geometric transformations.
//!
//! Transforms are given as [`Affine2`] maps from source to destination
//! positions in `(x, y)` = `(column, row)` order. The destination is filled
//! by inverse mapping: each destination element samples the source at the
//! preimage of its position, so every output element is defined.
//!
//! # Example
//!
//! ```rust
//! use glam::{Affine2, Vec2};
//! use vsl_core::Matrix;
//! use vsl_interp::BilinearInterpolation;
//! use vsl_ops::transform::affine;
//!
//! let src = Matrix::from_fn(4, 4, |r, c| (r * 4 + c) as f32);
//! // shift content one column to the right
//! let shift = Affine2::from_translation(Vec2::new(1.0, 0.0));
//! let dst = affine(&BilinearInterpolation::default(), &src, shift, 4, 4).unwrap();
//! assert_eq!(dst.row(2), &[8.0, 8.0, 9.0, 10.0]);
//! ```

use crate::rows::fill_rows;
use crate::{OpsError, OpsResult};
use glam::{Affine2, Vec2};
use tracing::trace;
use vsl_core::{Matrix, Point, Sample};
use vsl_interp::FixedGridInterpolation;

/// Applies `transform` to `src`, producing a `rows x columns` matrix.
///
/// # Errors
///
/// - [`OpsError::InvalidDimensions`] for an empty source or destination
/// - [`OpsError::InvalidParameter`] if `transform` is not invertible
/// - [`OpsError::Core`] if `rows * columns` overflows
pub fn affine<T, I>(
    interp: &I,
    src: &Matrix<T>,
    transform: Affine2,
    rows: usize,
    columns: usize,
) -> OpsResult<Matrix<T>>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("source matrix is empty".into()));
    }
    if rows == 0 || columns == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "destination size must be > 0, got {rows}x{columns}"
        )));
    }
    let det = transform.matrix2.determinant();
    if det == 0.0 || !transform.is_finite() {
        return Err(OpsError::InvalidParameter(format!(
            "transform is not invertible (determinant {det})"
        )));
    }
    let inverse = transform.inverse();
    if !inverse.is_finite() {
        return Err(OpsError::InvalidParameter("transform inverse is not finite".into()));
    }

    trace!(
        src_rows = src.rows(),
        src_columns = src.columns(),
        rows,
        columns,
        "affine"
    );

    let (src_rows, src_columns) = src.size();
    let mut dst = Matrix::try_new(rows, columns)?;
    fill_rows(&mut dst, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let p = inverse.transform_point2(Point::new(x as f32, y as f32));
            *out = if interp.is_interior(p.y, src_rows) && interp.is_interior(p.x, src_columns) {
                interp.interpolate_unchecked(src, p.y, p.x)
            } else {
                interp.interpolate_at(src, p)
            };
        }
    });
    Ok(dst)
}

/// Rotates `src` by `angle` radians about its center.
///
/// Positive angles turn the `+x` (column) axis toward the `+y` (row) axis.
/// The destination is enlarged to hold the whole rotated matrix; elements
/// outside the source are synthesized by the interpolator's boundary policy.
///
/// ```rust
/// use std::f32::consts::FRAC_PI_2;
/// use vsl_core::Matrix;
/// use vsl_interp::NearestNeighborInterpolation;
/// use vsl_ops::transform::rotate;
///
/// let src = Matrix::from_fn(2, 3, |r, c| (r * 3 + c) as u8);
/// let dst = rotate(&NearestNeighborInterpolation::default(), &src, FRAC_PI_2).unwrap();
/// assert_eq!(dst.size(), (3, 2));
/// assert_eq!(dst.row(0), &[3, 0]);
/// ```
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] for an empty source and
/// [`OpsError::InvalidParameter`] for a non-finite angle.
pub fn rotate<T, I>(interp: &I, src: &Matrix<T>, angle: f32) -> OpsResult<Matrix<T>>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    if !angle.is_finite() {
        return Err(OpsError::InvalidParameter(format!("angle must be finite, got {angle}")));
    }
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("source matrix is empty".into()));
    }
    let src_center = Vec2::new(src.last_column() as f32, src.last_row() as f32) * 0.5;
    let rotation = Affine2::from_angle(angle);

    let corners = [
        Vec2::ZERO,
        Vec2::new(src.last_column() as f32, 0.0),
        Vec2::new(0.0, src.last_row() as f32),
        Vec2::new(src.last_column() as f32, src.last_row() as f32),
    ]
    .map(|c| rotation.transform_vector2(c - src_center));
    let lo = corners.iter().fold(Vec2::splat(f32::INFINITY), |a, &b| a.min(b));
    let hi = corners.iter().fold(Vec2::splat(f32::NEG_INFINITY), |a, &b| a.max(b));
    // extents are distances between outer sample centers; absorb rounding noise
    let extent = |span: f32| (span - 1e-3).ceil().max(0.0) as usize + 1;
    let columns = extent(hi.x - lo.x);
    let rows = extent(hi.y - lo.y);

    let dst_center = Vec2::new((columns - 1) as f32, (rows - 1) as f32) * 0.5;
    let transform =
        Affine2::from_translation(dst_center) * rotation * Affine2::from_translation(-src_center);
    affine(interp, src, transform, rows, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};
    use vsl_interp::{BilinearInterpolation, BoundaryType, GenericInterpolation, NearestNeighborInterpolation};

    #[test]
    fn test_identity_transform() {
        let src = Matrix::from_fn(5, 6, |r, c| (r * 6 + c) as f32);
        let dst = affine(&GenericInterpolation::new(), &src, Affine2::IDENTITY, 5, 6).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_scaling_transform_matches_scale() {
        let src = Matrix::from_fn(3, 3, |r, c| (r * 3 + c) as f32);
        let up = Affine2::from_scale(Vec2::splat(2.0));
        let dst = affine(&BilinearInterpolation::default(), &src, up, 5, 5).unwrap();
        let scaled = crate::scaling::scale(&BilinearInterpolation::default(), &src, 5, 5).unwrap();
        assert_eq!(dst, scaled);
    }

    #[test]
    fn test_zero_boundary_outside() {
        let src = Matrix::filled(3, 3, 9u8);
        let interp = NearestNeighborInterpolation::new(BoundaryType::Zero);
        let shift = Affine2::from_translation(Vec2::new(2.0, 0.0));
        let dst = affine(&interp, &src, shift, 3, 3).unwrap();
        assert_eq!(dst.row(0), &[0, 0, 9]);
    }

    #[test]
    fn test_singular_transform_rejected() {
        let src = Matrix::filled(2, 2, 1.0f32);
        let flat = Affine2::from_scale(Vec2::new(1.0, 0.0));
        assert!(matches!(
            affine(&GenericInterpolation::new(), &src, flat, 2, 2),
            Err(OpsError::InvalidParameter(_))
        ));
        assert!(affine(&GenericInterpolation::new(), &src, Affine2::IDENTITY, 0, 2).is_err());
    }

    #[test]
    fn test_oversized_destination_rejected() {
        let src = Matrix::filled(2, 2, 1.0f32);
        let huge = usize::MAX / 2;
        assert!(matches!(
            affine(&GenericInterpolation::new(), &src, Affine2::IDENTITY, huge, huge),
            Err(OpsError::Core(vsl_core::Error::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_rotate_half_turn() {
        let src = Matrix::from_fn(3, 4, |r, c| (r * 4 + c) as i32);
        let dst = rotate(&NearestNeighborInterpolation::default(), &src, PI).unwrap();
        assert_eq!(dst.size(), (3, 4));
        assert_eq!(*dst.at(0, 0), 11);
        assert_eq!(*dst.at(2, 3), 0);
        assert_eq!(*dst.at(1, 1), 6);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let src = Matrix::from_fn(4, 2, |r, c| (r * 2 + c) as f32);
        let dst = rotate(&GenericInterpolation::new(), &src, 0.0).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_rotate_quarter_turn_shape() {
        let src = Matrix::filled(4, 7, 1.0f32);
        let dst = rotate(&BilinearInterpolation::default(), &src, -FRAC_PI_2).unwrap();
        assert_eq!(dst.size(), (7, 4));
        assert!(rotate(&BilinearInterpolation::default(), &src, f32::NAN).is_err());
    }
}
