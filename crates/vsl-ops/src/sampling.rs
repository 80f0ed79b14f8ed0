//! Local sampling at scattered and rotated positions.
//!
//! These are the building blocks of local descriptors: a square patch taken
//! on a grid that is rotated to a keypoint orientation, and plain lists of
//! scattered positions.

use crate::rows::fill_rows;
use crate::{OpsError, OpsResult};
use glam::Mat2;
use tracing::trace;
use vsl_core::{Matrix, Point, Sample};
use vsl_interp::FixedGridInterpolation;

/// Samples a `(2 * radius + 1)` square patch centered on `center`, rotated by
/// `angle` radians.
///
/// Patch element `(i, j)` is taken at
/// `center + R(angle) * (j - radius, i - radius)`, with `R` the rotation
/// turning the column axis toward the row axis. With `angle == 0` the patch
/// is an axis-aligned crop.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] for a non-finite angle or center
/// - [`OpsError::InvalidDimensions`] or [`OpsError::Core`] if the patch
///   size overflows
///
/// # Example
///
/// ```rust
/// use vsl_core::{Matrix, Point};
/// use vsl_interp::BilinearInterpolation;
/// use vsl_ops::sampling::rotated_patch;
///
/// let src = Matrix::from_fn(5, 5, |r, c| (r * 5 + c) as f32);
/// let patch = rotated_patch(&BilinearInterpolation::default(), &src, Point::new(2.0, 2.0), 1, 0.0).unwrap();
/// assert_eq!(patch.row(0), &[6.0, 7.0, 8.0]);
/// ```
pub fn rotated_patch<T, I>(
    interp: &I,
    src: &Matrix<T>,
    center: Point,
    radius: usize,
    angle: f32,
) -> OpsResult<Matrix<T>>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    if !angle.is_finite() || !center.is_finite() {
        return Err(OpsError::InvalidParameter(format!(
            "patch at {center} with angle {angle} is not finite"
        )));
    }
    let size = radius
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| OpsError::InvalidDimensions("radius too large, causes overflow".into()))?;
    trace!(x = center.x, y = center.y, radius, angle, "rotated_patch");

    let rotation = Mat2::from_angle(angle);
    let r = radius as f32;
    let mut dst = Matrix::try_new(size, size)?;
    fill_rows(&mut dst, |i, row| {
        for (j, out) in row.iter_mut().enumerate() {
            let p = center + rotation * Point::new(j as f32 - r, i as f32 - r);
            *out = interp.interpolate_at(src, p);
        }
    });
    Ok(dst)
}

/// Samples `src` at each of `points`.
///
/// ```rust
/// use vsl_core::{Matrix, Point};
/// use vsl_interp::GenericInterpolation;
/// use vsl_ops::sampling::grid;
///
/// let src = Matrix::from_fn(4, 4, |r, c| (r * 4 + c) as f32);
/// let values = grid(&GenericInterpolation::new(), &src, &[Point::new(1.0, 2.0), Point::new(3.0, 0.0)]);
/// assert_eq!(values, vec![9.0, 3.0]);
/// ```
pub fn grid<T, I>(interp: &I, src: &Matrix<T>, points: &[Point]) -> Vec<T>
where
    T: Sample,
    I: FixedGridInterpolation,
{
    trace!(count = points.len(), "grid");
    let (rows, columns) = src.size();
    points
        .iter()
        .map(|p| {
            if interp.is_interior(p.y, rows) && interp.is_interior(p.x, columns) {
                interp.interpolate_unchecked(src, p.y, p.x)
            } else {
                interp.interpolate_at(src, *p)
            }
        })
        .collect()
}

/// Positions of a `rows x columns` lattice centered on `center` with spacing
/// `step`, rotated by `angle` radians, in row-major order.
///
/// ```rust
/// use vsl_core::Point;
/// use vsl_ops::sampling::lattice;
///
/// let pts = lattice(Point::new(5.0, 5.0), 2, 2, 2.0, 0.0);
/// assert_eq!(pts, vec![
///     Point::new(4.0, 4.0), Point::new(6.0, 4.0),
///     Point::new(4.0, 6.0), Point::new(6.0, 6.0),
/// ]);
/// ```
pub fn lattice(center: Point, rows: usize, columns: usize, step: f32, angle: f32) -> Vec<Point> {
    let rotation = Mat2::from_angle(angle);
    let half = Point::new(
        columns.saturating_sub(1) as f32 * 0.5,
        rows.saturating_sub(1) as f32 * 0.5,
    );
    (0..rows)
        .flat_map(|i| (0..columns).map(move |j| (i, j)))
        .map(|(i, j)| center + rotation * ((Point::new(j as f32, i as f32) - half) * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;
    use vsl_interp::{BilinearInterpolation, BoundaryType, GenericInterpolation};

    #[test]
    fn test_patch_axis_aligned_crop() {
        let src = Matrix::from_fn(7, 7, |r, c| (r * 7 + c) as f32);
        let patch = rotated_patch(&GenericInterpolation::new(), &src, Point::new(3.0, 3.0), 2, 0.0).unwrap();
        let crop = Matrix::from_fn(5, 5, |r, c| ((r + 1) * 7 + c + 1) as f32);
        assert_eq!(patch, crop);
    }

    #[test]
    fn test_patch_quarter_turn() {
        let src = Matrix::from_fn(5, 5, |r, c| (r * 5 + c) as f32);
        let patch =
            rotated_patch(&BilinearInterpolation::default(), &src, Point::new(2.0, 2.0), 1, FRAC_PI_2).unwrap();
        // patch columns run down the source rows
        assert_abs_diff_eq!(*patch.at(1, 2), *src.at(3, 2), epsilon = 1e-4);
        assert_abs_diff_eq!(*patch.at(0, 1), *src.at(2, 3), epsilon = 1e-4);
        assert_abs_diff_eq!(*patch.at(1, 1), *src.at(2, 2), epsilon = 1e-4);
    }

    #[test]
    fn test_patch_near_border_uses_policy() {
        let src = Matrix::filled(4, 4, 2.0f32);
        let interp = BilinearInterpolation::new(BoundaryType::Zero);
        let patch = rotated_patch(&interp, &src, Point::new(0.0, 0.0), 1, 0.0).unwrap();
        assert_eq!(*patch.at(0, 0), 0.0);
        assert_eq!(*patch.at(2, 2), 2.0);
    }

    #[test]
    fn test_patch_rejects_nan() {
        let src = Matrix::filled(4, 4, 2.0f32);
        let interp = GenericInterpolation::new();
        assert!(rotated_patch(&interp, &src, Point::new(f32::NAN, 1.0), 1, 0.0).is_err());
        assert!(rotated_patch(&interp, &src, Point::new(1.0, 1.0), 1, f32::INFINITY).is_err());
    }

    #[test]
    fn test_patch_size_overflow_is_an_error() {
        let src = Matrix::filled(4, 4, 2.0f32);
        let interp = GenericInterpolation::new();
        assert!(matches!(
            rotated_patch(&interp, &src, Point::new(1.0, 1.0), usize::MAX / 4, 0.0),
            Err(OpsError::Core(_))
        ));
        assert!(matches!(
            rotated_patch(&interp, &src, Point::new(1.0, 1.0), usize::MAX, 0.0),
            Err(OpsError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_grid_matches_interpolate() {
        let src = Matrix::from_fn(6, 6, |r, c| ((r * 5 + c * 3) % 7) as f32);
        let interp = GenericInterpolation::with_boundary(BoundaryType::Mirror);
        let pts = lattice(Point::new(2.5, 2.5), 4, 4, 1.7, 0.3);
        let values = grid(&interp, &src, &pts);
        for (p, v) in pts.iter().zip(&values) {
            assert_eq!(*v, interp.interpolate_at(&src, *p));
        }
    }

    #[test]
    fn test_lattice_rotation() {
        let pts = lattice(Point::ZERO, 1, 3, 1.0, FRAC_PI_2);
        assert_abs_diff_eq!(pts[0].y, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pts[2].y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pts[1].x, 0.0, epsilon = 1e-6);
        assert!(lattice(Point::ZERO, 0, 3, 1.0, 0.0).is_empty());
    }
}
