//! Integration tests for vsl crates.
//!
//! This crate contains end-to-end tests that exercise the interpolation
//! engine together with the resampling operations built on it.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;
    use std::f64::consts::PI as PI64;
    use vsl_core::{Matrix, Point, Rgba8};
    use vsl_interp::prelude::*;
    use vsl_interp::KernelLut;
    use vsl_ops::{expansion, pyramid::ScaleSpacePyramid, sampling, scaling, transform};

    fn pattern(rows: usize, columns: usize) -> Matrix<f32> {
        Matrix::from_fn(rows, columns, |r, c| ((r * 13 + c * 7) % 19) as f32 - 9.0)
    }

    fn lanczos3(samples_per_interval: usize) -> InterpolationParams {
        let m = samples_per_interval as f64;
        let sinc = |x: f64| {
            if x == 0.0 {
                1.0
            } else {
                (PI64 * x).sin() / (PI64 * x)
            }
        };
        let table = (0..6 * samples_per_interval)
            .map(|j| {
                let x = (j as f64 - 3.0 * m) / m;
                (sinc(x) * sinc(x / 3.0)) as f32
            })
            .collect();
        InterpolationParams::generic(table, samples_per_interval)
    }

    fn eighths(from: i32, to: i32) -> impl Iterator<Item = f32> {
        (from * 8..=to * 8).map(|k| k as f32 / 8.0)
    }

    /// Padding by the range of influence and evaluating unchecked gives the
    /// boundary-aware result on the unpadded source.
    #[test]
    fn test_expand_then_unchecked_matches_checked() {
        let src = pattern(5, 6);
        for boundary in [
            BoundaryType::Zero,
            BoundaryType::Constant,
            BoundaryType::Mirror,
            BoundaryType::Periodic,
        ] {
            let interp = GenericInterpolation::with_boundary(boundary);
            let border = interp.range_of_influence();
            let padded = expansion::expand(&src, border, boundary).unwrap();
            let b = border as f32;
            for row in eighths(-1, 4) {
                for col in eighths(-1, 5) {
                    let checked = interp.interpolate(&src, row, col);
                    let fast = interp.interpolate_unchecked(&padded, row + b, col + b);
                    assert_eq!(checked.to_bits(), fast.to_bits(), "{boundary} at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_checked_and_unchecked_agree_for_every_interpolator() {
        fn sweep<I: FixedGridInterpolation>(interp: &I) {
            let src = pattern(10, 10);
            let mut hits = 0;
            for i in 0..30 {
                for j in 0..30 {
                    let (row, col) = (i as f32 * 0.31, j as f32 * 0.31);
                    if interp.is_interior(row, 10) && interp.is_interior(col, 10) {
                        let a = interp.interpolate(&src, row, col);
                        let b = interp.interpolate_unchecked(&src, row, col);
                        assert_eq!(a.to_bits(), b.to_bits());
                        hits += 1;
                    }
                }
                let x = i as f32 * 0.31;
                if interp.is_interior(x, 10) {
                    let line = src.row(4);
                    assert_eq!(interp.apply(line, x).to_bits(), interp.apply_unchecked(line, x).to_bits());
                }
            }
            assert!(hits > 0);
        }
        sweep(&NearestNeighborInterpolation::default());
        sweep(&BilinearInterpolation::default());
        sweep(&BiquadraticInterpolation::new(BoundaryType::Mirror));
        sweep(&GenericInterpolation::new());
        sweep(&GenericInterpolation::with_params(
            InterpolationParams::new().with_kernel(KernelType::Bilinear),
        ));
        let six = GenericInterpolation::with_params(lanczos3(128).with_boundary(BoundaryType::Periodic));
        assert_eq!(six.range_of_influence(), 3);
        sweep(&six);
    }

    #[test]
    fn test_generic_table_equals_builtin_kernel() {
        let table = KernelLut::bicubic(32).unwrap().weights().to_vec();
        let custom = GenericInterpolation::with_params(
            InterpolationParams::generic(table, 32).with_boundary(BoundaryType::Mirror),
        );
        assert!(custom.is_valid());
        let builtin = GenericInterpolation::with_params(
            InterpolationParams::new()
                .with_samples_per_interval(32)
                .with_boundary(BoundaryType::Mirror),
        );
        let src = pattern(7, 7);
        let a = scaling::scale(&custom, &src, 13, 11).unwrap();
        let b = scaling::scale(&builtin, &src, 13, 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scale_matches_pointwise_interpolation() {
        let src = pattern(6, 9);
        let interp = GenericInterpolation::with_boundary(BoundaryType::Periodic);
        let dst = scaling::scale(&interp, &src, 11, 4).unwrap();
        for i in 0..11 {
            for j in 0..4 {
                let y = ((i * 5) as f64 / 10.0) as f32;
                let x = ((j * 8) as f64 / 3.0) as f32;
                assert_eq!(*dst.at(i, j), interp.interpolate(&src, y, x));
            }
        }
    }

    #[test]
    fn test_biquadratic_upscale_of_parabola() {
        let src = Matrix::from_fn(5, 7, |r, c| (r * r) as f32 + 2.0 * c as f32);
        let interp = BiquadraticInterpolation::new(BoundaryType::Constant);
        let dst = scaling::scale(&interp, &src, 9, 13).unwrap();
        // interior rows and columns sit on the fitted parabola
        for i in 2..7 {
            for j in 2..12 {
                let (y, x) = (i as f32 * 0.5, j as f32 * 0.5);
                assert_abs_diff_eq!(*dst.at(i, j), y * y + 2.0 * x, epsilon = 1e-3);
            }
        }
        assert_eq!(dst.at(8, 12), src.at(4, 6));
    }

    #[test]
    fn test_bilinear_upscale_of_ramp() {
        let src = Matrix::from_fn(6, 6, |r, c| (r * 6 + c) as f32);
        let dst = scaling::scale(&BilinearInterpolation::default(), &src, 11, 11).unwrap();
        for i in 0..11 {
            for j in 0..11 {
                assert_abs_diff_eq!(*dst.at(i, j), 3.0 * i as f32 + 0.5 * j as f32, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_rgba_scale_keeps_corners_and_alpha() {
        let src = Matrix::from_fn(3, 3, |r, c| Rgba8::new((r * 100) as u8, (c * 120) as u8, 40, 255));
        for dst in [
            scaling::scale(&GenericInterpolation::new(), &src, 7, 5).unwrap(),
            scaling::scale(&BilinearInterpolation::default(), &src, 7, 5).unwrap(),
        ] {
            assert_eq!(dst.at(0, 0), src.at(0, 0));
            assert_eq!(dst.at(6, 4), src.at(2, 2));
            assert!(dst.as_slice().iter().all(|p| p.a == 255 && p.b == 40));
        }
    }

    #[test]
    fn test_half_turn_twice_is_identity() {
        let src = Matrix::from_fn(3, 4, |r, c| (r * 4 + c) as u8);
        let nearest = NearestNeighborInterpolation::default();
        let once = transform::rotate(&nearest, &src, PI).unwrap();
        let twice = transform::rotate(&nearest, &once, PI).unwrap();
        assert_eq!(twice, src);
    }

    #[test]
    fn test_pyramid_patch_of_constant_field() {
        let src = Matrix::filled(33, 33, 5.0f32);
        let interp = GenericInterpolation::with_boundary(BoundaryType::Mirror);
        let pyramid = ScaleSpacePyramid::new(interp.clone(), &src, 3).unwrap();
        let level = pyramid.level(1).unwrap();
        assert_eq!(level.size(), (17, 17));

        let (row, col) = pyramid.map_to_level(1, 16.0, 16.0).unwrap();
        let patch = sampling::rotated_patch(&interp, level, Point::new(col, row), 3, 0.7).unwrap();
        for v in patch.as_slice() {
            assert_abs_diff_eq!(*v, 5.0, epsilon = 1e-4);
        }
        let v = pyramid.interpolate_at_level(2, 16.0, 16.0).unwrap();
        assert_abs_diff_eq!(v, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_bound_handles_match_trait_calls() {
        let src = pattern(5, 5);
        let interp = GenericInterpolation::with_boundary(BoundaryType::Mirror);
        let bound = interp.bind(&src);
        let line = interp.bind_slice(src.row(2));
        for x in eighths(-2, 6) {
            assert_eq!(bound.apply(1.25, x), interp.interpolate(&src, 1.25, x));
            assert_eq!(line.apply(x), interp.apply(src.row(2), x));
        }
    }

    #[test]
    fn test_no_boundary_rim_is_zero() {
        let src = Matrix::filled(6, 6, 3.0f32);
        let interp = GenericInterpolation::with_boundary(BoundaryType::NoBoundary);
        let dst = transform::affine(&interp, &src, glam::Affine2::IDENTITY, 6, 6).unwrap();
        assert_eq!(*dst.at(0, 3), 0.0);
        assert_eq!(*dst.at(5, 5), 0.0);
        assert_eq!(*dst.at(2, 3), 3.0);
    }

    #[test]
    fn test_params_from_json() {
        let params: InterpolationParams =
            serde_json::from_str(r#"{"kernel_type":"Bilinear","boundary_type":"Periodic"}"#).unwrap();
        assert_eq!(
            params,
            InterpolationParams::new()
                .with_kernel(KernelType::Bilinear)
                .with_boundary(BoundaryType::Periodic)
        );
        let json = serde_json::to_string(&InterpolationParams::new()).unwrap();
        let back: InterpolationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, InterpolationParams::new());

        let interp = GenericInterpolation::with_params(params);
        assert_eq!(interp.apply(&[0.0f32, 10.0], 0.25), 2.5);
    }
}
