//! Scale-space pyramid level access.
//!
//! A [`ScaleSpacePyramid`] holds successively smaller versions of a matrix.
//! Level `i` has resolution `factor^i` relative to level 0, so a level-0
//! position `(row, col)` corresponds to `(row * factor^i, col * factor^i)`
//! on level `i`.
//!
//! Levels are sampled straight from level 0 by default. With
//! [`Smoothing`] enabled each level is instead the Gaussian-smoothed
//! previous level, downsampled by `factor`.
//!
//! # Example
//!
//! ```rust
//! use vsl_core::Matrix;
//! use vsl_interp::BilinearInterpolation;
//! use vsl_ops::pyramid::ScaleSpacePyramid;
//!
//! let src = Matrix::from_fn(9, 9, |r, c| (r + c) as f32);
//! let pyramid = ScaleSpacePyramid::new(BilinearInterpolation::default(), &src, 3).unwrap();
//! assert_eq!(pyramid.len(), 3);
//! assert_eq!(pyramid.level(1).unwrap().size(), (5, 5));
//! assert_eq!(pyramid.level(2).unwrap().size(), (3, 3));
//! // level-0 position (4, 4) is the center of every level
//! assert_eq!(pyramid.interpolate_at_level(2, 4.0, 4.0), Some(8.0));
//! ```

use crate::scaling::resample;
use crate::smoothing::{GaussianKernel, gaussian_blur};
use crate::{OpsError, OpsResult};
use tracing::debug;
use vsl_core::{Matrix, Sample};
use vsl_interp::FixedGridInterpolation;

/// Default resolution ratio between adjacent levels.
pub const DEFAULT_FACTOR: f32 = 0.5;

/// Low-pass filtering applied before each downsampling step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Smoothing {
    /// No filtering; every level samples level 0 directly.
    #[default]
    None,
    /// Gaussian sized from the factor, see [`GaussianKernel::for_factor`].
    Automatic,
    /// Gaussian with a fixed number of taps and variance.
    Gaussian {
        /// Number of taps (rounded up to odd)
        size: usize,
        /// Variance in samples squared
        variance: f32,
    },
}

/// Pyramid of successively downsampled matrices sharing one interpolator.
#[derive(Debug, Clone)]
pub struct ScaleSpacePyramid<T, I> {
    levels: Vec<Matrix<T>>,
    level_factors: Vec<f32>,
    factor: f32,
    interp: I,
}

impl<T, I> ScaleSpacePyramid<T, I>
where
    T: Sample,
    I: FixedGridInterpolation + Sync,
{
    /// Builds `resolutions` levels with the [default factor](DEFAULT_FACTOR).
    pub fn new(interp: I, src: &Matrix<T>, resolutions: usize) -> OpsResult<Self> {
        Self::with_factor(interp, src, resolutions, DEFAULT_FACTOR)
    }

    /// Builds `resolutions` levels, each `factor` times the resolution of
    /// the one before.
    ///
    /// Level `i` has `floor((rows - 1) * factor^i) + 1` rows (columns
    /// likewise) and samples level 0 at `(row / factor^i, col / factor^i)`.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidParameter`] unless `0 < factor < 1`
    /// - [`OpsError::InvalidDimensions`] for an empty source or zero resolutions
    pub fn with_factor(interp: I, src: &Matrix<T>, resolutions: usize, factor: f32) -> OpsResult<Self> {
        Self::with_smoothing(interp, src, resolutions, factor, Smoothing::None)
    }

    /// Builds `resolutions` levels with the given smoothing.
    ///
    /// With [`Smoothing::None`] this is [`with_factor`](Self::with_factor).
    /// Otherwise level `i` is level `i - 1` smoothed and then sampled at
    /// `(row / factor, col / factor)`; the stored levels themselves are left
    /// unsmoothed.
    ///
    /// # Errors
    ///
    /// As [`with_factor`](Self::with_factor), plus
    /// [`OpsError::InvalidParameter`] for an invalid Gaussian.
    pub fn with_smoothing(
        interp: I,
        src: &Matrix<T>,
        resolutions: usize,
        factor: f32,
        smoothing: Smoothing,
    ) -> OpsResult<Self> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(OpsError::InvalidParameter(format!(
                "factor must be in (0, 1), got {factor}"
            )));
        }
        if resolutions == 0 {
            return Err(OpsError::InvalidDimensions("pyramid needs at least one level".into()));
        }
        if src.is_empty() {
            return Err(OpsError::InvalidDimensions("source matrix is empty".into()));
        }

        let kernel = match smoothing {
            Smoothing::None => None,
            Smoothing::Automatic => Some(GaussianKernel::for_factor(factor)?),
            Smoothing::Gaussian { size, variance } => Some(GaussianKernel::new(size, variance)?),
        };

        let level_factors: Vec<f32> = (0..resolutions).map(|i| factor.powi(i as i32)).collect();
        let mut levels: Vec<Matrix<T>> = Vec::with_capacity(resolutions);
        levels.push(src.clone());
        for &k in &level_factors[1..] {
            let rows = level_size(src.rows(), k);
            let columns = level_size(src.columns(), k);
            let level = match &kernel {
                None => {
                    let ys: Vec<f32> = (0..rows).map(|r| r as f32 / k).collect();
                    let xs: Vec<f32> = (0..columns).map(|c| c as f32 / k).collect();
                    resample(&interp, src, &ys, &xs)?
                }
                Some(kernel) => {
                    let previous = levels.last().unwrap_or(src);
                    let smoothed = gaussian_blur(previous, kernel)?;
                    let ys: Vec<f32> = (0..rows).map(|r| r as f32 / factor).collect();
                    let xs: Vec<f32> = (0..columns).map(|c| c as f32 / factor).collect();
                    resample(&interp, &smoothed, &ys, &xs)?
                }
            };
            levels.push(level);
        }
        debug!(
            rows = src.rows(),
            columns = src.columns(),
            resolutions,
            factor,
            ?smoothing,
            "Built scale-space pyramid"
        );
        Ok(Self {
            levels,
            level_factors,
            factor,
            interp,
        })
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`: a pyramid has at least one level.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Resolution ratio between adjacent levels.
    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Resolution of `level` relative to level 0.
    #[inline]
    pub fn level_factor(&self, level: usize) -> Option<f32> {
        self.level_factors.get(level).copied()
    }

    /// Matrix at `level`.
    #[inline]
    pub fn level(&self, level: usize) -> Option<&Matrix<T>> {
        self.levels.get(level)
    }

    /// All levels, finest first.
    pub fn levels(&self) -> impl Iterator<Item = &Matrix<T>> {
        self.levels.iter()
    }

    /// Interpolator used for level access.
    #[inline]
    pub fn interpolator(&self) -> &I {
        &self.interp
    }

    /// Maps a level-0 position onto `level`.
    pub fn map_to_level(&self, level: usize, row0: f32, col0: f32) -> Option<(f32, f32)> {
        let k = self.level_factor(level)?;
        Some((row0 * k, col0 * k))
    }

    /// Maps a position on `level` back to level 0.
    pub fn map_to_level0(&self, level: usize, row: f32, col: f32) -> Option<(f32, f32)> {
        let k = self.level_factor(level)?;
        Some((row / k, col / k))
    }

    /// Value of `level` at `(row, col)` in that level's own coordinates.
    ///
    /// Returns `None` if `level` does not exist.
    pub fn interpolate(&self, level: usize, row: f32, col: f32) -> Option<T> {
        self.level(level)
            .map(|m| self.interp.interpolate(m, row, col))
    }

    /// Value of `level` at the level-0 position `(row0, col0)`.
    ///
    /// Returns `None` if `level` does not exist.
    pub fn interpolate_at_level(&self, level: usize, row0: f32, col0: f32) -> Option<T> {
        let (row, col) = self.map_to_level(level, row0, col0)?;
        self.interpolate(level, row, col)
    }
}

fn level_size(size: usize, k: f32) -> usize {
    (size.saturating_sub(1) as f32 * k).floor() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsl_interp::{BoundaryType, GenericInterpolation, NearestNeighborInterpolation};

    #[test]
    fn test_level_sizes() {
        let src = Matrix::filled(17, 10, 0u8);
        let p = ScaleSpacePyramid::new(NearestNeighborInterpolation::default(), &src, 4).unwrap();
        let sizes: Vec<(usize, usize)> = p.levels().map(Matrix::size).collect();
        assert_eq!(sizes, vec![(17, 10), (9, 5), (5, 3), (3, 2)]);
        assert_eq!(p.level_factor(3), Some(0.125));
        assert!(p.level(4).is_none());
        assert!(!p.is_empty());
    }

    #[test]
    fn test_levels_sample_level_zero_nodes() {
        let src = Matrix::from_fn(9, 9, |r, c| (r * 9 + c) as i32);
        let p = ScaleSpacePyramid::new(GenericInterpolation::new(), &src, 3).unwrap();
        // factor 0.5 lands every level node on a level-0 node
        let l2 = p.level(2).unwrap();
        assert_eq!(*l2.at(1, 2), *src.at(4, 8));
        assert_eq!(p.interpolate(1, 2.0, 3.0), Some(*src.at(4, 6)));
    }

    #[test]
    fn test_coordinate_mapping_roundtrip() {
        let src = Matrix::filled(20, 20, 1.0f32);
        let p = ScaleSpacePyramid::with_factor(GenericInterpolation::new(), &src, 3, 0.75).unwrap();
        let (r, c) = p.map_to_level(2, 8.0, 4.0).unwrap();
        assert_eq!((r, c), (4.5, 2.25));
        assert_eq!(p.map_to_level0(2, r, c), Some((8.0, 4.0)));
        let v = p.interpolate_at_level(2, 8.0, 4.0).unwrap();
        assert!((v - 1.0).abs() < 1e-5);
        assert_eq!(p.interpolate_at_level(5, 8.0, 4.0), None);
    }

    #[test]
    fn test_smoothing_suppresses_checkerboard() {
        let src = Matrix::from_fn(17, 17, |r, c| ((r + c) % 2 * 10) as f32);
        let interp = GenericInterpolation::with_boundary(BoundaryType::Mirror);
        let plain = ScaleSpacePyramid::new(interp.clone(), &src, 3).unwrap();
        let smooth =
            ScaleSpacePyramid::with_smoothing(interp, &src, 3, DEFAULT_FACTOR, Smoothing::Automatic).unwrap();

        let sizes = |p: &ScaleSpacePyramid<f32, GenericInterpolation>| -> Vec<(usize, usize)> {
            p.levels().map(Matrix::size).collect()
        };
        assert_eq!(sizes(&plain), sizes(&smooth));
        assert_eq!(smooth.level(0), Some(&src));

        // even nodes of the checkerboard are all zero; smoothing yields the mean
        assert_eq!(*plain.level(1).unwrap().at(4, 4), 0.0);
        assert!((*smooth.level(1).unwrap().at(4, 4) - 5.0).abs() < 0.05);
        assert!((*smooth.level(2).unwrap().at(2, 2) - 5.0).abs() < 0.05);
    }

    #[test]
    fn test_fixed_gaussian_smoothing() {
        let src = Matrix::filled(9, 9, 12u8);
        let fixed = Smoothing::Gaussian { size: 5, variance: 1.0 };
        let p = ScaleSpacePyramid::with_smoothing(NearestNeighborInterpolation::default(), &src, 3, 0.5, fixed)
            .unwrap();
        assert!(p.levels().all(|m| m.as_slice().iter().all(|&v| v == 12)));

        let bad = Smoothing::Gaussian { size: 5, variance: -1.0 };
        assert!(matches!(
            ScaleSpacePyramid::with_smoothing(NearestNeighborInterpolation::default(), &src, 3, 0.5, bad),
            Err(OpsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_configuration() {
        let src = Matrix::filled(4, 4, 0.0f32);
        let interp = GenericInterpolation::with_boundary(BoundaryType::Constant);
        assert!(ScaleSpacePyramid::with_factor(interp.clone(), &src, 2, 1.0).is_err());
        assert!(ScaleSpacePyramid::with_factor(interp.clone(), &src, 2, f32::NAN).is_err());
        assert!(ScaleSpacePyramid::new(interp.clone(), &src, 0).is_err());
        let empty: Matrix<f32> = Matrix::new(0, 4);
        assert!(ScaleSpacePyramid::new(interp, &empty, 2).is_err());
    }
}
