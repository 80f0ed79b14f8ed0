//! Element-type contract for interpolated arrays.
//!
//! Interpolation needs three things from an element type: a zero value,
//! a way to widen the element into an accumulator that can be scaled by
//! `f32` weights and summed, and a way to narrow the accumulated result
//! back into the element domain.
//!
//! # Types
//!
//! - [`Accumulator`] - Weighted-sum register (`f32`, `f64`, [`Lanes`])
//! - [`Sample`] - Element types that can be interpolated
//!
//! # Precision
//!
//! The accumulator is at least as wide as the element's natural floating
//! precision:
//!
//! | Element | Accumulator |
//! |---------|-------------|
//! | `u8`, `u16`, `i16`, `f16`, `f32` | `f32` |
//! | `i32`, `f64` | `f64` |
//! | [`Rgb8`](crate::Rgb8), [`Rgba8`](crate::Rgba8), `[f32; 1..=4]` | [`Lanes<N>`] |
//!
//! Bounded integer elements are rounded and clamped into their range when
//! narrowed; floating elements are returned unclamped.
//!
//! # Example
//!
//! ```rust
//! use vsl_core::{Accumulator, Sample};
//!
//! let acc = 200u8.to_accum().add_weighted(100u8.to_accum(), 1.0);
//! assert_eq!(u8::from_accum(acc), 255); // clamped
//! assert_eq!(f32::from_accum(acc), 300.0);
//! ```

use half::f16;

/// Weighted-sum register used by the separable compute kernel.
///
/// Implementors form a vector space over `f32` weights: the compute kernel
/// only ever starts from [`ZERO`](Accumulator::ZERO) and folds samples in
/// with [`add_weighted`](Accumulator::add_weighted).
pub trait Accumulator: Copy + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;

    /// Returns `self + x * weight`.
    fn add_weighted(self, x: Self, weight: f32) -> Self;
}

impl Accumulator for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn add_weighted(self, x: Self, weight: f32) -> Self {
        self + x * weight
    }
}

impl Accumulator for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn add_weighted(self, x: Self, weight: f32) -> Self {
        self + x * f64::from(weight)
    }
}

/// Per-channel `f32` accumulator for multi-channel elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lanes<const N: usize>(pub [f32; N]);

impl<const N: usize> Accumulator for Lanes<N> {
    const ZERO: Self = Lanes([0.0; N]);

    #[inline]
    fn add_weighted(self, x: Self, weight: f32) -> Self {
        let mut out = self.0;
        for (o, v) in out.iter_mut().zip(x.0) {
            *o += v * weight;
        }
        Lanes(out)
    }
}

/// Element types that can be stored in a sample array and interpolated.
///
/// # Required Methods
///
/// - [`to_accum`](Sample::to_accum) - Widen into the accumulator type
/// - [`from_accum`](Sample::from_accum) - Narrow back, clamping bounded types
///
/// # Example
///
/// ```rust
/// use vsl_core::Sample;
///
/// assert_eq!(u8::from_accum(12.5), 13);
/// assert_eq!(u8::from_accum(-3.0), 0);
/// assert_eq!(<f64 as Sample>::zero(), 0.0);
/// ```
pub trait Sample: Copy + Default + Send + Sync + 'static {
    /// Accumulator used while summing weighted samples.
    type Accum: Accumulator;

    /// Widens this element into its accumulator.
    fn to_accum(self) -> Self::Accum;

    /// Narrows an accumulated value back into the element domain.
    fn from_accum(acc: Self::Accum) -> Self;

    /// Zero element (the value an undefined interpolation yields).
    #[inline]
    fn zero() -> Self {
        Self::default()
    }
}

macro_rules! bounded_int_sample {
    ($t:ty, $acc:ty) => {
        impl Sample for $t {
            type Accum = $acc;

            #[inline]
            fn to_accum(self) -> $acc {
                self as $acc
            }

            #[inline]
            fn from_accum(acc: $acc) -> Self {
                acc.round().clamp(<$t>::MIN as $acc, <$t>::MAX as $acc) as $t
            }
        }
    };
}

bounded_int_sample!(u8, f32);
bounded_int_sample!(u16, f32);
bounded_int_sample!(i16, f32);
bounded_int_sample!(i32, f64);

impl Sample for f32 {
    type Accum = f32;

    #[inline]
    fn to_accum(self) -> f32 {
        self
    }

    #[inline]
    fn from_accum(acc: f32) -> Self {
        acc
    }
}

impl Sample for f64 {
    type Accum = f64;

    #[inline]
    fn to_accum(self) -> f64 {
        self
    }

    #[inline]
    fn from_accum(acc: f64) -> Self {
        acc
    }
}

impl Sample for f16 {
    type Accum = f32;

    #[inline]
    fn to_accum(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn from_accum(acc: f32) -> Self {
        f16::from_f32(acc)
    }
}

macro_rules! array_sample {
    ($($n:literal),*) => {$(
        impl Sample for [f32; $n] {
            type Accum = Lanes<$n>;

            #[inline]
            fn to_accum(self) -> Lanes<$n> {
                Lanes(self)
            }

            #[inline]
            fn from_accum(acc: Lanes<$n>) -> Self {
                acc.0
            }
        }
    )*};
}

array_sample!(1, 2, 3, 4);
