//! 8-bit multi-channel pixel types.
//!
//! # Types
//!
//! - [`Rgb8`] - RGB pixel, 8 bits per channel
//! - [`Rgba8`] - RGBA pixel, 8 bits per channel
//!
//! Both interpolate through a per-channel [`Lanes`] accumulator, so the
//! weighted sum runs in `f32` and is rounded and clamped into `0..=255`
//! once, at the end.
//!
//! # Memory Layout
//!
//! Both types use `#[repr(C)]` for a predictable `[R, G, B(, A)]` layout.
//!
//! # Example
//!
//! ```rust
//! use vsl_core::{Rgba8, Sample};
//!
//! let px = Rgba8::new(255, 128, 0, 255);
//! let back = Rgba8::from_accum(px.to_accum());
//! assert_eq!(back, px);
//! ```

use crate::sample::{Lanes, Sample};
use std::fmt;
use std::ops::{Add, Sub};

/// RGB pixel with 8-bit channels.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Rgb8 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
}

impl Rgb8 {
    /// Create a new RGB pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale pixel with equal RGB values.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Get RGB values as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// RGBA pixel with 8-bit channels.
///
/// # Example
///
/// ```
/// use vsl_core::Rgba8;
///
/// let pixel = Rgba8::new(255, 128, 64, 255);
/// assert_eq!(pixel.to_array(), [255, 128, 64, 255]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Rgba8 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
    /// Alpha channel value.
    pub a: u8,
}

impl Rgba8 {
    /// Create a new RGBA pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel from RGB values.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Get RGBA values as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Rgb8> for Rgba8 {
    #[inline]
    fn from(px: Rgb8) -> Self {
        Self::opaque(px.r, px.g, px.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[inline]
fn narrow(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

impl Sample for Rgb8 {
    type Accum = Lanes<3>;

    #[inline]
    fn to_accum(self) -> Lanes<3> {
        Lanes([f32::from(self.r), f32::from(self.g), f32::from(self.b)])
    }

    #[inline]
    fn from_accum(acc: Lanes<3>) -> Self {
        let [r, g, b] = acc.0;
        Self::new(narrow(r), narrow(g), narrow(b))
    }
}

impl Sample for Rgba8 {
    type Accum = Lanes<4>;

    #[inline]
    fn to_accum(self) -> Lanes<4> {
        Lanes([
            f32::from(self.r),
            f32::from(self.g),
            f32::from(self.b),
            f32::from(self.a),
        ])
    }

    #[inline]
    fn from_accum(acc: Lanes<4>) -> Self {
        let [r, g, b, a] = acc.0;
        Self::new(narrow(r), narrow(g), narrow(b), narrow(a))
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Add for Rgb8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
        )
    }
}

impl Sub for Rgb8 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r.saturating_sub(rhs.r),
            self.g.saturating_sub(rhs.g),
            self.b.saturating_sub(rhs.b),
        )
    }
}

impl Add for Rgba8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
            self.a.saturating_add(rhs.a),
        )
    }
}

impl Sub for Rgba8 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r.saturating_sub(rhs.r),
            self.g.saturating_sub(rhs.g),
            self.b.saturating_sub(rhs.b),
            self.a.saturating_sub(rhs.a),
        )
    }
}
