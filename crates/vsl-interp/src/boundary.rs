//! Boundary extension policies.
//!
//! An interpolator's support window can reach past the edges of the sample
//! array. A [`BoundaryType`] decides what those missing samples are: a real
//! sample elsewhere in the array, a synthetic zero, or nothing at all.
//!
//! # Policies
//!
//! | Policy | Index `-2, -1 \| 0..S \| S, S+1` for `S = 5` |
//! |--------|-------------------------------------------|
//! | [`NoBoundary`](BoundaryType::NoBoundary) | undefined (whole result is zero) |
//! | [`Zero`](BoundaryType::Zero) | `0, 0 \| v0..v4 \| 0, 0` |
//! | [`Constant`](BoundaryType::Constant) | `v0, v0 \| v0..v4 \| v4, v4` |
//! | [`Mirror`](BoundaryType::Mirror) | `v1, v0 \| v0..v4 \| v4, v3` |
//! | [`Periodic`](BoundaryType::Periodic) | `v3, v4 \| v0..v4 \| v0, v1` |
//!
//! Resolution is total: every `isize` index maps to a defined outcome, no
//! matter how many periods outside the array it lies.
//!
//! # Example
//!
//! ```rust
//! use vsl_interp::{BoundaryType, Resolved};
//!
//! assert_eq!(BoundaryType::Mirror.resolve(-1, 5), Resolved::Index(0));
//! assert_eq!(BoundaryType::Periodic.resolve(-1, 5), Resolved::Index(4));
//! assert_eq!(BoundaryType::Zero.resolve(7, 5), Resolved::Zero);
//! assert_eq!(BoundaryType::NoBoundary.resolve(7, 5), Resolved::Undefined);
//! ```

use crate::{InterpError, InterpResult};
use std::fmt;
use std::str::FromStr;
use vsl_core::{Matrix, Sample};

/// Rule synthesizing samples for indices outside an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryType {
    /// Outside the array nothing is defined; an interpolation whose support
    /// window leaves the array yields the element's zero value.
    NoBoundary,
    /// Outside samples are zero.
    Zero,
    /// Outside samples repeat the nearest edge sample.
    #[default]
    Constant,
    /// The array is reflected at its edges, repeating the edge sample.
    Mirror,
    /// The array repeats with period `size`.
    Periodic,
}

/// Outcome of resolving an index against an array extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<I = usize> {
    /// A valid position inside the array.
    Index(I),
    /// A synthetic zero sample.
    Zero,
    /// No defined value.
    Undefined,
}

impl Resolved<usize> {
    /// Combines a row and a column resolution into a 2D resolution.
    ///
    /// `Undefined` dominates `Zero`, which dominates a real index.
    #[inline]
    pub fn zip(self, column: Resolved<usize>) -> Resolved<(usize, usize)> {
        match (self, column) {
            (Resolved::Undefined, _) | (_, Resolved::Undefined) => Resolved::Undefined,
            (Resolved::Zero, _) | (_, Resolved::Zero) => Resolved::Zero,
            (Resolved::Index(r), Resolved::Index(c)) => Resolved::Index((r, c)),
        }
    }
}

impl BoundaryType {
    /// All policies, in declaration order.
    pub const ALL: [BoundaryType; 5] = [
        BoundaryType::NoBoundary,
        BoundaryType::Zero,
        BoundaryType::Constant,
        BoundaryType::Mirror,
        BoundaryType::Periodic,
    ];

    /// Canonical name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            BoundaryType::NoBoundary => "NoBoundary",
            BoundaryType::Zero => "Zero",
            BoundaryType::Constant => "Constant",
            BoundaryType::Mirror => "Mirror",
            BoundaryType::Periodic => "Periodic",
        }
    }

    /// Maps `index` onto an array of `size` elements.
    ///
    /// In-range indices always resolve to themselves. An empty array has no
    /// valid index, so every policy except [`Zero`](Self::Zero) yields
    /// [`Resolved::Undefined`] for it.
    pub fn resolve(self, index: isize, size: usize) -> Resolved {
        if index >= 0 && (index as usize) < size {
            return Resolved::Index(index as usize);
        }
        if self == BoundaryType::Zero {
            return Resolved::Zero;
        }
        if size == 0 {
            return Resolved::Undefined;
        }
        let len = size as isize;
        match self {
            BoundaryType::NoBoundary => Resolved::Undefined,
            BoundaryType::Zero => Resolved::Zero,
            BoundaryType::Constant => Resolved::Index(if index < 0 { 0 } else { size - 1 }),
            BoundaryType::Mirror => {
                let r = index.rem_euclid(len) as usize;
                if index.div_euclid(len) & 1 != 0 {
                    Resolved::Index(size - 1 - r)
                } else {
                    Resolved::Index(r)
                }
            }
            BoundaryType::Periodic => Resolved::Index(index.rem_euclid(len) as usize),
        }
    }

    /// Returns `true` if every index outside `0..size` resolves to a value.
    ///
    /// ```rust
    /// use vsl_interp::BoundaryType;
    ///
    /// assert!(BoundaryType::Mirror.extends(3));
    /// assert!(!BoundaryType::Mirror.extends(0));
    /// assert!(BoundaryType::Zero.extends(0));
    /// assert!(!BoundaryType::NoBoundary.extends(3));
    /// ```
    #[inline]
    pub fn extends(self, size: usize) -> bool {
        match self {
            BoundaryType::NoBoundary => false,
            BoundaryType::Zero => true,
            BoundaryType::Constant | BoundaryType::Mirror | BoundaryType::Periodic => size > 0,
        }
    }

    /// Resolves a `(row, column)` pair, applying the 1D rule per axis.
    #[inline]
    pub fn resolve_2d(
        self,
        row: isize,
        col: isize,
        rows: usize,
        columns: usize,
    ) -> Resolved<(usize, usize)> {
        self.resolve(row, rows).zip(self.resolve(col, columns))
    }

    /// Fetches `src[index]` under this policy.
    ///
    /// Returns `None` when the policy leaves the sample undefined.
    #[inline]
    pub fn fetch<T: Sample>(self, src: &[T], index: isize) -> Option<T> {
        match self.resolve(index, src.len()) {
            Resolved::Index(i) => Some(src[i]),
            Resolved::Zero => Some(T::zero()),
            Resolved::Undefined => None,
        }
    }

    /// Fetches `src.at(row, col)` under this policy.
    ///
    /// Returns `None` when the policy leaves the sample undefined.
    #[inline]
    pub fn fetch_2d<T: Sample>(self, src: &Matrix<T>, row: isize, col: isize) -> Option<T> {
        match self.resolve_2d(row, col, src.rows(), src.columns()) {
            Resolved::Index((r, c)) => Some(*src.at(r, c)),
            Resolved::Zero => Some(T::zero()),
            Resolved::Undefined => None,
        }
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryType {
    type Err = InterpError;

    /// Parses a policy name, ignoring ASCII case.
    fn from_str(s: &str) -> InterpResult<Self> {
        BoundaryType::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InterpError::UnknownName {
                kind: "boundary type",
                name: s.to_string(),
            })
    }
}
