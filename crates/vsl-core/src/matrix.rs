//! Dense row-major matrix container.
//!
//! [`Matrix`] is the 2D sample array consumed by the interpolation engine
//! and produced by the resampling operations. One-dimensional data needs no
//! dedicated type: any `&[T]` is a valid 1D sample array.
//!
//! # Memory Layout
//!
//! Elements are stored contiguously in **row-major** order, top-to-bottom,
//! with no padding between rows:
//!
//! ```text
//! Memory: [a00 a01 a02 ...]  <- Row 0
//!         [a10 a11 a12 ...]  <- Row 1
//!         ...
//! ```
//!
//! so [`Matrix::row`] is always a plain slice. The interpolation fast path
//! relies on this to read an `N`-wide support window straight out of a row.
//!
//! # Usage
//!
//! ```rust
//! use vsl_core::Matrix;
//!
//! let m = Matrix::from_fn(4, 4, |row, col| (row * 10 + col) as f32);
//! assert_eq!(*m.at(2, 3), 23.0);
//! assert_eq!(m.last_row(), 3);
//! assert_eq!(m.row(1), &[10.0, 11.0, 12.0, 13.0]);
//! ```
//!
//! # Used By
//!
//! - `vsl-interp` - 2D interpolation source
//! - `vsl-ops` - scaling, warping, sampling and padding

use crate::{Error, Result};
use std::ops::{Index, IndexMut};

/// Owned 2D array of elements in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from existing row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len() != rows * columns`, or
    /// [`Error::InvalidDimensions`] if the product overflows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vsl_core::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
    /// assert_eq!(*m.at(1, 0), 3);
    /// assert!(Matrix::from_vec(3, 3, vec![0u8; 4]).is_err());
    /// ```
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        let expected = element_count(rows, columns)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Creates a matrix by evaluating `f(row, column)` for every element.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(element_count_or_panic(rows, columns));
        for row in 0..rows {
            for col in 0..columns {
                data.push(f(row, col));
            }
        }
        Self {
            rows,
            columns,
            data,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Index of the last row (`rows - 1`, or `-1` when empty).
    #[inline]
    pub fn last_row(&self) -> isize {
        self.rows as isize - 1
    }

    /// Index of the last column (`columns - 1`, or `-1` when empty).
    #[inline]
    pub fn last_column(&self) -> isize {
        self.columns as isize - 1
    }

    /// Returns `(rows, columns)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns `true` if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the matrix. Use [`get`](Self::get)
    /// or [`try_at`](Self::try_at) for fallible access.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &T {
        assert!(
            row < self.rows && col < self.columns,
            "element ({row}, {col}) out of bounds for matrix {}x{}",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + col]
    }

    /// Mutable element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the matrix.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(
            row < self.rows && col < self.columns,
            "element ({row}, {col}) out of bounds for matrix {}x{}",
            self.rows,
            self.columns
        );
        &mut self.data[row * self.columns + col]
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.columns {
            self.data.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// Element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when the coordinates are outside the matrix.
    #[inline]
    pub fn try_at(&self, row: usize, col: usize) -> Result<&T> {
        self.get(row, col)
            .ok_or_else(|| Error::out_of_bounds(row, col, self.rows, self.columns))
    }

    /// Row `row` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }

    /// Row `row` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.columns;
        &mut self.data[start..start + self.columns]
    }

    /// Iterator over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty matrix has no rows to yield anyway
        self.data.chunks(self.columns.max(1)).take(self.rows)
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major data.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every element, producing a new matrix of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a matrix with every element set to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vsl_core::Matrix;
    ///
    /// let m = Matrix::filled(3, 2, 7i32);
    /// assert_eq!(m.size(), (3, 2));
    /// assert!(m.as_slice().iter().all(|&v| v == 7));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows. Use [`try_filled`](Self::try_filled)
    /// for sizes that come from untrusted arithmetic.
    pub fn filled(rows: usize, columns: usize, value: T) -> Self {
        Self {
            rows,
            columns,
            data: vec![value; element_count_or_panic(rows, columns)],
        }
    }

    /// Creates a matrix with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `rows * columns` overflows.
    pub fn try_filled(rows: usize, columns: usize, value: T) -> Result<Self> {
        let count = element_count(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: vec![value; count],
        })
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a matrix filled with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, T::default())
    }

    /// Creates a matrix filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `rows * columns` overflows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vsl_core::Matrix;
    ///
    /// let m: Matrix<f32> = Matrix::try_new(2, 5).unwrap();
    /// assert_eq!(m.size(), (2, 5));
    /// assert!(Matrix::<u8>::try_new(usize::MAX, 2).is_err());
    /// ```
    pub fn try_new(rows: usize, columns: usize) -> Result<Self> {
        Self::try_filled(rows, columns, T::default())
    }
}

fn element_count(rows: usize, columns: usize) -> Result<usize> {
    rows.checked_mul(columns)
        .ok_or_else(|| Error::invalid_dimensions(rows, columns, "element count overflows"))
}

fn element_count_or_panic(rows: usize, columns: usize) -> usize {
    match element_count(rows, columns) {
        Ok(count) => count,
        Err(e) => panic!("{e}"),
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col)
    }
}
