//! Row-wise output generation.
//!
//! Every operation in this crate produces its output one row at a time from
//! a pure per-row closure. With the `parallel` feature the rows are filled
//! concurrently with rayon; otherwise sequentially.

use vsl_core::Matrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fills every row of `dst` with `fill(row_index, row)`.
#[cfg(feature = "parallel")]
pub(crate) fn fill_rows<T, F>(dst: &mut Matrix<T>, fill: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    let columns = dst.columns().max(1);
    dst.as_mut_slice()
        .par_chunks_mut(columns)
        .enumerate()
        .for_each(|(y, row)| fill(y, row));
}

/// Fills every row of `dst` with `fill(row_index, row)` (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_rows<T, F>(dst: &mut Matrix<T>, fill: F)
where
    F: Fn(usize, &mut [T]),
{
    let columns = dst.columns().max(1);
    for (y, row) in dst.as_mut_slice().chunks_mut(columns).enumerate() {
        fill(y, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rows_visits_each_row_once() {
        let mut m = Matrix::new(5, 3);
        fill_rows(&mut m, |y, row| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = y * 10 + x;
            }
        });
        assert_eq!(m, Matrix::from_fn(5, 3, |r, c| r * 10 + c));
    }
}
