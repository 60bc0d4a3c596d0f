use gauss_core::Scalar;

/// Eliminates column `k` from `row` using the pivot row of step `k`.
///
/// Only columns `k..=n` (including the right-hand side) are touched; the
/// entries left of `k` are already zero.
pub fn reduce_row<T: Scalar>(k: usize, pivot: &[T], row: &mut [T]) {
    let factor = row[k] / pivot[k];
    for (target, &p) in row[k..].iter_mut().zip(&pivot[k..]) {
        *target = *target - factor * p;
    }
}

/// Reduces a contiguous block of rows. An empty block is a no-op.
pub fn reduce_rows<T: Scalar>(k: usize, pivot: &[T], rows: &mut [Vec<T>]) {
    for row in rows {
        reduce_row(k, pivot, row);
    }
}
