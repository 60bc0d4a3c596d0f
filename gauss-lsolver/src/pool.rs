//! Persistent worker pool for forward elimination.
//!
//! One rayon pool with exactly `thread_count` threads lives for the whole
//! elimination. Each step is still a fork-join: the pivot is chosen on the
//! calling thread, then `scope` hands every worker its own disjoint block of
//! rows and returns only once all of them are written.

use gauss_core::{GaussCoreError, Scalar};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::partition::split_rows;
use crate::pivot::{pivot_rows, RowSwap};
use crate::worker::reduce_rows;

fn build_pool(thread_count: usize) -> Result<ThreadPool, GaussCoreError> {
    ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .thread_name(|i| format!("gauss-worker-{}", i))
        .build()
        .map_err(|e| GaussCoreError::WorkerPool(e.to_string()))
}

/// Eliminates `rows` in place, reusing `thread_count` pooled workers for every step.
pub(crate) fn eliminate<T: Scalar>(
    rows: &mut [Vec<T>],
    thread_count: usize,
    tolerance: T,
) -> Result<Vec<RowSwap>, GaussCoreError> {
    let n = rows.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    let pool = build_pool(thread_count)?;
    let mut swaps = Vec::new();
    for k in 0..n - 1 {
        log::debug!("Elimination step {}/{}", k + 1, n - 1);
        swaps.extend(pivot_rows(rows, k, tolerance)?);

        let (upper, lower) = rows.split_at_mut(k + 1);
        let pivot = upper[k].as_slice();
        pool.scope(move |s| {
            for (worker, (range, block)) in split_rows(k, lower, thread_count)
                .into_iter()
                .enumerate()
            {
                log::trace!("Step {}: worker {} reduces rows {:?}", k, worker, range);
                s.spawn(move |_| reduce_rows(k, pivot, block));
            }
        });
    }
    Ok(swaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_matches_sequential_reduction() {
        let original = vec![
            vec![2.0, 1.0, -1.0, 3.0, 8.0],
            vec![-3.0, -1.0, 2.0, 1.0, -11.0],
            vec![-2.0, 1.0, 2.0, 0.5, -3.0],
            vec![1.0, 4.0, 0.0, 6.0, 2.0],
        ];

        let mut expected = original.clone();
        for k in 0..3 {
            let (upper, lower) = expected.split_at_mut(k + 1);
            reduce_rows(k, &upper[k], lower);
        }

        let mut pooled = original;
        let swaps = eliminate(&mut pooled, 3, 1e-12).unwrap();
        assert!(swaps.is_empty());
        assert_eq!(pooled, expected);
    }

    #[test]
    fn test_pool_keeps_rows_after_singular_step() {
        // Column 1 vanishes below the first pivot, so step 1 is singular.
        let mut rows = vec![
            vec![1.0, 2.0, 3.0, 1.0],
            vec![2.0, 4.0, 1.0, 2.0],
            vec![3.0, 6.0, 5.0, 3.0],
        ];
        let err = eliminate(&mut rows, 2, 1e-12).unwrap_err();
        assert_eq!(err.singular_step(), Some(1));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![1.0, 2.0, 3.0, 1.0]);
        assert_eq!(rows[1], vec![0.0, 0.0, -5.0, 0.0]);
        assert_eq!(rows[2], vec![0.0, 0.0, -4.0, 0.0]);
    }

    #[test]
    fn test_pool_swaps_row_handles() {
        let mut rows = vec![vec![0.0, 1.0, 3.0], vec![1.0, 1.0, 4.0]];
        let swaps = eliminate(&mut rows, 4, 1e-12).unwrap();
        assert_eq!(swaps, vec![RowSwap { step: 0, row: 1 }]);
        assert_eq!(rows, vec![vec![1.0, 1.0, 4.0], vec![0.0, 1.0, 3.0]]);
    }

    #[test]
    fn test_pool_runs_on_requested_thread_count() {
        let pool = build_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }
}
