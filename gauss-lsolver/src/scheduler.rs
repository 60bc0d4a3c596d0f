use std::thread;

use gauss_core::{GaussCoreError, LinearSystem, Scalar, MAX_THREADS, PIVOT_TOLERANCE};
use serde::Serialize;

use crate::partition::split_rows;
use crate::pivot::{pivot_rows, RowSwap};
use crate::pool;
use crate::worker::reduce_rows;

/// How worker threads are provided for each elimination step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// Spawn and join scoped threads at every step.
    #[default]
    Respawn,
    /// Keep one pool of threads for the whole elimination.
    Pooled,
}

/// Summary of a completed forward elimination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EliminationReport {
    pub steps: usize,
    pub swaps: Vec<RowSwap>,
}

/// Checks a worker count against `1..=MAX_THREADS`.
pub fn validate_thread_count(thread_count: usize) -> Result<(), GaussCoreError> {
    if (1..=MAX_THREADS).contains(&thread_count) {
        Ok(())
    } else {
        Err(GaussCoreError::InvalidThreadCount {
            got: thread_count,
            max: MAX_THREADS,
        })
    }
}

/// Drives forward elimination step by step.
///
/// Step `k + 1` never starts before every row reduced at step `k` has been
/// written: each step joins all of its workers before returning.
#[derive(Debug, Clone)]
pub struct EliminationScheduler {
    thread_count: usize,
    tolerance: f64,
    dispatch: Dispatch,
    check_trailing_pivot: bool,
}

impl EliminationScheduler {
    pub fn new(thread_count: usize) -> Result<Self, GaussCoreError> {
        validate_thread_count(thread_count)?;
        Ok(Self {
            thread_count,
            tolerance: PIVOT_TOLERANCE,
            dispatch: Dispatch::default(),
            check_trailing_pivot: true,
        })
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Whether the last diagonal entry, which is never a pivot, is checked after elimination.
    pub fn with_trailing_pivot_check(mut self, enabled: bool) -> Self {
        self.check_trailing_pivot = enabled;
        self
    }

    /// Performs elimination step `k` on `rows`: pivot selection, then reduction
    /// of every row below `k`, inline or on freshly spawned scoped threads.
    pub fn step<T: Scalar>(
        &self,
        rows: &mut [Vec<T>],
        k: usize,
    ) -> Result<Option<RowSwap>, GaussCoreError> {
        let swap = pivot_rows(rows, k, T::constant(self.tolerance))?;

        let (upper, lower) = rows.split_at_mut(k + 1);
        let pivot = upper[k].as_slice();

        if self.thread_count == 1 {
            reduce_rows(k, pivot, lower);
            return Ok(swap);
        }

        thread::scope(move |s| {
            for (worker, (range, block)) in split_rows(k, lower, self.thread_count)
                .into_iter()
                .enumerate()
            {
                log::trace!("Step {}: worker {} reduces rows {:?}", k, worker, range);
                s.spawn(move || reduce_rows(k, pivot, block));
            }
        });
        Ok(swap)
    }

    /// Runs all `n - 1` elimination steps, leaving `system` upper triangular.
    pub fn run<T: Scalar>(
        &self,
        system: &mut LinearSystem<T>,
    ) -> Result<EliminationReport, GaussCoreError> {
        let n = system.size();
        let steps = n.saturating_sub(1);
        let tolerance = T::constant(self.tolerance);
        log::info!(
            "Starting forward elimination: {} steps, {} threads, {:?} dispatch",
            steps,
            self.thread_count,
            self.dispatch
        );

        let rows = system.rows_mut();
        let swaps = if self.dispatch == Dispatch::Pooled && self.thread_count > 1 && steps > 0 {
            pool::eliminate(rows, self.thread_count, tolerance)?
        } else {
            let mut swaps = Vec::new();
            for k in 0..steps {
                log::debug!("Elimination step {}/{}", k + 1, steps);
                swaps.extend(self.step(rows, k)?);
            }
            swaps
        };

        if n > 0 {
            let last = rows[n - 1][n - 1].abs();
            let usable = last > tolerance;
            if !usable && self.check_trailing_pivot {
                return Err(GaussCoreError::SingularMatrix { step: n - 1 });
            }
            if !usable {
                log::warn!("Last diagonal entry {} is not a usable pivot", last);
            }
        }

        log::info!("Forward elimination finished ({} row swaps)", swaps.len());
        Ok(EliminationReport { steps, swaps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_core::generate_seeded;

    fn assert_column_cleared(rows: &[Vec<f64>], k: usize) {
        for (i, row) in rows.iter().enumerate().skip(k + 1) {
            for (j, value) in row.iter().enumerate().take(k + 1) {
                assert!(
                    value.abs() < 1e-9,
                    "matrix[{}][{}] = {} after step {}",
                    i,
                    j,
                    value,
                    k
                );
            }
        }
    }

    #[test]
    fn test_thread_count_bounds() {
        assert!(matches!(
            EliminationScheduler::new(0),
            Err(GaussCoreError::InvalidThreadCount { got: 0, max: 16 })
        ));
        assert!(EliminationScheduler::new(MAX_THREADS + 1).is_err());
        assert!(EliminationScheduler::new(1).is_ok());
        assert!(EliminationScheduler::new(MAX_THREADS).is_ok());
    }

    #[test]
    fn test_triangular_at_every_step_boundary() {
        let mut system = generate_seeded::<f64>(9, 5).unwrap().system;
        let scheduler = EliminationScheduler::new(3).unwrap();
        let rows = system.rows_mut();
        for k in 0..8 {
            scheduler.step(rows, k).unwrap();
            assert_column_cleared(rows, k);
        }
    }

    #[test]
    fn test_run_leaves_upper_triangular() {
        for dispatch in [Dispatch::Respawn, Dispatch::Pooled] {
            let mut system = generate_seeded::<f64>(12, 8).unwrap().system;
            let scheduler = EliminationScheduler::new(4)
                .unwrap()
                .with_dispatch(dispatch);
            let report = scheduler.run(&mut system).unwrap();
            assert_eq!(report.steps, 11);
            assert!(system.is_upper_triangular(1e-9), "{:?}", dispatch);
        }
    }

    #[test]
    fn test_thread_count_does_not_change_result() {
        let original = generate_seeded::<f64>(15, 21).unwrap().system;
        let mut sequential = original.clone();
        EliminationScheduler::new(1)
            .unwrap()
            .run(&mut sequential)
            .unwrap();

        for threads in [2, 5, 16] {
            for dispatch in [Dispatch::Respawn, Dispatch::Pooled] {
                let mut parallel = original.clone();
                EliminationScheduler::new(threads)
                    .unwrap()
                    .with_dispatch(dispatch)
                    .run(&mut parallel)
                    .unwrap();
                let expected = sequential.rows().iter().flatten();
                let actual = parallel.rows().iter().flatten();
                for (a, b) in expected.zip(actual) {
                    assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
                }
            }
        }
    }

    #[test]
    fn test_pooled_matches_respawn_exactly() {
        let original = generate_seeded::<f64>(23, 4).unwrap().system;
        for threads in [2, 7, MAX_THREADS] {
            let mut respawn = original.clone();
            let mut pooled = original.clone();
            let scheduler = EliminationScheduler::new(threads).unwrap();
            scheduler.run(&mut respawn).unwrap();
            scheduler
                .clone()
                .with_dispatch(Dispatch::Pooled)
                .run(&mut pooled)
                .unwrap();
            assert_eq!(respawn, pooled, "{} threads", threads);
        }
    }

    #[test]
    fn test_pivot_at_tolerance_is_singular() {
        for dispatch in [Dispatch::Respawn, Dispatch::Pooled] {
            let mut system = LinearSystem::<f64>::new(vec![
                vec![1e-12, 1.0, 1.0],
                vec![-1e-12, 2.0, 1.0],
            ])
            .unwrap();
            let err = EliminationScheduler::new(2)
                .unwrap()
                .with_dispatch(dispatch)
                .run(&mut system)
                .unwrap_err();
            assert_eq!(err.singular_step(), Some(0), "{:?}", dispatch);
        }
    }

    #[test]
    fn test_more_threads_than_rows() {
        let mut system = LinearSystem::new(vec![
            vec![2.0, 1.0, 1.0, 5.0],
            vec![4.0, 3.0, 3.0, 11.0],
            vec![8.0, 7.0, 9.0, 25.0],
        ])
        .unwrap();
        EliminationScheduler::new(MAX_THREADS)
            .unwrap()
            .run(&mut system)
            .unwrap();
        assert!(system.is_upper_triangular(1e-12));
    }

    #[test]
    fn test_records_swaps() {
        let mut system =
            LinearSystem::new(vec![vec![0.0, 1.0, 3.0], vec![1.0, 1.0, 4.0]]).unwrap();
        let report = EliminationScheduler::new(2)
            .unwrap()
            .run(&mut system)
            .unwrap();
        assert_eq!(report.swaps, vec![RowSwap { step: 0, row: 1 }]);
    }

    #[test]
    fn test_singular_column_stops_elimination() {
        for dispatch in [Dispatch::Respawn, Dispatch::Pooled] {
            let mut system = LinearSystem::new(vec![
                vec![0.0, 1.0, 2.0, 3.0, 1.0],
                vec![0.0, 4.0, 5.0, 6.0, 2.0],
                vec![0.0, 7.0, 8.0, 1.0, 3.0],
                vec![0.0, 2.0, 3.0, 4.0, 4.0],
            ])
            .unwrap();
            let err = EliminationScheduler::new(2)
                .unwrap()
                .with_dispatch(dispatch)
                .run(&mut system)
                .unwrap_err();
            assert_eq!(err.singular_step(), Some(0));
        }
    }

    #[test]
    fn test_trailing_pivot_check() {
        let dependent =
            || LinearSystem::new(vec![vec![1.0, 1.0, 2.0], vec![1.0, 1.0, 2.0]]).unwrap();

        let err = EliminationScheduler::new(1)
            .unwrap()
            .run(&mut dependent())
            .unwrap_err();
        assert_eq!(err.singular_step(), Some(1));

        let report = EliminationScheduler::new(1)
            .unwrap()
            .with_trailing_pivot_check(false)
            .run(&mut dependent())
            .unwrap();
        assert_eq!(report.steps, 1);
    }

    #[test]
    fn test_single_equation() {
        let mut system = LinearSystem::new(vec![vec![4.0, 8.0]]).unwrap();
        let report = EliminationScheduler::new(4).unwrap().run(&mut system).unwrap();
        assert_eq!(report.steps, 0);

        let mut zero = LinearSystem::new(vec![vec![0.0, 8.0]]).unwrap();
        let err = EliminationScheduler::new(4).unwrap().run(&mut zero).unwrap_err();
        assert_eq!(err.singular_step(), Some(0));
    }
}
