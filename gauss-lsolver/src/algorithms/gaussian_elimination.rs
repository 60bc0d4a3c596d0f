use std::time::{Duration, Instant};

use gauss_core::{GaussCoreError, LinearSystem, Scalar};
use serde::Serialize;

use super::{GaussianElimination, SolveAlgorithm, SolveResult};
use crate::back_substitution::solve_upper_triangular;
use crate::pivot::RowSwap;
use crate::scheduler::{Dispatch, EliminationScheduler};

#[derive(Debug, Clone, Serialize)]
pub struct EliminationMetadata {
    pub steps: usize,
    pub swaps: Vec<RowSwap>,
    pub thread_count: usize,
    pub dispatch: Dispatch,
    pub elimination_time: Duration,
    pub back_substitution_time: Duration,
}

impl EliminationMetadata {
    pub fn total_time(&self) -> Duration {
        self.elimination_time + self.back_substitution_time
    }
}

impl<T: Scalar> SolveAlgorithm<LinearSystem<T>> for GaussianElimination {
    type Value = T;
    type Metadata = EliminationMetadata;

    fn solve(
        &self,
        system: &mut LinearSystem<T>,
    ) -> Result<SolveResult<Self::Value, Self::Metadata>, GaussCoreError> {
        let scheduler = EliminationScheduler::new(self.thread_count)?
            .with_tolerance(self.tolerance)
            .with_dispatch(self.dispatch)
            .with_trailing_pivot_check(self.check_trailing_pivot);

        let start = Instant::now();
        let report = scheduler.run(system)?;
        let elimination_time = start.elapsed();

        let start = Instant::now();
        let x = solve_upper_triangular(system)?;
        let back_substitution_time = start.elapsed();

        Ok(SolveResult {
            x,
            metadata: EliminationMetadata {
                steps: report.steps,
                swaps: report.swaps,
                thread_count: self.thread_count,
                dispatch: self.dispatch,
                elimination_time,
                back_substitution_time,
            },
        })
    }
}
