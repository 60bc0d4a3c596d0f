//! First-nonzero partial pivoting.
//!
//! A row is only exchanged when the current diagonal entry is (near) zero, and
//! the replacement is the first row below with a usable entry, not the one
//! with the largest magnitude. This avoids division by zero but does nothing to
//! limit element growth, so ill-conditioned systems can lose precision.

use gauss_core::{GaussCoreError, Scalar};
use serde::Serialize;

/// Outcome of pivot selection for one elimination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotChoice {
    /// The diagonal entry is usable as is.
    Keep,
    /// Exchange the pivot row with this row.
    Swap(usize),
}

/// A row exchange performed at an elimination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowSwap {
    pub step: usize,
    pub row: usize,
}

/// Decides the pivot for step `k` of an `n`-row system.
///
/// `column_entry(i)` must return `matrix[i][k]` for `k <= i < n`.
pub fn select_pivot<T, F>(
    k: usize,
    n: usize,
    tolerance: T,
    column_entry: F,
) -> Result<PivotChoice, GaussCoreError>
where
    T: Scalar,
    F: Fn(usize) -> T,
{
    if column_entry(k).abs() > tolerance {
        return Ok(PivotChoice::Keep);
    }
    (k + 1..n)
        .find(|&i| column_entry(i).abs() > tolerance)
        .map(PivotChoice::Swap)
        .ok_or(GaussCoreError::SingularMatrix { step: k })
}

/// Selects the pivot for step `k` and performs the row exchange in place.
pub fn pivot_rows<T: Scalar>(
    rows: &mut [Vec<T>],
    k: usize,
    tolerance: T,
) -> Result<Option<RowSwap>, GaussCoreError> {
    match select_pivot(k, rows.len(), tolerance, |i| rows[i][k])? {
        PivotChoice::Keep => Ok(None),
        PivotChoice::Swap(row) => {
            log::info!("Swapping rows {} and {}", k, row);
            rows.swap(k, row);
            Ok(Some(RowSwap { step: k, row }))
        }
    }
}
