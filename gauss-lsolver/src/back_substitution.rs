//! Sequential back substitution on an upper-triangular augmented matrix.
//!
//! Diagonal entries are not re-checked here; forward elimination already
//! rejected every unusable pivot.

use gauss_core::{GaussCoreError, LinearSystem, Scalar};

/// Solves the upper-triangular system held in `rows`, last unknown first.
pub fn back_substitute<T: Scalar>(rows: &[Vec<T>]) -> Vec<T> {
    let n = rows.len();
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let row = &rows[i];
        let known = row[i + 1..n]
            .iter()
            .zip(&x[i + 1..])
            .fold(T::zero(), |acc, (&a, &xj)| acc + a * xj);
        x[i] = (row[n] - known) / row[i];
    }
    x
}

/// Runs back substitution on an eliminated system, stores a copy of the
/// solution in it and returns the solution.
pub fn solve_upper_triangular<T: Scalar>(
    system: &mut LinearSystem<T>,
) -> Result<Vec<T>, GaussCoreError> {
    log::info!("Starting back substitution");
    let x = back_substitute(system.rows());
    system.set_solution(x.clone())?;
    log::info!("Back substitution finished");
    Ok(x)
}

/// Largest absolute residual `|A_i * x - b_i|` over all equations of `system`.
pub fn residual_norm<T: Scalar>(system: &LinearSystem<T>, x: &[T]) -> Result<T, GaussCoreError> {
    let n = system.size();
    if x.len() != n {
        return Err(GaussCoreError::InvalidDimensions(format!(
            "Solution length ({}) does not match system size ({})",
            x.len(),
            n
        )));
    }
    Ok(system
        .rows()
        .iter()
        .map(|row| {
            let ax = row[..n]
                .iter()
                .zip(x)
                .fold(T::zero(), |acc, (&a, &xj)| acc + a * xj);
            (ax - row[n]).abs()
        })
        .fold(T::zero(), T::max))
}
