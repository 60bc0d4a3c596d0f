//! Random test systems with a known solution.

use crate::error::GaussCoreError;
use crate::linear_system::LinearSystem;
use crate::traits::Scalar;

pub use fastrand::Rng;

/// Added to every diagonal coefficient so generated systems stay well conditioned.
pub const DIAGONAL_SHIFT: f64 = 15.0;

/// Smallest size the generator accepts.
pub const MIN_GENERATED_SIZE: usize = 2;

/// A generated system together with the solution it was built from.
#[derive(Debug, Clone)]
pub struct GeneratedSystem<T: Scalar = f64> {
    pub system: LinearSystem<T>,
    pub true_solution: Vec<T>,
}

/// Uniform value from {-10.0, -9.9, ..., 9.9}.
fn random_value(rng: &mut Rng) -> f64 {
    f64::from(rng.i32(-100..100)) / 10.0
}

/// Generates an `n x n` system with a boosted diagonal and `b = A * x_true`.
pub fn generate_system<T: Scalar>(
    n: usize,
    rng: &mut Rng,
) -> Result<GeneratedSystem<T>, GaussCoreError> {
    if n < MIN_GENERATED_SIZE {
        return Err(GaussCoreError::InvalidSize(format!(
            "generated systems need at least {} equations (got {})",
            MIN_GENERATED_SIZE, n
        )));
    }

    let true_x: Vec<f64> = (0..n).map(|_| random_value(rng)).collect();

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row: Vec<f64> = (0..n).map(|_| random_value(rng)).collect();
        row[i] += DIAGONAL_SHIFT;
        let rhs: f64 = row.iter().zip(&true_x).map(|(a, x)| a * x).sum();
        row.push(rhs);
        rows.push(row.into_iter().map(T::constant).collect());
    }

    log::info!("Generated {}x{} system", n, n);
    Ok(GeneratedSystem {
        system: LinearSystem::new(rows)?,
        true_solution: true_x.into_iter().map(T::constant).collect(),
    })
}

/// Same as [`generate_system`] with a reproducible seed.
pub fn generate_seeded<T: Scalar>(
    n: usize,
    seed: u64,
) -> Result<GeneratedSystem<T>, GaussCoreError> {
    generate_system(n, &mut Rng::with_seed(seed))
}
