use gauss_core::{GaussCoreError, Matrix, Scalar, PIVOT_TOLERANCE};

use crate::scheduler::{validate_thread_count, Dispatch};

pub struct SolveResult<V: Scalar, M> {
    pub x: Vec<V>,   // Solution vector
    pub metadata: M, // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm.
/// Generic over the matrix type it supports.
pub trait SolveAlgorithm<M: Matrix> {
    /// The numeric type the algorithm operates on (e.g., f32, f64).
    /// Must match the Matrix::Value type.
    type Value: Scalar;
    type Metadata: std::fmt::Debug;

    /// Solves the system held by the augmented matrix `system`, in place.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution vector x or a `GaussCoreError`.
    fn solve(
        &self,
        system: &mut M,
    ) -> Result<SolveResult<Self::Value, Self::Metadata>, GaussCoreError>;
}

// --- Algorithm Implementations ---
pub mod gaussian_elimination; // Parallel forward elimination + back substitution

pub use gaussian_elimination::EliminationMetadata;

/// Gaussian elimination with first-nonzero partial pivoting.
#[derive(Debug, Clone)]
pub struct GaussianElimination {
    pub thread_count: usize,
    pub tolerance: f64,
    pub dispatch: Dispatch,
    pub check_trailing_pivot: bool,
}

impl Default for GaussianElimination {
    fn default() -> Self {
        Self {
            thread_count: 1,
            tolerance: PIVOT_TOLERANCE,
            dispatch: Dispatch::Respawn,
            check_trailing_pivot: true,
        }
    }
}

impl GaussianElimination {
    /// Creates a new instance with specified parameters.
    pub fn with_params(
        thread_count: usize,
        tolerance: f64,
        dispatch: Dispatch,
    ) -> Result<Self, GaussCoreError> {
        validate_thread_count(thread_count)?;
        Ok(Self {
            thread_count,
            tolerance,
            dispatch,
            ..Self::default()
        })
    }
}
