//! `gauss-lsolver`: dense linear solver using Gaussian elimination with
//! partial pivoting.
//!
//! Forward elimination is parallelised across a fixed number of worker
//! threads per step; back substitution is sequential.

// Core modules
pub mod algorithms;
pub mod back_substitution;
pub mod partition;
pub mod pivot;
mod pool;
pub mod scheduler;
pub mod worker;

pub use algorithms::{EliminationMetadata, GaussianElimination, SolveAlgorithm, SolveResult};
pub use back_substitution::{back_substitute, residual_norm, solve_upper_triangular};
pub use scheduler::{Dispatch, EliminationReport, EliminationScheduler};

// Re-export from gauss_core
pub use gauss_core::{GaussCoreError, LinearSystem, Matrix, Scalar, MAX_THREADS, PIVOT_TOLERANCE};
