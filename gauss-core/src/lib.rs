//! # Gauss Core Library
//!
//! Provides the linear system data model, the shared error type, text-format
//! storage and a random test-system generator.

// Declare modules
pub mod error;
pub mod generator;
pub mod io;
pub mod linear_system;
pub mod traits;

// Re-export public types
pub use error::GaussCoreError;
pub use generator::{generate_seeded, generate_system, GeneratedSystem};
pub use linear_system::LinearSystem;
pub use traits::{Matrix, Scalar};

/// Upper bound on the number of elimination worker threads.
pub const MAX_THREADS: usize = 16;

/// Pivots with an absolute value at or below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-12;
