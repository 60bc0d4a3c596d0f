use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaussCoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid system size: {0}")]
    InvalidSize(String),

    #[error("Failed to read matrix element [{row}][{col}]: {reason}")]
    InvalidElement {
        row: usize,
        col: usize, // col == n is the right-hand side
        reason: String,
    },

    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("System is singular at elimination step {step}")]
    SingularMatrix { step: usize },

    #[error("Thread count must be between 1 and {max} (got {got})")]
    InvalidThreadCount { got: usize, max: usize },

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),
}

impl GaussCoreError {
    /// Returns the elimination step at which the system was found singular, if any.
    pub fn singular_step(&self) -> Option<usize> {
        match self {
            GaussCoreError::SingularMatrix { step } => Some(*step),
            _ => None,
        }
    }
}
