use crate::error::GaussCoreError;
use crate::traits::{Matrix, Scalar};

/// A dense linear system `Ax = b` held as an augmented matrix.
///
/// Each row is an owned buffer of `n + 1` values (coefficients followed by
/// the right-hand side), so swapping two equations moves the row handles and
/// never copies elements.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: Scalar = f64> {
    n: usize,
    rows: Vec<Vec<T>>,
    /// Written by back substitution; `None` until then.
    solution: Option<Vec<T>>,
}

impl<T: Scalar> LinearSystem<T> {
    /// Creates a system from augmented rows, each holding `n` coefficients and the RHS.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GaussCoreError> {
        let n = rows.len();
        if n == 0 {
            return Err(GaussCoreError::InvalidDimensions(
                "System must have at least one equation".to_string(),
            ));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n + 1) {
            return Err(GaussCoreError::InvalidDimensions(format!(
                "Row {} has {} values, expected {} ({} coefficients + RHS)",
                i,
                row.len(),
                n + 1,
                n
            )));
        }
        Ok(Self {
            n,
            rows,
            solution: None,
        })
    }

    /// Number of unknowns (and equations).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the augmented rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Returns the augmented rows for in-place elimination.
    /// Callers must keep every row exactly `n + 1` values long.
    pub fn rows_mut(&mut self) -> &mut [Vec<T>] {
        &mut self.rows
    }

    pub fn solution(&self) -> Option<&[T]> {
        self.solution.as_deref()
    }

    /// Stores the solution vector produced by back substitution.
    pub fn set_solution(&mut self, x: Vec<T>) -> Result<(), GaussCoreError> {
        if x.len() != self.n {
            return Err(GaussCoreError::InvalidDimensions(format!(
                "Solution length ({}) does not match system size ({})",
                x.len(),
                self.n
            )));
        }
        self.solution = Some(x);
        Ok(())
    }

    /// True when every entry strictly below the diagonal is within `tolerance` of zero.
    pub fn is_upper_triangular(&self, tolerance: T) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| row[..i].iter().all(|v| v.abs() <= tolerance))
    }
}

// The augmented matrix is n x (n + 1).
impl<T: Scalar> Matrix for LinearSystem<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.n, self.n + 1)
    }
}
