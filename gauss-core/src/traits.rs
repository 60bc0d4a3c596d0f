use num_traits::Float;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Floating-point element type of a linear system.
/// Needs Send + Sync so rows can be handed to worker threads.
pub trait Scalar: Float + FromStr + Display + Debug + Default + Send + Sync + 'static {
    /// Converts an `f64` constant (tolerances, generator values) into this type.
    fn constant(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::nan)
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// Generic trait representing a matrix.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f32, f64).
    type Value: Copy + Debug + Default;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);
}
