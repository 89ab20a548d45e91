//! Error types in primer
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    /// Inputs that cannot be used at all, e.g. columns of different length
    /// or too few samples for the requested computation
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Inputs of the right shape whose values make the result undefined,
    /// e.g. a predictor without any variance
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}

impl Error {
    pub(crate) fn mismatched_lengths(expected: usize, found: usize) -> Error {
        Error::InvalidInput(format!(
            "expected sequences of equal length, got {} and {}",
            expected, found
        ))
    }
}
