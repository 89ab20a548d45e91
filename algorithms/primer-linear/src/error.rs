//! An error when fitting a linear model
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting a linear model
#[derive(Error, Debug)]
pub enum LinearError {
    /// Samples of different length, too few samples or non-finite values
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Well-formed samples which do not determine a unique line, e.g. a constant predictor
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error(transparent)]
    Linalg(#[from] linfa_linalg::LinalgError),
    /// The reference distribution could not be constructed
    #[error("statistics {0}")]
    Statistics(String),
    #[error(transparent)]
    BaseCrate(primer::Error),
}

/// Input conditions of the base crate keep their meaning
impl From<primer::Error> for LinearError {
    fn from(err: primer::Error) -> Self {
        match err {
            primer::Error::InvalidInput(msg) => LinearError::InvalidInput(msg),
            primer::Error::DegenerateInput(msg) => LinearError::DegenerateInput(msg),
            err => LinearError::BaseCrate(err),
        }
    }
}
