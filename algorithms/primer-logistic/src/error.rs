use thiserror::Error;
pub type Result<T> = std::result::Result<T, LogisticError>;

#[derive(Error, Debug)]
pub enum LogisticError {
    #[error(transparent)]
    BaseCrate(#[from] primer::Error),
    #[error("Expected exactly two classes for logistic regression, found {0}")]
    WrongNumberOfClasses(usize),
    #[error("Expected `x` and `y` to have same number of rows, got {0} != {1}")]
    MismatchedShapes(usize, usize),
    #[error("Values must be finite and not `Inf`, `-Inf` or `NaN`")]
    InvalidValues,
    #[error("alpha must be a non-negative, finite number")]
    InvalidAlpha,
    #[error("gradient_tolerance must be a positive, finite number")]
    InvalidGradientTolerance,
    #[error("max_iterations must be at least one")]
    InvalidMaxIterations,
    #[error("threshold needs to be between 0.0 and 1.0")]
    InvalidThreshold,
    #[error("solver did not converge: {0}")]
    NotConverged(String),
    /// Errors raised inside argmin's L-BFGS solver
    #[error("argmin {0}")]
    ArgMin(#[from] argmin::core::Error),
}
