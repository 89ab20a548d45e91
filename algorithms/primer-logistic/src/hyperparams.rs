use crate::error::LogisticError;
use primer::{Float, ParamGuard};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified hyperparameter set ready for the estimation of a two-class logistic regression
/// model
///
/// See [`LogisticRegressionParams`] for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionValidParams<F> {
    pub(crate) alpha: F,
    pub(crate) fit_intercept: bool,
    pub(crate) max_iterations: u64,
    pub(crate) gradient_tolerance: F,
}

impl<F: Float> LogisticRegressionValidParams<F> {
    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn gradient_tolerance(&self) -> F {
        self.gradient_tolerance
    }
}

/// A hyperparameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```text
/// -Σ log σ(y_i (x_i·w + b)) + alpha / 2 * ||w||²
/// ```
/// with the labels `y_i` mapped to `-1` and `1`. The intercept `b` is not penalised.
///
/// # Parameters
///
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [alpha](Self::alpha) | `1.0` | L2 penalty of the weights | `[0, inf)` |
/// | [with_intercept](Self::with_intercept) | `true` | Fit an intercept | `false`, `true` |
/// | [max_iterations](Self::max_iterations) | `100` | L-BFGS iterations | `[1, inf)` |
/// | [gradient_tolerance](Self::gradient_tolerance) | `1e-4` | Stop once the gradient norm falls below | `(0, inf)` |
///
/// # Errors
///
/// The validation can fail with [`LogisticError::InvalidAlpha`],
/// [`LogisticError::InvalidGradientTolerance`] or [`LogisticError::InvalidMaxIterations`].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionParams<F>(LogisticRegressionValidParams<F>);

impl<F: Float> Default for LogisticRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> LogisticRegressionParams<F> {
    /// Start building a model from the default configuration.
    pub fn params() -> LogisticRegressionParams<F> {
        Self::new()
    }

    /// Creates a new set of hyperparameters with default configuration.
    pub fn new() -> LogisticRegressionParams<F> {
        Self(LogisticRegressionValidParams {
            alpha: F::cast(1.0),
            fit_intercept: true,
            max_iterations: 100,
            gradient_tolerance: F::cast(1e-4),
        })
    }

    /// Set the regularization parameter `alpha` used for L2 regularization,
    /// defaults to `1.0`.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Configure if an intercept should be fitted, defaults to `true`.
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }

    /// Configure the maximum number of iterations that the solver should perform,
    /// defaults to `100`.
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Configure the gradient norm below which the solver stops,
    /// defaults to `1e-4`.
    pub fn gradient_tolerance(mut self, gradient_tolerance: F) -> Self {
        self.0.gradient_tolerance = gradient_tolerance;
        self
    }
}

impl<F: Float> ParamGuard for LogisticRegressionParams<F> {
    type Checked = LogisticRegressionValidParams<F>;
    type Error = LogisticError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if !self.0.alpha.is_finite() || self.0.alpha < F::zero() {
            return Err(LogisticError::InvalidAlpha);
        }
        if !self.0.gradient_tolerance.is_finite() || self.0.gradient_tolerance <= F::zero() {
            return Err(LogisticError::InvalidGradientTolerance);
        }
        if self.0.max_iterations == 0 {
            return Err(LogisticError::InvalidMaxIterations);
        }

        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
