//! Ordinary Least Squares
#![allow(non_snake_case)]
use crate::error::{LinearError, Result};
use linfa_linalg::{qr::LeastSquaresQrInto, LinalgError};
use ndarray::{concatenate, s, Array1, Array2, ArrayBase, Axis, Data, Ix2};
use primer::dataset::{AsTargets, DatasetBase};
use primer::traits::{Fit, PredictInplace};
use primer::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// An ordinary least squares linear regression model.
///
/// LinearRegression fits a linear model to minimize the residual sum of
/// squares between the observed targets in the dataset, and the targets
/// predicted by the linear approximation.
///
/// Ordinary least squares regression solves the overconstrainted model
///
/// y = Ax + b
///
/// by finding x and b which minimize the L_2 norm ||y - Ax - b||_2.
///
/// The problem is solved with a QR decomposition of the design matrix. For a single feature the
/// result agrees with [`fit_line`](crate::fit_line) up to rounding.
///
/// ## Examples
///
/// ```rust
/// use primer::traits::{Fit, Predict};
/// use primer::metrics::SingleTargetRegression;
/// use primer_linear::LinearRegression;
///
/// let dataset = primer_datasets::grades_regression().unwrap();
/// let model = LinearRegression::default().fit(&dataset).unwrap();
/// let pred = model.predict(&dataset);
/// let r2 = pred.r2(&dataset).unwrap();
/// println!("r2 from prediction: {}", r2);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    fit_intercept: bool,
}

/// A fitted linear regression model which can be used for making predictions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression<F> {
    intercept: F,
    params: Array1<F>,
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression::new()
    }
}

/// Configure and fit a linear regression model
impl LinearRegression {
    /// Create a default linear regression model.
    /// By default, an intercept will be fitted.
    pub fn new() -> LinearRegression {
        LinearRegression {
            fit_intercept: true,
        }
    }

    /// Configure the linear regression model to fit an intercept.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.fit_intercept = intercept;
        self
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsTargets<Elem = F>>
    Fit<ArrayBase<D, Ix2>, T, LinearError> for LinearRegression
{
    type Object = FittedLinearRegression<F>;

    /// Fit a linear regression model given a feature matrix `X` and a target
    /// variable `y`.
    ///
    /// The feature matrix `X` must have shape `(n_samples, n_features)`
    ///
    /// The target variable `y` must have shape `(n_samples)`
    ///
    /// Returns a `FittedLinearRegression` object which contains the fitted
    /// parameters and can be used to `predict` values of the target variable
    /// for new feature values.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let X = dataset.records();
        let y = dataset.as_targets();

        let (n_samples, n_features) = X.dim();
        if n_samples < 2 {
            return Err(LinearError::InvalidInput(format!(
                "at least two samples needed, got {}",
                n_samples
            )));
        }
        if X.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(LinearError::InvalidInput(
                "samples contain NaN or infinite values".to_string(),
            ));
        }
        check_design(X, self.fit_intercept)?;

        let n_params = n_features + self.fit_intercept as usize;
        if n_samples < n_params {
            return Err(LinearError::DegenerateInput(format!(
                "{} samples cannot determine {} parameters",
                n_samples, n_params
            )));
        }

        let (intercept, params) = if self.fit_intercept {
            let X = concatenate(Axis(1), &[X.view(), Array2::ones((n_samples, 1)).view()])
                .map_err(primer::Error::from)?;
            let params = solve_least_squares(X, y.to_owned())?;
            let intercept = params[n_features];
            (intercept, params.slice(s![..n_features]).to_owned())
        } else {
            (F::zero(), solve_least_squares(X.to_owned(), y.to_owned())?)
        };

        if !intercept.is_finite() || params.iter().any(|p| !p.is_finite()) {
            return Err(LinearError::DegenerateInput(
                "design matrix is rank deficient".to_string(),
            ));
        }

        tracing::debug!(n_samples, n_features, "fitted ordinary least squares");

        Ok(FittedLinearRegression { intercept, params })
    }
}

/// Reject feature columns which cannot be told apart from the intercept
fn check_design<F: Float, D: Data<Elem = F>>(X: &ArrayBase<D, Ix2>, fit_intercept: bool) -> Result<()> {
    for (idx, column) in X.columns().into_iter().enumerate() {
        let first = column[0];
        let constant = column.iter().all(|v| *v == first);

        if constant && (fit_intercept || first == F::zero()) {
            return Err(LinearError::DegenerateInput(format!(
                "feature {} has zero variance",
                idx
            )));
        }
    }

    Ok(())
}

/// Find the b that minimizes the 2-norm of X b - y
/// by using the QR least squares solver from linfa-linalg
fn solve_least_squares<F: Float>(X: Array2<F>, y: Array1<F>) -> Result<Array1<F>> {
    let out = X
        .least_squares_into(y.insert_axis(Axis(1)))
        .map_err(|err| match err {
            LinalgError::NonInvertible => {
                LinearError::DegenerateInput("design matrix is rank deficient".to_string())
            }
            err => err.into(),
        })?
        .remove_axis(Axis(1))
        .to_owned();

    Ok(out)
}

/// View the fitted parameters and make predictions with a fitted
/// linear regresssion model.
impl<F: Float> FittedLinearRegression<F> {
    /// Get the fitted parameters
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to linear model
    /// learned from the training data distribution.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        *y = x.dot(&self.params) + self.intercept;
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}
