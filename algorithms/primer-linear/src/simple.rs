//! Simple linear regression in closed form
//!
//! For a single predictor the least-squares line has an explicit solution. Centering both columns
//! on their means gives
//!
//! ```text
//! slope     = Σ (x_i - mean_x)(y_i - mean_y) / Σ (x_i - mean_x)²
//! intercept = mean_y - slope * mean_x
//! ```
use crate::error::{LinearError, Result};
use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, Ix2};
use primer::dataset::{AsTargets, DatasetBase};
use primer::metrics::SingleTargetRegression;
use primer::traits::{Fit, PredictInplace};
use primer::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Check that two columns can be paired up for a line fit
pub(crate) fn check_pairs<F: Float, D: Data<Elem = F>, E: Data<Elem = F>>(
    x: &ArrayBase<D, Ix1>,
    y: &ArrayBase<E, Ix1>,
) -> Result<()> {
    if x.len() != y.len() {
        return Err(LinearError::InvalidInput(format!(
            "predictor has {} values but outcome has {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(LinearError::InvalidInput(format!(
            "a line needs at least two samples, got {}",
            x.len()
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(LinearError::InvalidInput(
            "samples contain NaN or infinite values".to_string(),
        ));
    }

    Ok(())
}

/// A line fitted by closed-form least squares
///
/// Besides slope and intercept it keeps the means of both columns, which
/// are needed to center new samples the same way.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleLinearFit<F> {
    slope: F,
    intercept: F,
    mean_x: F,
    mean_y: F,
}

/// Whether every value equals the first one
pub(crate) fn is_constant<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix1>) -> bool {
    x.iter().all(|v| *v == x[0])
}

/// Fit the least-squares line through paired samples
///
/// Fails with [`LinearError::InvalidInput`] if the columns differ in length, hold fewer than two
/// samples or contain non-finite values, and with [`LinearError::DegenerateInput`] if every
/// predictor value is the same.
///
/// ```
/// use ndarray::array;
/// use primer_linear::fit_line;
///
/// let line = fit_line(&array![0., 1., 2.], &array![1., 3., 5.]).unwrap();
/// assert_eq!(line.slope(), 2.);
/// assert_eq!(line.intercept(), 1.);
/// ```
pub fn fit_line<F: Float, D: Data<Elem = F>, E: Data<Elem = F>>(
    x: &ArrayBase<D, Ix1>,
    y: &ArrayBase<E, Ix1>,
) -> Result<SimpleLinearFit<F>> {
    check_pairs(x, y)?;

    // the centered sum of squares of equal values can round to a tiny positive number
    if is_constant(x) {
        return Err(LinearError::DegenerateInput(
            "predictor has zero variance, the slope is undefined".to_string(),
        ));
    }

    let n = F::cast(x.len());
    let mean_x = x.sum() / n;
    let mean_y = y.sum() / n;

    let dx = x.mapv(|v| v - mean_x);
    let dy = y.mapv(|v| v - mean_y);

    let ssxx = dx.dot(&dx);

    let slope = dx.dot(&dy) / ssxx;
    let intercept = mean_y - slope * mean_x;

    tracing::debug!(
        slope = slope.to_f64(),
        intercept = intercept.to_f64(),
        "fitted line"
    );

    Ok(SimpleLinearFit {
        slope,
        intercept,
        mean_x,
        mean_y,
    })
}

impl<F: Float> SimpleLinearFit<F> {
    pub fn slope(&self) -> F {
        self.slope
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Mean of the predictor the line was fitted on
    pub fn mean_x(&self) -> F {
        self.mean_x
    }

    /// Mean of the outcome the line was fitted on
    pub fn mean_y(&self) -> F {
        self.mean_y
    }

    /// Evaluate the line at a single point
    pub fn predict_one(&self, x: F) -> F {
        self.intercept + self.slope * x
    }

    /// Evaluate the line at every point of `x`
    pub fn predict_column<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix1>) -> Array1<F> {
        x.mapv(|v| self.predict_one(v))
    }

    /// Center both columns on the means of the fit
    ///
    /// Returns `(x - mean_x, y - mean_y)`.
    pub fn centered<D: Data<Elem = F>, E: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix1>,
        y: &ArrayBase<E, Ix1>,
    ) -> Result<(Array1<F>, Array1<F>)> {
        if x.len() != y.len() {
            return Err(LinearError::InvalidInput(format!(
                "predictor has {} values but outcome has {}",
                x.len(),
                y.len()
            )));
        }

        Ok((x.mapv(|v| v - self.mean_x), y.mapv(|v| v - self.mean_y)))
    }

    /// Observed minus predicted outcome for every sample
    pub fn residuals<D: Data<Elem = F>, E: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix1>,
        y: &ArrayBase<E, Ix1>,
    ) -> Result<Array1<F>> {
        let residuals = self.predict_column(x).residuals(y)?;

        Ok(residuals)
    }

    /// Root mean squared error of the line on the samples
    pub fn rmse<D: Data<Elem = F>, E: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix1>,
        y: &ArrayBase<E, Ix1>,
    ) -> Result<F> {
        let rmse = self.predict_column(x).root_mean_squared_error(y)?;

        Ok(rmse)
    }
}

/// Closed-form least squares on a dataset with a single feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleLinearRegression;

impl<F: Float, D: Data<Elem = F>, T: AsTargets<Elem = F>>
    Fit<ArrayBase<D, Ix2>, T, LinearError> for SimpleLinearRegression
{
    type Object = SimpleLinearFit<F>;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let records = dataset.records();
        if records.ncols() != 1 {
            return Err(LinearError::InvalidInput(format!(
                "simple linear regression expects a single feature, got {}",
                records.ncols()
            )));
        }

        fit_line(&records.index_axis(Axis(1), 0), &dataset.as_targets())
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for SimpleLinearFit<F>
{
    /// Evaluate the line at the single feature column of `x`
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(x.ncols(), 1, "A line is evaluated on a single feature.");

        *y = self.predict_column(&x.index_axis(Axis(1), 0));
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}
