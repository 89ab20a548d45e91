//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables. All of them follow
//! the same convention: the metric is called on the prediction and compared to the ground truth,
//!
//! ```ignore
//! prediction.root_mean_squared_error(&observed)
//! ```
//!
//! Both sides have to be non-empty and of the same length, otherwise an
//! [`Error::InvalidInput`](crate::Error::InvalidInput) is returned.

use crate::dataset::{AsTargets, DatasetBase, Records};
use crate::error::{Error, Result};
use crate::Float;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use std::cmp::Ordering;

/// Check that prediction and ground truth can be compared element-wise
fn paired<'a, F>(
    prediction: ArrayView1<'a, F>,
    ground_truth: ArrayView1<'a, F>,
) -> Result<(ArrayView1<'a, F>, ArrayView1<'a, F>)> {
    if prediction.len() != ground_truth.len() {
        return Err(Error::mismatched_lengths(ground_truth.len(), prediction.len()));
    }
    if prediction.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compare empty sequences".to_string(),
        ));
    }

    Ok((prediction, ground_truth))
}

/// Regression metrices trait for single targets
///
/// It is implemented for one-dimensional arrays and for datasets, so a prediction can be compared
/// to the targets of a dataset directly.
pub trait SingleTargetRegression<F: Float, T: AsTargets<Elem = F>>: AsTargets<Elem = F> {
    /// Residuals, the observed value minus the predicted one for every sample
    fn residuals(&self, compare_to: T) -> Result<Array1<F>> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;

        Ok(&ground_truth - &prediction)
    }

    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: T) -> Result<F> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;

        Ok((&prediction - &ground_truth)
            .iter()
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max))
    }

    /// Mean error between two continuous variables
    fn mean_absolute_error(&self, compare_to: T) -> Result<F> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;
        let n = F::cast(prediction.len());

        Ok((&prediction - &ground_truth).mapv(|x| x.abs()).sum() / n)
    }

    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: T) -> Result<F> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;
        let n = F::cast(prediction.len());

        Ok((&prediction - &ground_truth).mapv(|x| x * x).sum() / n)
    }

    /// Root mean squared error, in the unit of the outcome
    ///
    /// Never negative and zero exactly when every prediction equals its observation.
    fn root_mean_squared_error(&self, compare_to: T) -> Result<F> {
        self.mean_squared_error(compare_to).map(|mse| mse.sqrt())
    }

    /// Median absolute error between two continuous variables
    fn median_absolute_error(&self, compare_to: T) -> Result<F> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;

        let mut abs_error = (&prediction - &ground_truth).mapv(|x| x.abs()).to_vec();
        abs_error.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let mid = abs_error.len() / 2;
        if abs_error.len() % 2 == 0 {
            Ok((abs_error[mid - 1] + abs_error[mid]) / F::cast(2.0))
        } else {
            Ok(abs_error[mid])
        }
    }

    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable
    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean is taken over the ground truth, not over the prediction
    fn r2(&self, compare_to: T) -> Result<F> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;
        let mean = ground_truth.sum() / F::cast(ground_truth.len());

        Ok(F::one()
            - (&prediction - &ground_truth).mapv(|x| x * x).sum()
                / (ground_truth.mapv(|x| (x - mean) * (x - mean)).sum() + F::cast(1e-10)))
    }

    /// Same as R-Squared but the residuals are centered before summing them up
    fn explained_variance(&self, compare_to: T) -> Result<F> {
        let (prediction, ground_truth) = paired(self.as_targets(), compare_to.as_targets())?;
        let n = F::cast(ground_truth.len());
        let diff = &prediction - &ground_truth;

        let mean = ground_truth.sum() / n;
        let mean_error = diff.sum() / n;

        Ok(F::one()
            - diff.mapv(|x| (x - mean_error) * (x - mean_error)).sum()
                / (ground_truth.mapv(|x| (x - mean) * (x - mean)).sum() + F::cast(1e-10)))
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsTargets<Elem = F>> SingleTargetRegression<F, T>
    for ArrayBase<D, Ix1>
{
}

impl<F: Float, R: Records, T: AsTargets<Elem = F>, T2: AsTargets<Elem = F>>
    SingleTargetRegression<F, T2> for DatasetBase<R, T>
{
}
