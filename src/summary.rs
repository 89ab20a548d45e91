//! Descriptive statistics
//!
//! A compact `describe` for a single column, reporting count, mean, spread and quartiles, plus
//! the Pearson correlation between two columns.
use std::cmp::Ordering;
use std::fmt;

use ndarray::{ArrayBase, Data, Ix1};
use ndarray_stats::QuantileExt;

use crate::error::{Error, Result};
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Summary statistics of a single column
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<F> {
    pub count: usize,
    pub mean: F,
    /// Sample standard deviation (one degree of freedom removed), `NaN` for a single value
    pub std: F,
    pub min: F,
    pub q25: F,
    pub median: F,
    pub q75: F,
    pub max: F,
}

fn check_finite<F: Float, D: Data<Elem = F>>(column: &ArrayBase<D, Ix1>) -> Result<()> {
    if column.is_empty() {
        return Err(Error::InvalidInput("column has no values".to_string()));
    }
    if column.iter().any(|x| !x.is_finite()) {
        return Err(Error::InvalidInput(
            "column contains NaN or infinite values".to_string(),
        ));
    }

    Ok(())
}

/// Quantile `q` of sorted values, linearly interpolated between the closest ranks
fn quantile<F: Float>(sorted: &[F], q: f64) -> F {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = F::cast(position - lower as f64);

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Describe a column of values
///
/// Fails with [`Error::InvalidInput`] if the column is empty or contains non-finite values.
pub fn describe<F: Float, D: Data<Elem = F>>(column: &ArrayBase<D, Ix1>) -> Result<Summary<F>> {
    check_finite(column)?;

    let count = column.len();
    let mean = column.sum() / F::cast(count);
    let std = if count > 1 {
        column.std(F::one())
    } else {
        F::nan()
    };

    let min = *column
        .min()
        .map_err(|err| Error::InvalidInput(err.to_string()))?;
    let max = *column
        .max()
        .map_err(|err| Error::InvalidInput(err.to_string()))?;

    let mut sorted = column.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    Ok(Summary {
        count,
        mean,
        std,
        min,
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max,
    })
}

/// Pearson correlation coefficient between two columns
///
/// The result is clamped to `[-1, 1]`. Columns of different length, with fewer than two values
/// or with non-finite values are rejected as [`Error::InvalidInput`], a column without variance
/// as [`Error::DegenerateInput`].
pub fn pearson_correlation<F: Float, D: Data<Elem = F>, E: Data<Elem = F>>(
    x: &ArrayBase<D, Ix1>,
    y: &ArrayBase<E, Ix1>,
) -> Result<F> {
    if x.len() != y.len() {
        return Err(Error::mismatched_lengths(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "correlation needs at least two samples, got {}",
            x.len()
        )));
    }
    check_finite(x)?;
    check_finite(y)?;

    // compare values, centering equal values does not always give exact zeros
    if x.iter().all(|v| *v == x[0]) || y.iter().all(|v| *v == y[0]) {
        return Err(Error::DegenerateInput(
            "correlation is undefined for a column without variance".to_string(),
        ));
    }

    let n = F::cast(x.len());
    let mean_x = x.sum() / n;
    let mean_y = y.sum() / n;
    let dx = x.mapv(|v| v - mean_x);
    let dy = y.mapv(|v| v - mean_y);

    let ssxx = dx.dot(&dx);
    let ssyy = dy.dot(&dy);

    let r = dx.dot(&dy) / (ssxx * ssyy).sqrt();
    Ok(r.max(-F::one()).min(F::one()))
}

impl<F: fmt::Display> fmt::Display for Summary<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "count  {}", self.count)?;
        writeln!(f, "mean   {}", self.mean)?;
        writeln!(f, "std    {}", self.std)?;
        writeln!(f, "min    {}", self.min)?;
        writeln!(f, "25%    {}", self.q25)?;
        writeln!(f, "50%    {}", self.median)?;
        writeln!(f, "75%    {}", self.q75)?;
        write!(f, "max    {}", self.max)
    }
}
