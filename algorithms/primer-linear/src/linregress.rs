//! Statistics-style regression of one column on another
//!
//! Reports the fitted line together with the correlation coefficient, the two-sided p-value of
//! the hypothesis "slope is zero" and the standard errors of slope and intercept. It serves as an
//! independent cross-check of the closed-form fit.
use crate::error::{LinearError, Result};
use crate::simple::{fit_line, is_constant};
use ndarray::{ArrayBase, Data, Ix1};
use primer::Float;
use statrs::distribution::{ContinuousCDF, StudentsT};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Result of [`linregress`]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinregressResult<F> {
    pub slope: F,
    pub intercept: F,
    /// Pearson correlation coefficient
    pub rvalue: F,
    /// Two-sided p-value for a t-test with `n - 2` degrees of freedom
    pub pvalue: F,
    /// Standard error of the slope
    pub stderr: F,
    /// Standard error of the intercept
    pub intercept_stderr: F,
}

/// Least-squares regression of `y` on `x` with the usual statistics
///
/// Fails like [`fit_line`]: columns of different length, fewer than two samples or non-finite
/// values are rejected with [`LinearError::InvalidInput`], a constant predictor with
/// [`LinearError::DegenerateInput`].
///
/// With exactly two samples no degrees of freedom are left. Both standard errors are zero then,
/// and the p-value is zero for a sloped line and one for a flat one.
pub fn linregress<F: Float, D: Data<Elem = F>, E: Data<Elem = F>>(
    x: &ArrayBase<D, Ix1>,
    y: &ArrayBase<E, Ix1>,
) -> Result<LinregressResult<F>> {
    let line = fit_line(x, y)?;
    let n = x.len();

    let dx = x.mapv(|v| v - line.mean_x());
    let dy = y.mapv(|v| v - line.mean_y());
    let ssxx = dx.dot(&dx);
    let ssyy = dy.dot(&dy);
    let ssxy = dx.dot(&dy);

    let rvalue = if is_constant(y) {
        F::zero()
    } else {
        (ssxy / (ssxx * ssyy).sqrt()).max(-F::one()).min(F::one())
    };

    let (pvalue, stderr, intercept_stderr) = if n == 2 {
        let pvalue = if y[0] == y[1] { F::one() } else { F::zero() };
        (pvalue, F::zero(), F::zero())
    } else {
        let df = F::cast(n - 2);
        let unexplained = F::one() - rvalue * rvalue;

        let stderr = (unexplained * ssyy / ssxx / df).sqrt();
        let intercept_stderr = stderr * (x.mapv(|v| v * v).sum() / F::cast(n)).sqrt();

        let pvalue = if unexplained <= F::zero() {
            F::zero()
        } else {
            let t = (rvalue * (df / unexplained).sqrt()).abs();
            two_sided_pvalue(t, n - 2)?
        };

        (pvalue, stderr, intercept_stderr)
    };

    Ok(LinregressResult {
        slope: line.slope(),
        intercept: line.intercept(),
        rvalue,
        pvalue,
        stderr,
        intercept_stderr,
    })
}

/// Probability of a Student t statistic with `df` degrees of freedom at least as extreme as `t`
fn two_sided_pvalue<F: Float>(t: F, df: usize) -> Result<F> {
    let t = t
        .to_f64()
        .ok_or_else(|| LinearError::Statistics("t statistic is not representable".to_string()))?;
    let dist = StudentsT::new(0.0, 1.0, df as f64)
        .map_err(|err| LinearError::Statistics(err.to_string()))?;

    Ok(F::cast(2.0 * (1.0 - dist.cdf(t))))
}
