//! # Logistic Regression
//!
//! `primer-logistic` provides a two class [logistic regression model](LogisticRegression) for
//! the `primer` toolkit. It classifies samples by passing a linear combination of their features
//! through the sigmoid function and thresholding the resulting probability.
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example grades
//! ```
//!
mod argmin_param;
pub mod error;
mod float;
mod hyperparams;

use argmin::core::observers::{Observe, ObserverMode};
use argmin::core::{CostFunction, Executor, Gradient, State, TerminationReason, KV};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use argmin_param::ArgminParam;
use ndarray::{s, Array1, ArrayBase, ArrayView1, Data, Ix2, Zip};
use num_traits::ToPrimitive;
use primer::dataset::{AsTargets, DatasetBase, Label};
use primer::metrics::{ConfusionMatrix, ToConfusionMatrix};
use primer::traits::{Fit, Predict, PredictInplace};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

pub use error::{LogisticError, Result};
pub use float::Float;
pub use hyperparams::{LogisticRegressionParams, LogisticRegressionValidParams};

/// A two-class logistic regression model.
///
/// Logistic regression combines linear models with
/// the sigmoid function `sigm(x) = 1/(1+exp(-x))`
/// to learn a family of functions that map the feature space to `[0,1]`.
///
/// The predicted value is interpreted as the probability that the sample belongs to the larger
/// of the two classes. A threshold can be set in the [fitted model](FittedLogisticRegression)
/// to decide the minimum probability needed to assign that class, which defaults to `0.5`.
///
/// Any binary set of labels can be used, not necessarily `0` and `1`.
///
/// l2 regularization is weighted by parameter `alpha`. Setting `alpha` to zero removes
/// regularization and the problem solved minimizes only the empirical risk, which has no
/// finite solution for perfectly separable classes.
///
/// ## Examples
///
/// ```rust
/// use primer::traits::{Fit, Predict};
/// use primer_logistic::LogisticRegression;
///
/// let dataset = primer_datasets::grades_classification().unwrap();
/// let model = LogisticRegression::params().fit(&dataset).unwrap();
/// let prediction = model.predict(&dataset);
/// ```
pub type LogisticRegression<F> = LogisticRegressionParams<F>;

/// Number of past updates L-BFGS keeps to approximate the inverse Hessian
const LBFGS_HISTORY: usize = 10;

impl<C, F, D, T> Fit<ArrayBase<D, Ix2>, T, LogisticError> for LogisticRegressionValidParams<F>
where
    C: Ord + Clone,
    F: Float,
    D: Data<Elem = F>,
    T: AsTargets<Elem = C>,
{
    type Object = FittedLogisticRegression<F, C>;

    /// Given a 2-dimensional feature matrix array `x` with shape
    /// (n_samples, n_features) and an array of target classes to predict,
    /// create a `FittedLogisticRegression` object which allows making
    /// predictions.
    ///
    /// The array of target classes `y` must have exactly two distinct
    /// values, (e.g. `false` and `true`, 0 and 1, "fail" and "pass", ...), which
    /// represent the two different classes the model is supposed to predict.
    ///
    /// This method returns an error if any of the preconditions are violated,
    /// i.e. any values are `Inf` or `NaN`, `y` doesn't have as many items as
    /// `x` has rows, or the solver diverged.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let (x, y) = (dataset.records(), dataset.targets());
        let (labels, target) = label_classes(y.as_targets())?;
        validate_data(x, &target)?;

        let problem = LogisticRegressionProblem {
            x,
            target: &target,
            alpha: self.alpha,
        };
        let w = self.minimize(problem)?;
        let (params, intercept) = convert_params(x.ncols(), &w);

        Ok(FittedLogisticRegression::new(
            intercept,
            params.to_owned(),
            labels,
        ))
    }
}

type LBFGSType<F> = LBFGS<
    MoreThuenteLineSearch<ArgminParam<F>, ArgminParam<F>, F>,
    ArgminParam<F>,
    ArgminParam<F>,
    F,
>;

impl<F: Float> LogisticRegressionValidParams<F> {
    fn setup_solver(&self) -> Result<LBFGSType<F>> {
        let linesearch = MoreThuenteLineSearch::new();
        let solver =
            LBFGS::new(linesearch, LBFGS_HISTORY).with_tolerance_grad(self.gradient_tolerance)?;

        Ok(solver)
    }

    /// Run L-BFGS on the penalised logistic loss, starting from zero
    fn minimize<A: Data<Elem = F>>(
        &self,
        problem: LogisticRegressionProblem<'_, F, A>,
    ) -> Result<Array1<F>> {
        let init = ArgminParam(Array1::zeros(problem.n_params(self.fit_intercept)));
        let solver = self.setup_solver()?;

        let mut result = Executor::new(problem, solver)
            .configure(|state| state.param(init).max_iters(self.max_iterations))
            .add_observer(IterationLogger, ObserverMode::Always)
            .run()?;

        let iterations = result.state.get_iter();
        if let Some(TerminationReason::MaxItersReached) = result.state.get_termination_reason() {
            tracing::warn!(
                max_iterations = self.max_iterations,
                "gradient tolerance not reached, returning the best iterate"
            );
        }

        let w = result
            .state
            .take_best_param()
            .ok_or_else(|| {
                LogisticError::NotConverged(format!("no iterate after {} iterations", iterations))
            })?
            .into_array();

        if w.iter().any(|v| !v.is_finite()) {
            return Err(LogisticError::NotConverged(format!(
                "non-finite parameters after {} iterations",
                iterations
            )));
        }

        tracing::debug!(
            iterations,
            loss = result.state.get_best_cost().to_f64(),
            "logistic regression fitted"
        );

        Ok(w)
    }
}

/// Emits a `debug!` event for every solver iteration
struct IterationLogger;

impl<I: State> Observe<I> for IterationLogger {
    fn observe_iter(&mut self, state: &I, _kv: &KV) -> std::result::Result<(), argmin::core::Error> {
        tracing::debug!(
            iteration = state.get_iter(),
            loss = state.get_cost().to_f64(),
            best_loss = state.get_best_cost().to_f64(),
            "l-bfgs iteration"
        );
        Ok(())
    }
}

/// Ensure that `x` and `y` have the same number of samples and that all values are finite.
fn validate_data<F: Float, A: Data<Elem = F>>(x: &ArrayBase<A, Ix2>, y: &Array1<F>) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(LogisticError::MismatchedShapes(x.nrows(), y.len()));
    }
    if x.iter().any(|x| !x.is_finite()) {
        return Err(LogisticError::InvalidValues);
    }

    Ok(())
}

/// The two classes of a fitted model
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
struct ClassLabels<C> {
    negative: C,
    positive: C,
}

/// Identify the distinct values of the classes `y` and associate
/// the target labels `-1.0` and `1.0` to them. -1.0 always labels the
/// smaller class (by `Ord`) and 1.0 always labels the larger class.
///
/// It is an error to have anything else than two classes.
fn label_classes<F: Float, C: Ord + Clone>(y: ArrayView1<C>) -> Result<(ClassLabels<C>, Array1<F>)> {
    let mut classes = y.iter().collect::<Vec<_>>();
    classes.sort();
    classes.dedup();

    if classes.len() != 2 {
        return Err(LogisticError::WrongNumberOfClasses(classes.len()));
    }

    let labels = ClassLabels {
        negative: classes[0].clone(),
        positive: classes[1].clone(),
    };
    let target = y
        .iter()
        .map(|class| {
            if *class == labels.positive {
                F::POSITIVE_LABEL
            } else {
                F::NEGATIVE_LABEL
            }
        })
        .collect::<Array1<F>>();

    Ok((labels, target))
}

/// Split the solver vector into weights and intercept. The intercept, if fitted, is stored last.
fn convert_params<F: Float>(n_features: usize, w: &Array1<F>) -> (ArrayView1<F>, F) {
    if w.len() == n_features + 1 {
        (w.slice(s![..n_features]), w[n_features])
    } else {
        (w.view(), F::zero())
    }
}

/// The logistic function
fn logistic<F: Float>(x: F) -> F {
    F::one() / (F::one() + (-x).exp())
}

/// A numerically stable version of the log of the logistic function.
///
/// Follows scikit-learn
/// https://github.com/scikit-learn/scikit-learn/blob/0.23.1/sklearn/utils/_logistic_sigmoid.pyx
fn log_logistic<F: Float>(x: F) -> F {
    if x > F::zero() {
        -(F::one() + (-x).exp()).ln()
    } else {
        x - (F::one() + x.exp()).ln()
    }
}

/// Computes the logistic loss assuming the training labels $y \in {-1, 1}$
///
/// Because the logistic function fullfills $\sigma(-z) = 1 - \sigma(z)$
/// we can write $P(y|z) = \sigma(yz)$ for both $y=1$ and $y=-1$, so the loss reads
/// $$-\sum_{i=1}^{N} \log(\sigma(y_i z_i)) + \frac{\alpha}{2}\text{params}^T\text{params}$$
fn logistic_loss<F: Float, A: Data<Elem = F>>(
    x: &ArrayBase<A, Ix2>,
    y: &Array1<F>,
    alpha: F,
    w: &Array1<F>,
) -> F {
    let (params, intercept) = convert_params(x.ncols(), w);
    let yz = (x.dot(&params) + intercept) * y;

    -yz.mapv(log_logistic).sum() + F::cast(0.5) * alpha * params.dot(&params)
}

/// Computes the gradient of the logistic loss function
fn logistic_grad<F: Float, A: Data<Elem = F>>(
    x: &ArrayBase<A, Ix2>,
    y: &Array1<F>,
    alpha: F,
    w: &Array1<F>,
) -> Array1<F> {
    let n_features = x.ncols();
    let (params, intercept) = convert_params(n_features, w);
    let yz = ((x.dot(&params) + intercept) * y).mapv(logistic);
    let residual = (yz - F::one()) * y;

    let mut grad = Array1::zeros(w.len());
    grad.slice_mut(s![..n_features])
        .assign(&(x.t().dot(&residual) + &params * alpha));
    if w.len() > n_features {
        grad[n_features] = residual.sum();
    }

    grad
}

/// The penalised logistic loss of a training set, as seen by argmin
struct LogisticRegressionProblem<'a, F: Float, A: Data<Elem = F>> {
    x: &'a ArrayBase<A, Ix2>,
    target: &'a Array1<F>,
    alpha: F,
}

impl<'a, F: Float, A: Data<Elem = F>> LogisticRegressionProblem<'a, F, A> {
    fn n_params(&self, fit_intercept: bool) -> usize {
        self.x.ncols() + fit_intercept as usize
    }
}

impl<'a, F: Float, A: Data<Elem = F>> CostFunction for LogisticRegressionProblem<'a, F, A> {
    type Param = ArgminParam<F>;
    type Output = F;

    fn cost(&self, p: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        Ok(logistic_loss(self.x, self.target, self.alpha, p.as_array()))
    }
}

impl<'a, F: Float, A: Data<Elem = F>> Gradient for LogisticRegressionProblem<'a, F, A> {
    type Param = ArgminParam<F>;
    type Gradient = ArgminParam<F>;

    fn gradient(&self, p: &Self::Param) -> std::result::Result<Self::Gradient, argmin::core::Error> {
        Ok(ArgminParam(logistic_grad(
            self.x,
            self.target,
            self.alpha,
            p.as_array(),
        )))
    }
}

/// A fitted logistic regression which can make predictions
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLogisticRegression<F, C> {
    threshold: F,
    intercept: F,
    params: Array1<F>,
    labels: ClassLabels<C>,
}

impl<F: Float, C: Clone> FittedLogisticRegression<F, C> {
    fn new(intercept: F, params: Array1<F>, labels: ClassLabels<C>) -> FittedLogisticRegression<F, C> {
        FittedLogisticRegression {
            threshold: F::cast(0.5),
            intercept,
            params,
            labels,
        }
    }

    /// Set the probability threshold for which the positive class will be
    /// predicted. Defaults to 0.5.
    ///
    /// Thresholds outside of `[0, 1]` are rejected with [`LogisticError::InvalidThreshold`].
    pub fn set_threshold(mut self, threshold: F) -> Result<FittedLogisticRegression<F, C>> {
        if !(threshold >= F::zero() && threshold <= F::one()) {
            return Err(LogisticError::InvalidThreshold);
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> F {
        self.threshold
    }

    /// Get the model intercept
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Get the model coefficients
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// The class predicted for probabilities below the threshold
    pub fn negative_class(&self) -> &C {
        &self.labels.negative
    }

    /// The class predicted for probabilities at or above the threshold
    pub fn positive_class(&self) -> &C {
        &self.labels.positive
    }

    /// Given a feature matrix, predict the probabilities that a sample
    /// should be classified as the positive class.
    pub fn predict_probabilities<A: Data<Elem = F>>(&self, x: &ArrayBase<A, Ix2>) -> Array1<F> {
        (x.dot(&self.params) + self.intercept).mapv(logistic)
    }
}

impl<F: Float, C: Label + Ord> FittedLogisticRegression<F, C> {
    /// Compare the predictions for `dataset` with its targets. Both classes of the model always
    /// get a row and a column, even when a split holds only one of them.
    pub fn confusion_matrix<D, T>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
    ) -> Result<ConfusionMatrix<C>>
    where
        D: Data<Elem = F>,
        T: AsTargets<Elem = C>,
    {
        let predicted: Array1<C> = self.predict(dataset);
        let classes = [self.labels.negative.clone(), self.labels.positive.clone()];

        Ok(predicted.confusion_matrix_with_labels(dataset, &classes)?)
    }

    /// Fraction of samples in `dataset` whose class is predicted correctly
    pub fn score<D, T>(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<f32>
    where
        D: Data<Elem = F>,
        T: AsTargets<Elem = C>,
    {
        Ok(self.confusion_matrix(dataset)?.accuracy())
    }
}

impl<C: Clone, F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<C>>
    for FittedLogisticRegression<F, C>
{
    /// Given a feature matrix, predict the classes learned when the model was
    /// fitted.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<C>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.params.len(),
            "Number of data features must match the number of features the model was trained with."
        );

        Zip::from(&self.predict_probabilities(x))
            .and(y)
            .for_each(|prob, out| {
                *out = if *prob >= self.threshold {
                    self.labels.positive.clone()
                } else {
                    self.labels.negative.clone()
                }
            });
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<C> {
        Array1::from_elem(x.nrows(), self.labels.negative.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use primer::prelude::*;
    use ndarray::{array, Array2};

    fn ten_points() -> Array2<f64> {
        Array2::from_shape_fn((10, 1), |(i, _)| i as f64)
    }

    /// Loss on ten points with the labels already mapped to -1 and 1, the way `fit` hands them
    /// to the solver. Expected values evaluated in double precision from the closed form.
    #[test]
    fn test_logistic_loss() {
        let x = ten_points();
        let y = array![-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let ws = vec![
            array![0.0, 0.0],
            array![0.0, 1.0],
            array![1.0, 0.0],
            array![1.0, 1.0],
            array![0.0, -1.0],
            array![-1.0, 0.0],
            array![-1.0, -1.0],
        ];
        let alphas = vec![0.0, 1.0, 10.0];
        let expecteds = vec![
            6.931471805599453,
            6.931471805599453,
            6.931471805599453,
            7.132616875182227,
            7.132616875182227,
            7.132616875182227,
            7.210635467255934,
            7.710635467255934,
            12.210635467255933,
            10.517533685595206,
            11.017533685595206,
            15.517533685595206,
            9.132616875182228,
            9.132616875182228,
            9.132616875182228,
            40.21063546725593,
            40.71063546725593,
            45.21063546725593,
            45.517533685595204,
            46.017533685595204,
            50.517533685595204,
        ];

        for ((w, alpha), exp) in ws
            .iter()
            .flat_map(|w| alphas.iter().map(move |&alpha| (w, alpha)))
            .zip(&expecteds)
        {
            assert_abs_diff_eq!(logistic_loss(&x, &y, alpha, w), *exp, epsilon = 1e-12);
        }
    }

    /// Gradient for the same grid of weights and penalties as the loss test
    #[test]
    fn test_logistic_grad() {
        let x = ten_points();
        let y = array![-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let ws = vec![
            array![0.0, 0.0],
            array![0.0, 1.0],
            array![1.0, 0.0],
            array![1.0, 1.0],
            array![0.0, -1.0],
            array![-1.0, 0.0],
            array![-1.0, -1.0],
        ];
        let alphas = vec![0.0, 1.0, 10.0];
        let expecteds = vec![
            array![-16.5, -1.],
            array![-16.5, -1.],
            array![-16.5, -1.],
            array![-6.1023639616, 1.3105857863],
            array![-6.1023639616, 1.3105857863],
            array![-6.1023639616, 1.3105857863],
            array![5.2199595711, 3.0359083035],
            array![6.2199595711, 3.0359083035],
            array![15.2199595711, 3.0359083035],
            array![5.6836426868, 3.5358629056],
            array![6.6836426868, 3.5358629056],
            array![15.6836426868, 3.5358629056],
            array![-26.8976360384, -3.3105857863],
            array![-26.8976360384, -3.3105857863],
            array![-26.8976360384, -3.3105857863],
            array![-38.2199595711, -5.0359083035],
            array![-39.2199595711, -5.0359083035],
            array![-48.2199595711, -5.0359083035],
            array![-38.6836426868, -5.5358629056],
            array![-39.6836426868, -5.5358629056],
            array![-48.6836426868, -5.5358629056],
        ];

        for ((w, alpha), exp) in ws
            .iter()
            .flat_map(|w| alphas.iter().map(move |&alpha| (w, alpha)))
            .zip(&expecteds)
        {
            let actual = logistic_grad(&x, &y, alpha, w);
            assert!(actual.abs_diff_eq(exp, 1e-9));
        }
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let x = ten_points();
        let y = array![-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let w = array![0.3, -1.2];
        let alpha = 1.0;
        let h = 1e-6;

        let grad = logistic_grad(&x, &y, alpha, &w);
        for j in 0..2 {
            let mut forward = w.clone();
            forward[j] += h;
            let mut backward = w.clone();
            backward[j] -= h;
            let slope = (logistic_loss(&x, &y, alpha, &forward)
                - logistic_loss(&x, &y, alpha, &backward))
                / (2. * h);

            assert_abs_diff_eq!(grad[j], slope, epsilon = 1e-5);
        }
    }

    #[test]
    fn problem_exposes_loss_and_gradient_to_the_solver() {
        let x = ten_points();
        let y = array![-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let problem = LogisticRegressionProblem {
            x: &x,
            target: &y,
            alpha: 1.0,
        };
        let p = ArgminParam(array![1.0, 1.0]);

        assert_eq!(problem.n_params(true), 2);
        assert_abs_diff_eq!(problem.cost(&p).unwrap(), 11.017533685595206, epsilon = 1e-12);
        assert!(problem
            .gradient(&p)
            .unwrap()
            .as_array()
            .abs_diff_eq(&array![6.6836426868, 3.5358629056], 1e-9));
    }

    #[test]
    fn labels_the_smaller_class_negative() {
        let y = array!["pass", "fail", "pass"];
        let (labels, target) = label_classes::<f64, _>(y.view()).unwrap();

        assert_eq!(labels.negative, "fail");
        assert_eq!(labels.positive, "pass");
        assert_eq!(target, array![1., -1., 1.]);
    }

    #[test]
    fn simple_example_1() {
        let x = array![[-1.0], [-0.01], [0.01], [1.0]];
        let y = array![0usize, 0, 1, 1];
        let dataset = Dataset::new(x, y).unwrap();
        let res = LogisticRegression::default().fit(&dataset).unwrap();

        assert_abs_diff_eq!(res.intercept(), 0.0, epsilon = 1e-6);
        assert!(res.params().abs_diff_eq(&array![0.682], 1e-3));
        assert_eq!(&res.predict(dataset.records()), dataset.targets());
    }

    #[test]
    fn simple_example_1_cats_dogs() {
        let x = array![[0.01], [1.0], [-1.0], [-0.01]];
        let y = array!["dog", "dog", "cat", "cat"];
        let dataset = Dataset::new(x, y).unwrap();
        let res = LogisticRegression::default().fit(&dataset).unwrap();

        assert_eq!(res.negative_class(), &"cat");
        assert_eq!(res.positive_class(), &"dog");
        assert!(res
            .predict_probabilities(dataset.records())
            .abs_diff_eq(&array![0.501, 0.664, 0.335, 0.498], 1e-3));
        assert_eq!(&res.predict(dataset.records()), dataset.targets());
    }

    #[test]
    fn simple_example_2() {
        let dataset =
            Dataset::new(ten_points(), array![0usize, 0, 0, 0, 1, 1, 1, 1, 1, 1]).unwrap();
        let res = LogisticRegression::params()
            .alpha(1.0)
            .fit(&dataset)
            .unwrap();

        assert_abs_diff_eq!(res.intercept(), -4.126, epsilon = 1e-2);
        assert!(res.params().abs_diff_eq(&array![1.181], 1e-2));
        assert_eq!(&res.predict(&dataset), dataset.targets());
        assert_abs_diff_eq!(res.score(&dataset).unwrap(), 1.0);
    }

    #[test]
    fn fits_without_intercept() {
        let dataset =
            Dataset::new(ten_points(), array![0usize, 0, 0, 0, 1, 1, 1, 1, 1, 1]).unwrap();
        let res = LogisticRegression::params()
            .with_intercept(false)
            .fit(&dataset)
            .unwrap();

        assert_eq!(res.intercept(), 0.0);
        assert_eq!(res.params().len(), 1);
    }

    #[test]
    fn threshold_moves_the_decision() {
        let dataset =
            Dataset::new(ten_points(), array![0usize, 0, 0, 0, 1, 1, 1, 1, 1, 1]).unwrap();
        let res = LogisticRegression::params().fit(&dataset).unwrap();

        // probability of the sample at 4.0 is about 0.64
        let strict = res.clone().set_threshold(0.9).unwrap();
        let predicted = strict.predict(dataset.records());
        assert_eq!(predicted[4], 0);
        assert_eq!(predicted[9], 1);

        assert!(matches!(
            res.clone().set_threshold(1.5),
            Err(LogisticError::InvalidThreshold)
        ));
        assert!(matches!(
            res.set_threshold(f64::NAN),
            Err(LogisticError::InvalidThreshold)
        ));
    }

    #[test]
    fn rejects_wrong_number_of_classes() {
        let x = array![[0.01], [1.0], [-1.0], [-0.01]];

        let single = Dataset::new(x.clone(), array![1usize, 1, 1, 1]).unwrap();
        assert!(matches!(
            LogisticRegression::<f64>::default().fit(&single),
            Err(LogisticError::WrongNumberOfClasses(1))
        ));

        let three = Dataset::new(x, array![0usize, 1, 2, 1]).unwrap();
        let res = LogisticRegression::<f64>::default().fit(&three);
        assert_eq!(
            res.unwrap_err().to_string(),
            "Expected exactly two classes for logistic regression, found 3"
        );
    }

    #[test]
    fn rejects_inf_values() {
        let infs = vec![std::f64::INFINITY, std::f64::NEG_INFINITY, std::f64::NAN];
        let y = array![0usize, 1];
        let expected = "Values must be finite and not `Inf`, `-Inf` or `NaN`".to_string();
        for inf in &infs {
            let dataset = Dataset::new(array![[1.0], [*inf]], y.clone()).unwrap();
            let res = LogisticRegression::default().fit(&dataset);
            assert_eq!(res.unwrap_err().to_string(), expected);
        }

        let dataset = Dataset::new(array![[-1.0], [1.0]], y).unwrap();
        for inf in &infs {
            let res = LogisticRegression::params().alpha(*inf).fit(&dataset);
            assert!(matches!(res, Err(LogisticError::InvalidAlpha)));
        }

        let mut non_positives = infs;
        non_positives.push(-1.0);
        non_positives.push(0.0);
        for inf in &non_positives {
            let res = LogisticRegression::params()
                .gradient_tolerance(*inf)
                .fit(&dataset);
            assert_eq!(
                res.unwrap_err().to_string(),
                "gradient_tolerance must be a positive, finite number"
            );
        }
    }

    #[test]
    fn returns_last_iterate_when_out_of_iterations() {
        let dataset =
            Dataset::new(ten_points(), array![0usize, 0, 0, 0, 1, 1, 1, 1, 1, 1]).unwrap();
        let res = LogisticRegression::params()
            .max_iterations(1)
            .fit(&dataset)
            .unwrap();

        assert!(res.params().iter().all(|p| p.is_finite()));
        assert!(res.intercept().is_finite());
    }

    #[test]
    fn works_with_f32() {
        let x = ten_points().mapv(|v| v as f32);
        let dataset = Dataset::new(x, array![0usize, 0, 0, 0, 1, 1, 1, 1, 1, 1]).unwrap();
        let res = LogisticRegression::params()
            .gradient_tolerance(1e-3f32)
            .fit(&dataset)
            .unwrap();

        assert_abs_diff_eq!(res.intercept(), -4.126f32, epsilon = 1e-2);
        assert!(res.params().abs_diff_eq(&array![1.181f32], 1e-2));
        assert_eq!(&res.predict(dataset.records()), dataset.targets());
    }
}
