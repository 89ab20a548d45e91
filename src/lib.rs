//! `primer` walks through the basics of supervised learning with small, fully inspectable
//! building blocks.
//!
//! The base crate provides the shared vocabulary used by the algorithm crates:
//!
//! * [`DatasetBase`], a record matrix with a single target column, together with
//!   shuffling, ordered splitting and a stratified train/test split,
//! * the [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits implemented by every model,
//! * [`ParamGuard`] for validated hyperparameter builders,
//! * descriptive statistics in [`summary`],
//! * regression and classification metrics in [`metrics`].
//!
//! Algorithms live in their own crates:
//!
//! * `primer-linear` fits a line through paired samples by closed-form least squares, offers an
//!   ordinary least squares model for any number of features and a `linregress` routine which
//!   reports the usual statistics next to slope and intercept,
//! * `primer-logistic` implements L2-penalised two-class logistic regression.
//!
//! The toy data of the walkthroughs is bundled in `primer-datasets`.

pub mod dataset;
pub mod error;
mod metrics_classification;
mod metrics_regression;
pub mod param_guard;
pub mod prelude;
pub mod summary;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float, Label};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for classification and regression
pub mod metrics {
    pub use crate::metrics_classification::{ConfusionMatrix, ToConfusionMatrix};
    pub use crate::metrics_regression::SingleTargetRegression;
}
