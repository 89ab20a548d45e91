//! Common metrics for performance evaluation of classifier
//!
//! Scoring is essential for classification tasks. This module implements the confusion matrix
//! and the scores derived from its entries, like accuracy, precision, recall, f1-score and the
//! Matthews correlation coefficient.
use std::fmt;

use ndarray::prelude::*;
use ndarray::Data;

use crate::dataset::{AsTargets, DatasetBase, Label, Records};
use crate::error::{Error, Result};

/// Confusion matrix for multi-label evaluation
///
/// A confusion matrix shows predictions in a matrix, where rows correspond to predicted and
/// columns to target. The diagonal entries are correct predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<A> {
    matrix: Array2<usize>,
    members: Array1<A>,
}

impl<A: Label> ConfusionMatrix<A> {
    fn index_of(&self, label: &A) -> Option<usize> {
        self.members.iter().position(|member| member == label)
    }

    /// Number of samples predicted as `positive` which are `positive`
    pub fn true_positives(&self, positive: &A) -> usize {
        self.index_of(positive)
            .map(|idx| self.matrix[(idx, idx)])
            .unwrap_or(0)
    }

    /// Number of samples predicted as `positive` which are something else
    pub fn false_positives(&self, positive: &A) -> usize {
        self.index_of(positive)
            .map(|idx| self.matrix.row(idx).sum() - self.matrix[(idx, idx)])
            .unwrap_or(0)
    }

    /// Number of `positive` samples predicted as something else
    pub fn false_negatives(&self, positive: &A) -> usize {
        self.index_of(positive)
            .map(|idx| self.matrix.column(idx).sum() - self.matrix[(idx, idx)])
            .unwrap_or(0)
    }

    /// Number of samples neither predicted nor labeled as `positive`
    pub fn true_negatives(&self, positive: &A) -> usize {
        self.total()
            - self.true_positives(positive)
            - self.false_positives(positive)
            - self.false_negatives(positive)
    }
}

impl<A> ConfusionMatrix<A> {
    /// The class labels, in the order of rows and columns
    pub fn members(&self) -> ArrayView1<A> {
        self.members.view()
    }

    /// The raw counts, predictions in rows and ground truth in columns
    pub fn matrix(&self) -> ArrayView2<usize> {
        self.matrix.view()
    }

    /// Number of compared samples
    pub fn total(&self) -> usize {
        self.matrix.sum()
    }

    /// Calculate precision for every class
    pub fn precision(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(1));

        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| *a as f32 / *b as f32)
            .collect()
    }

    /// Calculate recall for every class
    pub fn recall(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(0));

        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| *a as f32 / *b as f32)
            .collect()
    }

    /// Return mean accuracy, the share of correct predictions
    pub fn accuracy(&self) -> f32 {
        self.matrix.diag().sum() as f32 / self.matrix.sum() as f32
    }

    /// Return beta score for every class
    pub fn f_score(&self, beta: f32) -> Array1<f32> {
        let sb = beta * beta;
        let precision = self.precision();
        let recall = self.recall();

        precision
            .iter()
            .zip(recall.iter())
            .map(|(p, r)| (1.0 + sb) * (p * r) / (sb * p + r))
            .collect()
    }

    /// Return beta=1 score for every class
    pub fn f1_score(&self) -> Array1<f32> {
        self.f_score(1.0)
    }

    /// Return the Matthew Correlation Coefficients
    ///
    /// Estimates the normalized cross-correlation between target and predicted variable
    pub fn mcc(&self) -> f32 {
        let correct = self.matrix.diag().sum() as f32;
        let total = self.matrix.sum() as f32;
        let predicted = self.matrix.sum_axis(Axis(1)).mapv(|x| x as f32);
        let observed = self.matrix.sum_axis(Axis(0)).mapv(|x| x as f32);

        let cov_xy = correct * total - predicted.dot(&observed);
        let cov_xx = total * total - predicted.dot(&predicted);
        let cov_yy = total * total - observed.dot(&observed);

        cov_xy / cov_xx.sqrt() / cov_yy.sqrt()
    }
}

/// Print a confusion matrix as a table
///
/// Rows are labelled with the predicted class, columns with the ground truth:
///
/// ```text
/// pred \ truth | false |  true
///        false |     4 |     0
///         true |     1 |     1
/// ```
impl<A: fmt::Display> fmt::Display for ConfusionMatrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let corner = "pred \\ truth";
        let names = self
            .members
            .iter()
            .map(|member| member.to_string())
            .collect::<Vec<_>>();
        let width = names
            .iter()
            .map(String::len)
            .chain(self.matrix.iter().map(|count| count.to_string().len()))
            .max()
            .unwrap_or(1);
        let first = names
            .iter()
            .map(String::len)
            .chain(Some(corner.len()))
            .max()
            .unwrap_or(1);

        write!(f, "{:>first$}", corner, first = first)?;
        for name in &names {
            write!(f, " | {:>width$}", name, width = width)?;
        }
        writeln!(f)?;

        for (name, row) in names.iter().zip(self.matrix.outer_iter()) {
            write!(f, "{:>first$}", name, first = first)?;
            for count in row {
                write!(f, " | {:>width$}", count, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Classification functions
///
/// Contains only routine for Confusion Matrix, as all other current metrices can be derived from
/// the entries in the matrix.
pub trait ToConfusionMatrix<A, T> {
    /// Compare the predictions in `self` with `ground_truth`
    ///
    /// The classes are the sorted union of predicted and observed labels. Fails with
    /// [`Error::InvalidInput`] when both sides differ in length or are empty.
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix<A>>;

    /// Like [`confusion_matrix`](Self::confusion_matrix), but every class in `labels` gets a
    /// row and a column even when no sample carries it.
    fn confusion_matrix_with_labels(
        &self,
        ground_truth: T,
        labels: &[A],
    ) -> Result<ConfusionMatrix<A>>;
}

fn confusion_matrix<A: Label + Ord>(
    prediction: ArrayView1<A>,
    ground_truth: ArrayView1<A>,
    labels: &[A],
) -> Result<ConfusionMatrix<A>> {
    if prediction.len() != ground_truth.len() {
        return Err(Error::mismatched_lengths(
            ground_truth.len(),
            prediction.len(),
        ));
    }
    if prediction.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compare empty label sequences".to_string(),
        ));
    }

    let mut classes = ground_truth
        .iter()
        .chain(prediction.iter())
        .chain(labels.iter())
        .cloned()
        .collect::<Vec<_>>();
    classes.sort();
    classes.dedup();

    let index = |label: &A| classes.binary_search(label).unwrap_or_default();

    // count each index tuple in the confusion matrix
    let mut matrix = Array2::zeros((classes.len(), classes.len()));
    for (predicted, observed) in prediction.iter().zip(ground_truth.iter()) {
        matrix[(index(predicted), index(observed))] += 1;
    }

    Ok(ConfusionMatrix {
        matrix,
        members: Array1::from(classes),
    })
}

impl<A: Label + Ord, S: Data<Elem = A>, T: AsTargets<Elem = A>> ToConfusionMatrix<A, T>
    for ArrayBase<S, Ix1>
{
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix<A>> {
        confusion_matrix(self.view(), ground_truth.as_targets(), &[])
    }

    fn confusion_matrix_with_labels(
        &self,
        ground_truth: T,
        labels: &[A],
    ) -> Result<ConfusionMatrix<A>> {
        confusion_matrix(self.view(), ground_truth.as_targets(), labels)
    }
}

impl<A: Label + Ord, R: Records, T1: AsTargets<Elem = A>, T: AsTargets<Elem = A>>
    ToConfusionMatrix<A, T> for DatasetBase<R, T1>
{
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix<A>> {
        confusion_matrix(self.as_targets(), ground_truth.as_targets(), &[])
    }

    fn confusion_matrix_with_labels(
        &self,
        ground_truth: T,
        labels: &[A],
    ) -> Result<ConfusionMatrix<A>> {
        confusion_matrix(self.as_targets(), ground_truth.as_targets(), labels)
    }
}

#[cfg(test)]
mod tests {
    use super::ToConfusionMatrix;
    use crate::dataset::Dataset;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn test_confusion_matrix() {
        let predicted = array![0usize, 1, 0, 1, 0, 1];
        let ground_truth = array![1usize, 1, 0, 1, 0, 1];

        let cm = predicted.confusion_matrix(&ground_truth).unwrap();

        assert_eq!(cm.members(), array![0usize, 1]);
        assert_eq!(cm.matrix(), array![[2usize, 1], [0, 3]]);
        assert_eq!(cm.total(), 6);
    }

    #[test]
    fn test_binary_counts() {
        let predicted = array![true, true, false, false, true];
        let ground_truth = array![true, false, false, true, true];

        let cm = predicted.confusion_matrix(&ground_truth).unwrap();

        assert_eq!(cm.true_positives(&true), 2);
        assert_eq!(cm.false_positives(&true), 1);
        assert_eq!(cm.false_negatives(&true), 1);
        assert_eq!(cm.true_negatives(&true), 1);

        // swapping the positive class swaps the errors
        assert_eq!(cm.true_positives(&false), 1);
        assert_eq!(cm.false_positives(&false), 1);
        assert_eq!(cm.false_negatives(&false), 1);
        assert_eq!(cm.true_negatives(&false), 2);
    }

    #[test]
    fn test_cm_metrices() {
        let predicted = array![true, true, false, false, true];
        let ground_truth = array![true, false, false, true, true];

        let cm = predicted.confusion_matrix(&ground_truth).unwrap();

        assert_abs_diff_eq!(cm.accuracy(), 0.6);
        assert_abs_diff_eq!(cm.precision(), array![0.5, 2. / 3.], epsilon = 1e-5);
        assert_abs_diff_eq!(cm.recall(), array![0.5, 2. / 3.], epsilon = 1e-5);
        assert_abs_diff_eq!(cm.f1_score(), array![0.5, 2. / 3.], epsilon = 1e-5);
        assert_abs_diff_eq!(cm.mcc(), 1. / 6., epsilon = 1e-5);
    }

    #[test]
    fn test_perfect_prediction() {
        let labels = array!["fail", "pass", "pass", "fail"];
        let cm = labels.confusion_matrix(&labels).unwrap();

        assert_abs_diff_eq!(cm.accuracy(), 1.0);
        assert_abs_diff_eq!(cm.mcc(), 1.0);
        assert_eq!(cm.false_positives(&"pass"), 0);
        assert_eq!(cm.true_negatives(&"pass"), 2);
    }

    #[test]
    fn test_confusion_matrix_for_dataset() {
        let dataset = Dataset::new(array![[0.], [1.], [2.], [3.]], array![false, false, true, true])
            .unwrap();
        let predicted = array![false, true, true, true];

        let cm = predicted.confusion_matrix(&dataset).unwrap();
        assert_eq!(cm.true_positives(&true), 2);
        assert_eq!(cm.false_positives(&true), 1);

        let same = dataset.confusion_matrix(&predicted).unwrap();
        assert_eq!(same.false_negatives(&true), 1);
    }

    #[test]
    fn test_display_renders_table() {
        let predicted = array![true, true, false, false, true];
        let ground_truth = array![true, false, false, true, true];

        let cm = predicted.confusion_matrix(&ground_truth).unwrap();
        let rendered = cm.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "pred \\ truth | false |  true");
        assert_eq!(lines[1], "       false |     1 |     1");
        assert_eq!(lines[2], "        true |     1 |     2");
    }

    #[test]
    fn test_keeps_absent_labels() {
        let predicted = array![true, true, true];
        let ground_truth = array![true, true, true];

        let cm = predicted.confusion_matrix(&ground_truth).unwrap();
        assert_eq!(cm.members(), array![true]);

        let cm = predicted
            .confusion_matrix_with_labels(&ground_truth, &[false, true])
            .unwrap();
        assert_eq!(cm.members(), array![false, true]);
        assert_eq!(cm.matrix(), array![[0usize, 0], [0, 3]]);
        assert_eq!(cm.true_negatives(&true), 0);
        assert_abs_diff_eq!(cm.accuracy(), 1.0);

        let lines = cm.to_string().lines().map(String::from).collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "       false |     0 |     0");
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let predicted = array![true, false];
        let ground_truth = array![true, false, true];
        assert!(matches!(
            predicted.confusion_matrix(&ground_truth),
            Err(Error::InvalidInput(_))
        ));

        let empty: Array1<bool> = Array1::from(Vec::new());
        assert!(matches!(
            empty.confusion_matrix(&empty),
            Err(Error::InvalidInput(_))
        ));
    }
}
