//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{ArrayBase, ArrayView1, ArrayView2, Ix1, Ix2, NdFloat, OwnedRepr};
use num_traits::{FromPrimitive, NumCast, Signed};

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Sum;

mod impl_dataset;
mod impl_records;
mod impl_targets;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records of a dataset and, for
/// regression task, in the targets as well.
pub trait Float:
    NdFloat + FromPrimitive + Default + Signed + Sum + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. Currently boolean (binary task), usize and
/// strings (multi-label tasks) are supported.
pub trait Label: PartialEq + Eq + Hash + Clone {}

impl Label for bool {}
impl Label for usize {}
impl Label for String {}
impl Label for &str {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and a single target column. In order to keep the type complexity low the dataset base is only
/// generic over the records and targets and introduces a trait bound on the records.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples)
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// The only way to build a dataset is [`DatasetBase::new`], which checks that records and
/// targets describe the same number of samples. All other operations keep that invariant.
#[derive(Debug, Clone)]
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub(crate) records: R,
    pub(crate) targets: T,

    pub(crate) feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used type of dataset. It owns its records, stored as an `Array2`, and a
/// single target per record, stored as an `Array1`.
pub type Dataset<D, T> = DatasetBase<ArrayBase<OwnedRepr<D>, Ix2>, ArrayBase<OwnedRepr<T>, Ix1>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, D, T> = DatasetBase<ArrayView2<'a, D>, ArrayView1<'a, T>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Return a view on the single target column
pub trait AsTargets {
    type Elem;

    fn as_targets(&self) -> ArrayView1<Self::Elem>;
}

/// Get the labels in the targets
pub trait Labels {
    type Elem: Label;

    /// Count every label, in order of first appearance
    fn label_count(&self) -> Vec<(Self::Elem, usize)>;

    fn labels(&self) -> Vec<Self::Elem> {
        self.label_count().into_iter().map(|(label, _)| label).collect()
    }

    fn label_frequencies(&self) -> HashMap<Self::Elem, usize> {
        self.label_count().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2};
    use rand::{rngs::SmallRng, SeedableRng};

    fn pass_fail() -> Dataset<f64, bool> {
        let hours = Array1::linspace(0.5, 10.0, 20);
        let records = hours.clone().insert_axis(ndarray::Axis(1));
        let targets = hours.mapv(|h| h > 4.0);
        Dataset::new(records, targets).unwrap()
    }

    #[test]
    fn dataset_implements_required_methods() {
        let mut rng = SmallRng::seed_from_u64(42);

        let dataset = Dataset::new(array![[1., 2.], [3., 4.], [5., 6.]], array![0., 1., 2.])
            .unwrap()
            .with_feature_names(vec!["a", "b"]);

        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.nfeatures(), 2);
        assert_eq!(dataset.feature_names(), vec!["a", "b"]);

        let shuffled = dataset.shuffle(&mut rng);
        assert_eq!(shuffled.nsamples(), 3);
        // every row keeps its target
        for (row, target) in shuffled.records().outer_iter().zip(shuffled.targets()) {
            assert_abs_diff_eq!(row[0], 2. * target + 1.);
        }

        let mapped = dataset.map_targets(|t| *t > 0.5);
        assert_eq!(mapped.targets(), &array![false, true, true]);
    }

    #[test]
    fn rejects_mismatched_records_and_targets() {
        let err = Dataset::new(array![[1.], [2.], [3.], [4.]], array![1., 2., 3.]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn default_feature_names() {
        let dataset = Dataset::new(array![[1., 2.]], array![0.]).unwrap();
        assert_eq!(dataset.feature_names(), vec!["feature-0", "feature-1"]);
    }

    #[test]
    fn split_with_ratio_keeps_order() {
        let records = Array2::from_shape_vec((10, 1), (0..10).map(<f64 as From<i32>>::from).collect()).unwrap();
        let targets = Array1::linspace(0., 9., 10);
        let dataset = Dataset::new(records, targets).unwrap();

        let (train, valid) = dataset.split_with_ratio(0.7).unwrap();
        assert_eq!(train.nsamples(), 7);
        assert_eq!(valid.nsamples(), 3);
        assert_eq!(valid.targets(), &array![7., 8., 9.]);

        let view = dataset.view();
        let (train, valid) = view.split_with_ratio(0.5).unwrap();
        assert_eq!(train.nsamples(), 5);
        assert_eq!(valid.nsamples(), 5);

        assert!(matches!(
            dataset.split_with_ratio(1.0),
            Err(Error::Parameters(_))
        ));
    }

    #[test]
    fn split_sizes_ignore_representation_error() {
        let twenty = pass_fail();
        // (ratio, test rows): (1 - ratio) * 20 is 6.000000000000001, 1.9999999999999996, 5,
        // 5.800000000000001 and 1.0000000000000009 in double precision
        for (ratio, n_test) in [(0.7, 6), (0.9, 2), (0.75, 5), (0.71, 6), (0.95, 1)] {
            let (train, test) = twenty.split_with_ratio(ratio).unwrap();
            assert_eq!(test.nsamples(), n_test, "ratio {}", ratio);
            assert_eq!(train.nsamples(), 20 - n_test);
        }

        let ten = Dataset::new(Array2::<f64>::zeros((10, 1)), Array1::<f64>::zeros(10)).unwrap();
        let (train, test) = ten.split_with_ratio(0.9).unwrap();
        assert_eq!(train.nsamples(), 9);
        assert_eq!(test.nsamples(), 1);
    }

    #[test]
    fn stratified_split_preserves_class_proportions() {
        let dataset = pass_fail();
        let freqs = dataset.label_frequencies();
        assert_eq!(freqs[&true], 12);
        assert_eq!(freqs[&false], 8);

        let mut rng = SmallRng::seed_from_u64(42);
        let (train, test) = dataset.stratified_split_with_ratio(0.7, &mut rng).unwrap();

        assert_eq!(train.nsamples(), 14);
        assert_eq!(test.nsamples(), 6);

        let train_freqs = train.label_frequencies();
        let test_freqs = test.label_frequencies();
        // 6 test rows: 3.6 passes and 2.4 fails, the larger remainder gets the spare row
        assert_eq!(test_freqs[&true], 4);
        assert_eq!(test_freqs[&false], 2);
        assert_eq!(train_freqs[&true], 8);
        assert_eq!(train_freqs[&false], 6);
    }

    #[test]
    fn stratified_split_is_reproducible() {
        let dataset = pass_fail();

        let (train_a, test_a) = dataset
            .stratified_split_with_ratio(0.7, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        let (train_b, test_b) = dataset
            .stratified_split_with_ratio(0.7, &mut SmallRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(train_a.records(), train_b.records());
        assert_eq!(test_a.records(), test_b.records());
        assert_eq!(test_a.targets(), test_b.targets());
    }

    #[test]
    fn stratified_split_partitions_every_row_once() {
        let dataset = pass_fail();
        let mut rng = SmallRng::seed_from_u64(1);
        let (train, test) = dataset.stratified_split_with_ratio(0.7, &mut rng).unwrap();

        let mut seen = train
            .records()
            .iter()
            .chain(test.records().iter())
            .map(|x| (x * 1000.).round() as i64)
            .collect::<Vec<_>>();
        seen.sort_unstable();

        let mut expected = dataset
            .records()
            .iter()
            .map(|x| (x * 1000.).round() as i64)
            .collect::<Vec<_>>();
        expected.sort_unstable();

        assert_eq!(seen, expected);
    }

    #[test]
    fn stratified_split_rejects_bad_ratios() {
        let dataset = pass_fail();
        let mut rng = SmallRng::seed_from_u64(42);

        assert!(matches!(
            dataset.stratified_split_with_ratio(0.0, &mut rng),
            Err(Error::Parameters(_))
        ));
        assert!(matches!(
            dataset.stratified_split_with_ratio(1.5, &mut rng),
            Err(Error::Parameters(_))
        ));
        // 0.01 of 20 rows leaves nothing for training
        assert!(matches!(
            dataset.stratified_split_with_ratio(0.01, &mut rng),
            Err(Error::InvalidInput(_))
        ));
    }
}
