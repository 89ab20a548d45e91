use super::{AsTargets, Dataset, DatasetBase, DatasetView, Float, Label, Records};
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use rand::{seq::SliceRandom, Rng};

impl<F: Float, T> Dataset<F, T> {
    /// Create a new dataset from records and targets
    ///
    /// Fails with [`Error::InvalidInput`] if the number of rows in `records` differs from the
    /// number of `targets`.
    pub fn new(records: Array2<F>, targets: Array1<T>) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(Error::mismatched_lengths(records.nrows(), targets.len()));
        }

        Ok(DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        })
    }
}

impl<R: Records, T> DatasetBase<R, T> {
    /// Number of samples, the rows of the record matrix
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Number of features, the columns of the record matrix
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }

    /// Return a reference to the records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Return a reference to the targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Attach descriptive names to the features
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> Self {
        self.feature_names = names.into_iter().map(Into::into).collect();

        self
    }

    /// Returns the feature names
    ///
    /// Unnamed datasets report `feature-0`, `feature-1`, ...
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.records.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }
}

impl<R: Records, T: AsTargets> DatasetBase<R, T> {
    /// Map every target to a new value, keeping the records
    pub fn map_targets<S, G: FnMut(&T::Elem) -> S>(self, fnc: G) -> DatasetBase<R, Array1<S>> {
        let DatasetBase {
            records,
            targets,
            feature_names,
        } = self;

        let targets = targets.as_targets().map(fnc);

        DatasetBase {
            records,
            targets,
            feature_names,
        }
    }
}

impl<F, E, D, S> DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
where
    F: Float,
    E: Clone,
    D: Data<Elem = F>,
    S: Data<Elem = E>,
{
    /// Borrow records and targets as a dataset view
    pub fn view(&self) -> DatasetView<'_, F, E> {
        DatasetBase {
            records: self.records.view(),
            targets: self.targets.view(),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Copy the rows at `indices`, in that order, into a new dataset
    fn select(&self, indices: &[usize]) -> Dataset<F, E> {
        DatasetBase {
            records: self.records.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Shuffle the rows of the dataset
    ///
    /// Every record keeps its target.
    pub fn shuffle<G: Rng>(&self, rng: &mut G) -> Dataset<F, E> {
        let mut indices = (0..self.nsamples()).collect::<Vec<_>>();
        indices.shuffle(rng);

        self.select(&indices)
    }

    /// Split the dataset in two parts without shuffling
    ///
    /// The first part receives the leading `ratio` share of the rows, the second part the
    /// remainder. `ratio` has to lie strictly between zero and one.
    pub fn split_with_ratio(&self, ratio: f64) -> Result<(DatasetView<'_, F, E>, DatasetView<'_, F, E>)> {
        let n_test = test_size(self.nsamples(), ratio)?;
        let n_train = self.nsamples() - n_test;

        let (records_train, records_test) = self.records.view().split_at(Axis(0), n_train);
        let (targets_train, targets_test) = self.targets.view().split_at(Axis(0), n_train);

        let train = DatasetBase {
            records: records_train,
            targets: targets_train,
            feature_names: self.feature_names.clone(),
        };
        let test = DatasetBase {
            records: records_test,
            targets: targets_test,
            feature_names: self.feature_names.clone(),
        };

        Ok((train, test))
    }
}

impl<F, L, D, S> DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
where
    F: Float,
    L: Label,
    D: Data<Elem = F>,
    S: Data<Elem = L>,
{
    /// Randomly split the dataset, preserving the share of every class in both parts
    ///
    /// The training part receives `ratio` of the rows. The test part holds
    /// `ceil((1 - ratio) * nsamples)` rows, distributed over the classes proportionally to
    /// their frequency; rows left over after rounding down go to the classes with the largest
    /// remainders. Rows are drawn at random within every class and both parts are shuffled
    /// afterwards, so the same seed always reproduces the same split.
    pub fn stratified_split_with_ratio<G: Rng>(
        &self,
        ratio: f64,
        rng: &mut G,
    ) -> Result<(Dataset<F, L>, Dataset<F, L>)> {
        let nsamples = self.nsamples();
        let n_test = test_size(nsamples, ratio)?;

        // row indices of every class, in order of first appearance
        let mut classes: Vec<(L, Vec<usize>)> = Vec::new();
        for (idx, label) in self.targets.iter().enumerate() {
            match classes.iter_mut().find(|(known, _)| known == label) {
                Some((_, rows)) => rows.push(idx),
                None => classes.push((label.clone(), vec![idx])),
            }
        }

        let exact = classes
            .iter()
            .map(|(_, rows)| n_test as f64 * rows.len() as f64 / nsamples as f64)
            .collect::<Vec<_>>();
        let mut quota = exact.iter().map(|x| x.floor() as usize).collect::<Vec<_>>();

        let mut by_remainder = (0..classes.len()).collect::<Vec<_>>();
        by_remainder.sort_by(|a, b| {
            let rem_a = exact[*a] - exact[*a].floor();
            let rem_b = exact[*b] - exact[*b].floor();
            rem_b
                .partial_cmp(&rem_a)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let spare = n_test - quota.iter().sum::<usize>();
        for idx in by_remainder.into_iter().take(spare) {
            quota[idx] += 1;
        }

        let mut train_idx = Vec::with_capacity(nsamples - n_test);
        let mut test_idx = Vec::with_capacity(n_test);
        for ((_, rows), n_class_test) in classes.iter_mut().zip(&quota) {
            rows.shuffle(rng);
            let (test_rows, train_rows) = rows.split_at(*n_class_test);
            test_idx.extend_from_slice(test_rows);
            train_idx.extend_from_slice(train_rows);
        }
        train_idx.shuffle(rng);
        test_idx.shuffle(rng);

        tracing::debug!(
            classes = classes.len(),
            train = train_idx.len(),
            test = test_idx.len(),
            "stratified split"
        );

        Ok((self.select(&train_idx), self.select(&test_idx)))
    }
}

/// Round `x` to `digits` significant decimal digits
fn round_significant(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(digits - 1 - x.abs().log10().floor() as i32);
    (x * scale).round() / scale
}

/// Number of rows in the second part of a split with the given `ratio`
fn test_size(nsamples: usize, ratio: f64) -> Result<usize> {
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(Error::Parameters(format!(
            "split ratio should lie between zero and one, got {}",
            ratio
        )));
    }

    // (1 - 0.7) * 20 evaluates to 6.000000000000001, round off the representation error first
    let share = round_significant((1.0 - ratio) * nsamples as f64, 12);
    let n_test = share.ceil().max(0.0) as usize;
    let n_train = nsamples - n_test.min(nsamples);
    if n_test == 0 || n_train == 0 {
        return Err(Error::InvalidInput(format!(
            "splitting {} samples with ratio {} leaves an empty partition",
            nsamples, ratio
        )));
    }

    Ok(n_test)
}
