//! `primer-datasets` provides the toy data used in the walkthroughs, tests and doc examples.
//!
//! ## Current State
//!
//! Two datasets are provided:
//!
//! * a regression sample of four paired points, see [`sample_points`],
//! * the grades table of 20 students with the hours they studied, the grade they received and
//!   whether they passed, see [`grades`].
//!
//! The grades table is embedded as CSV text and parsed on every call, loaded datasets are returned
//! as a [`primer::Dataset`] with named features.
//!
//! ```ignore
//! let mut rng = SmallRng::seed_from_u64(42);
//! let (train, test) = primer_datasets::grades_classification()?
//!     .stratified_split_with_ratio(0.7, &mut rng)?;
//! ```

use csv::ReaderBuilder;
use ndarray::prelude::*;
use ndarray_csv::{Array2Reader, ReadError};
use primer::Dataset;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

/// An error when loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("malformed csv: {0}")]
    Csv(#[from] ReadError),
    #[error(transparent)]
    BaseCrate(#[from] primer::Error),
}

const GRADES: &str = include_str!("../data/grades.csv");

/// Convert CSV text into 2D array
pub fn array_from_csv(csv: &str, has_headers: bool, separator: u8) -> Result<Array2<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .from_reader(csv.as_bytes());

    // extract ndarray
    let array = reader.deserialize_array2_dynamic()?;

    Ok(array)
}

/// The regression sample: predictor `x` and outcome `y`, four points each
pub fn sample_points() -> (Array1<f64>, Array1<f64>) {
    (array![1., 1.5, 4., 7.], array![4., 3., 8.2, 9.])
}

/// The regression sample as a dataset with the single feature `x`
pub fn sample() -> Result<Dataset<f64, f64>> {
    let (x, y) = sample_points();

    Ok(Dataset::new(x.insert_axis(Axis(1)), y)?.with_feature_names(vec!["x"]))
}

/// Read in the grades table
///
/// Columns are `hours`, `grade` and `passed`, the last one being `1` for a passed and `0` for a
/// failed exam. Twelve of the twenty students passed.
pub fn grades() -> Result<Array2<f64>> {
    array_from_csv(GRADES, true, b',')
}

/// Grades predicted from the hours studied
pub fn grades_regression() -> Result<Dataset<f64, f64>> {
    let array = grades()?;
    let (records, targets) = (array.slice(s![.., 0..1]).to_owned(), array.column(1).to_owned());

    Ok(Dataset::new(records, targets)?.with_feature_names(vec!["hours"]))
}

/// Pass or fail predicted from the hours studied
pub fn grades_classification() -> Result<Dataset<f64, bool>> {
    let array = grades()?;
    let (records, targets) = (array.slice(s![.., 0..1]).to_owned(), array.column(2).to_owned());

    Ok(Dataset::new(records, targets)?
        .map_targets(|passed| *passed > 0.5)
        .with_feature_names(vec!["hours"]))
}
