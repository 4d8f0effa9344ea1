//! Evaluation helpers, they never modify the weights they are given.

use ndarray::ArrayView1;

use crate::{Result, arch::predict, dataset::Dataset};

/// Counts the records whose prediction equals their label.
pub fn correct(weights: ArrayView1<f64>, dataset: &Dataset) -> Result<usize> {
    let mut matches = 0;

    for record in dataset.records() {
        let label = record[record.len() - 1];
        if predict(record, weights)? == label {
            matches += 1;
        }
    }

    Ok(matches)
}

/// The percentage of correctly classified records, in `[0, 100]`.
///
/// A `Dataset` is never empty, so there's no zero division to guard against here.
///
/// # Arguments
/// * `weights` - The bias and feature weights.
/// * `dataset` - The records to classify.
///
/// # Returns
/// The accuracy or `MlErr::SizeMismatch` if the weights don't fit the dataset's records.
pub fn accuracy(weights: ArrayView1<f64>, dataset: &Dataset) -> Result<f64> {
    let matches = correct(weights, dataset)?;
    Ok(100.0 * matches as f64 / dataset.len() as f64)
}
