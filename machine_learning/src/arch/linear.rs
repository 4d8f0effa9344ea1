use ndarray::{Array1, ArrayView1, s};

use super::activations::Step;
use crate::{MlErr, Result, dataset::split_record};

/// A linear classifier's parameters: the bias at index 0 followed by one weight per feature.
pub type Weights = Array1<f64>;

/// Returns all-zero weights for records of length `record_size`.
pub fn zeros(record_size: usize) -> Weights {
    Array1::zeros(record_size)
}

/// Computes `weights[0] + Σ weights[i + 1] * record[i]` over the record's features.
///
/// The sum is folded left to right so the same inputs always produce the same bits.
///
/// # Arguments
/// * `record` - A full record, its trailing label is not read.
/// * `weights` - The bias and feature weights, must be as long as `record`.
///
/// # Returns
/// The activation or `MlErr::SizeMismatch` if the lengths disagree.
pub fn activation(record: ArrayView1<f64>, weights: ArrayView1<f64>) -> Result<f64> {
    if weights.len() != record.len() {
        return Err(MlErr::SizeMismatch {
            a: "weights",
            b: "record",
            got: weights.len(),
            expected: record.len(),
        });
    }

    let (features, _) = split_record(record)?;
    let z = features
        .iter()
        .zip(weights.slice(s![1..]))
        .fold(weights[0], |acc, (x, w)| acc + w * x);

    Ok(z)
}

/// Classifies a record, the result is always `0.0` or `1.0`.
///
/// # Arguments
/// * `record` - A full record, its trailing label is not read.
/// * `weights` - The bias and feature weights, must be as long as `record`.
pub fn predict(record: ArrayView1<f64>, weights: ArrayView1<f64>) -> Result<f64> {
    let z = activation(record, weights)?;
    Ok(Step::unit().f(z))
}
