use super::{Mode, ProgressSink};
use crate::{
    Result,
    arch::{Weights, predict},
    dataset::{Dataset, split_record},
    optimization::Optimizer,
};

/// A perceptron trainer.
pub trait Trainer {
    /// The update policy this trainer follows.
    fn mode(&self) -> Mode;

    /// Trains fresh, all-zero weights over `dataset`.
    ///
    /// # Arguments
    /// * `dataset` - The records to learn from, iterated in insertion order every epoch.
    /// * `sink` - Receives one progress record per epoch.
    ///
    /// # Returns
    /// The trained weights, the caller owns them.
    fn train(&mut self, dataset: &Dataset, sink: &mut dyn ProgressSink) -> Result<Weights>;
}

/// Makes an online pass over the dataset: the weights are updated right after each record is
/// seen, before predicting the next one.
///
/// # Arguments
/// * `optimizer` - The update rule.
/// * `weights` - The live weights.
/// * `grad` - A buffer as long as `weights`, overwritten on every record.
/// * `dataset` - The records.
///
/// # Returns
/// The sum of the squared errors of the epoch.
pub(super) fn run_epoch<O: Optimizer>(
    optimizer: &mut O,
    weights: &mut Weights,
    grad: &mut Weights,
    dataset: &Dataset,
) -> Result<f64> {
    let mut error_sum = 0.0;

    for record in dataset.records() {
        let prediction = predict(record, weights.view())?;
        let (features, label) = split_record(record)?;

        let error = label - prediction;
        error_sum += error * error;

        grad[0] = -error;
        for (g, x) in grad.iter_mut().skip(1).zip(features) {
            *g = -error * x;
        }

        optimizer.update_params(weights.view_mut(), grad.view());
    }

    Ok(error_sum)
}
