use std::num::NonZeroUsize;

use log::{debug, info};

use super::{EpochReport, Mode, ProgressSink, Trainer, trainer::run_epoch};
use crate::{
    Result,
    arch::{Weights, zeros},
    dataset::Dataset,
    metrics::accuracy,
    optimization::Optimizer,
};

/// Trains with the classical perceptron rule and returns the weights it ends with.
pub struct NaiveTrainer<O: Optimizer> {
    optimizer: O,
    max_epochs: NonZeroUsize,
}

impl<O: Optimizer> NaiveTrainer<O> {
    /// Returns a new `NaiveTrainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The weight update rule.
    /// * `max_epochs` - The epoch budget.
    pub fn new(optimizer: O, max_epochs: NonZeroUsize) -> Self {
        Self {
            optimizer,
            max_epochs,
        }
    }

    /// Runs up to `max_epochs` online passes, stopping after the first epoch without errors.
    ///
    /// Every epoch reports the live weights, its error sum and the weights' accuracy.
    pub fn train(&mut self, dataset: &Dataset, sink: &mut dyn ProgressSink) -> Result<Weights> {
        let mut weights = zeros(dataset.record_size());
        let mut grad = zeros(dataset.record_size());

        for epoch in 1..=self.max_epochs.get() {
            let error_sum = run_epoch(&mut self.optimizer, &mut weights, &mut grad, dataset)?;
            let accuracy = accuracy(weights.view(), dataset)?;
            debug!(epoch = epoch, error_sum = error_sum, accuracy = accuracy; "naive epoch finished");

            sink.record(&EpochReport {
                epoch,
                error_sum,
                weights: weights.clone(),
                accuracy,
            });

            if error_sum == 0.0 {
                info!(epoch = epoch; "converged, stopping early");
                break;
            }
        }

        Ok(weights)
    }
}

impl<O: Optimizer> Trainer for NaiveTrainer<O> {
    fn mode(&self) -> Mode {
        Mode::Naive
    }

    fn train(&mut self, dataset: &Dataset, sink: &mut dyn ProgressSink) -> Result<Weights> {
        self.train(dataset, sink)
    }
}
