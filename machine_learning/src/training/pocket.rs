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

/// The best weights seen so far, with the error sum of the epoch that produced them.
struct Pocket {
    weights: Weights,
    error_sum: f64,
    accuracy: f64,
}

/// Trains with the perceptron rule but returns the most accurate weights seen at the end of any
/// epoch instead of the last ones.
pub struct PocketTrainer<O: Optimizer> {
    optimizer: O,
    max_epochs: NonZeroUsize,
}

impl<O: Optimizer> PocketTrainer<O> {
    /// Returns a new `PocketTrainer`.
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

    /// Runs the same online passes as the naive trainer over a live weight vector, and after
    /// each one pockets a copy of it if it's strictly more accurate than the current pocket.
    ///
    /// Every epoch reports the pocket, so the reported accuracy never decreases.
    pub fn train(&mut self, dataset: &Dataset, sink: &mut dyn ProgressSink) -> Result<Weights> {
        let mut weights = zeros(dataset.record_size());
        let mut grad = zeros(dataset.record_size());

        let mut pocket = Pocket {
            accuracy: accuracy(weights.view(), dataset)?,
            weights: weights.clone(),
            error_sum: 0.0,
        };

        for epoch in 1..=self.max_epochs.get() {
            let error_sum = run_epoch(&mut self.optimizer, &mut weights, &mut grad, dataset)?;
            let live_accuracy = accuracy(weights.view(), dataset)?;

            if live_accuracy > pocket.accuracy {
                debug!(
                    epoch = epoch,
                    from = pocket.accuracy,
                    to = live_accuracy;
                    "pocketing weights"
                );

                pocket = Pocket {
                    weights: weights.clone(),
                    error_sum,
                    accuracy: live_accuracy,
                };
            }

            debug!(
                epoch = epoch,
                error_sum = error_sum,
                accuracy = live_accuracy,
                pocket_accuracy = pocket.accuracy;
                "pocket epoch finished"
            );

            sink.record(&EpochReport {
                epoch,
                error_sum: pocket.error_sum,
                weights: pocket.weights.clone(),
                accuracy: pocket.accuracy,
            });

            if error_sum == 0.0 {
                info!(epoch = epoch; "converged, stopping early");
                break;
            }
        }

        Ok(pocket.weights)
    }
}

impl<O: Optimizer> Trainer for PocketTrainer<O> {
    fn mode(&self) -> Mode {
        Mode::Pocket
    }

    fn train(&mut self, dataset: &Dataset, sink: &mut dyn ProgressSink) -> Result<Weights> {
        self.train(dataset, sink)
    }
}
