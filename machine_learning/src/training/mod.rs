//! Perceptron training: the naive and pocket update policies and how they report progress.

mod builder;
mod naive;
mod pocket;
mod progress;
mod spec;
mod trainer;

use std::num::NonZeroUsize;

pub use builder::TrainerBuilder;
pub use naive::NaiveTrainer;
pub use pocket::PocketTrainer;
pub use progress::{EpochReport, ProgressSink};
pub use spec::{DEFAULT_LEARNING_RATE, DEFAULT_MAX_EPOCHS, Mode, TrainerSpec};
pub use trainer::Trainer;

use crate::{MlErr, Result, arch::Weights, dataset::Dataset};

/// Trains weights over `dataset` with the naive perceptron rule.
///
/// # Arguments
/// * `dataset` - The records to learn from.
/// * `learning_rate` - The step length, finite and positive.
/// * `max_epochs` - The epoch budget, positive.
/// * `sink` - Receives one progress record per epoch.
pub fn train_naive(
    dataset: &Dataset,
    learning_rate: f64,
    max_epochs: usize,
    sink: &mut dyn ProgressSink,
) -> Result<Weights> {
    train(Mode::Naive, dataset, learning_rate, max_epochs, sink)
}

/// Trains weights over `dataset` with the pocket perceptron rule.
///
/// # Arguments
/// * `dataset` - The records to learn from.
/// * `learning_rate` - The step length, finite and positive.
/// * `max_epochs` - The epoch budget, positive.
/// * `sink` - Receives one progress record per epoch, always describing the pocket.
pub fn train_pocket(
    dataset: &Dataset,
    learning_rate: f64,
    max_epochs: usize,
    sink: &mut dyn ProgressSink,
) -> Result<Weights> {
    train(Mode::Pocket, dataset, learning_rate, max_epochs, sink)
}

fn train(
    mode: Mode,
    dataset: &Dataset,
    learning_rate: f64,
    max_epochs: usize,
    sink: &mut dyn ProgressSink,
) -> Result<Weights> {
    let max_epochs = NonZeroUsize::new(max_epochs)
        .ok_or_else(|| MlErr::InvalidConfig("max epochs must be greater than 0".into()))?;

    let spec = TrainerSpec {
        mode,
        learning_rate,
        max_epochs,
    };

    TrainerBuilder::new().build(&spec)?.train(dataset, sink)
}
