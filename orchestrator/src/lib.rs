//! Drives perceptron training runs: configuration, dataset loading, mode selection and
//! progress reporting around the `machine_learning` core.

pub mod configs;
pub mod error;
pub mod loader;
pub mod prompt;
pub mod report;
mod session;

use machine_learning::training::Mode;

use configs::{Adapter, TrainingConfig};

pub use error::OrchestratorError;
pub use session::{EventSink, Outcome, Session, TrainingEvent};

/// Validates the config, loads its dataset and trains to completion.
///
/// # Arguments
/// * `training` - The run's configuration.
/// * `mode` - The update policy, already resolved.
/// * `sink` - Receives one event per epoch and a final one.
///
/// # Errors
/// Returns an `OrchestratorError` if the config or the dataset are invalid, in which case no
/// training happens.
pub fn train(
    training: TrainingConfig,
    mode: Mode,
    sink: &mut dyn EventSink,
) -> Result<Outcome, OrchestratorError> {
    log::info!("adapting configs");
    let adapter = Adapter::new();
    let (dataset, spec) = adapter.adapt_configs(training, mode)?;
    log::info!(
        "loaded {} record(s), training for at most {} epoch(s) at rate {}",
        dataset.len(),
        spec.max_epochs,
        spec.learning_rate
    );

    Session::new(dataset, spec).run(sink)
}
