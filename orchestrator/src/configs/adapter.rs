use std::num::NonZeroUsize;

use machine_learning::{
    MlErr,
    dataset::Dataset,
    training::{Mode, TrainerSpec},
};

use super::{DatasetConfig, TrainingConfig};
use crate::{error::OrchestratorError, loader};

/// Turns user facing configs into the core's dataset and trainer spec.
#[derive(Default)]
pub struct Adapter;

impl Adapter {
    pub fn new() -> Self {
        Self
    }

    /// Validates the config and adapts it.
    ///
    /// # Arguments
    /// * `training` - The run's configuration.
    /// * `mode` - The update policy, already resolved by the caller.
    ///
    /// # Errors
    /// Returns an `OrchestratorError` if the config is invalid or the dataset can't be loaded,
    /// no training can start in that case.
    pub fn adapt_configs(
        &self,
        training: TrainingConfig,
        mode: Mode,
    ) -> Result<(Dataset, TrainerSpec), OrchestratorError> {
        let spec = self.adapt_trainer(&training, mode)?;
        let dataset = self.adapt_dataset(training.dataset)?;
        Ok((dataset, spec))
    }

    fn adapt_trainer(
        &self,
        training: &TrainingConfig,
        mode: Mode,
    ) -> Result<TrainerSpec, OrchestratorError> {
        let max_epochs = NonZeroUsize::new(training.max_epochs).ok_or_else(|| {
            OrchestratorError::InvalidConfig("max_epochs must be greater than 0".into())
        })?;

        let spec = TrainerSpec {
            mode,
            learning_rate: training.learning_rate,
            max_epochs,
        };

        spec.validate().map_err(|e| match e {
            MlErr::InvalidConfig(msg) => OrchestratorError::InvalidConfig(msg),
            e => e.into(),
        })?;

        Ok(spec)
    }

    fn adapt_dataset(&self, dataset: DatasetConfig) -> Result<Dataset, OrchestratorError> {
        match dataset {
            DatasetConfig::Local { path, has_header } => loader::load_csv(&path, has_header),
            DatasetConfig::Inline { data, record_size } => Ok(Dataset::new(data, record_size)?),
        }
    }
}
