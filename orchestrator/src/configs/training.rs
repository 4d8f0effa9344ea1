use std::path::PathBuf;

use machine_learning::training::{DEFAULT_LEARNING_RATE, DEFAULT_MAX_EPOCHS, Mode};
use serde::Deserialize;

use crate::error::OrchestratorError;

/// The dataset file read when none is given.
pub const DEFAULT_DATASET_PATH: &str = "Breast_cancer_data.csv";

/// Where the training records come from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DatasetConfig {
    /// A CSV file, one record per line, label last.
    Local {
        path: PathBuf,
        #[serde(default = "default_has_header")]
        has_header: bool,
    },
    /// Records laid out one after the other in a flat buffer.
    Inline { data: Vec<f64>, record_size: usize },
}

fn default_has_header() -> bool {
    true
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

fn default_max_epochs() -> usize {
    DEFAULT_MAX_EPOCHS.get()
}

/// The configuration of a training run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingConfig {
    pub dataset: DatasetConfig,
    /// Asked interactively when missing.
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_max_epochs")]
    pub max_epochs: usize,
}

impl TrainingConfig {
    /// Creates a config with the default parameters for a CSV file with a header line.
    pub fn local<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_dataset(DatasetConfig::Local {
            path: path.into(),
            has_header: true,
        })
    }

    /// Creates a config with the default parameters for inline records.
    pub fn inline(data: Vec<f64>, record_size: usize) -> Self {
        Self::with_dataset(DatasetConfig::Inline { data, record_size })
    }

    fn with_dataset(dataset: DatasetConfig) -> Self {
        Self {
            dataset,
            mode: None,
            learning_rate: default_learning_rate(),
            max_epochs: default_max_epochs(),
        }
    }

    /// Overrides the config with the `MODE`, `LEARNING_RATE` and `MAX_EPOCHS` variables.
    ///
    /// # Arguments
    /// * `var` - Looks a variable up, usually `std::env::var(..).ok()`.
    ///
    /// # Errors
    /// Returns `OrchestratorError::InvalidConfig` if a present variable doesn't parse.
    pub fn apply_overrides<F>(&mut self, var: F) -> Result<(), OrchestratorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = var("MODE") {
            let mode = mode
                .parse()
                .map_err(|e| OrchestratorError::InvalidConfig(format!("MODE: {e}")))?;
            self.mode = Some(mode);
        }

        if let Some(lr) = var("LEARNING_RATE") {
            self.learning_rate = lr.trim().parse().map_err(|_| {
                OrchestratorError::InvalidConfig(format!("LEARNING_RATE: '{lr}' is not a number"))
            })?;
        }

        if let Some(epochs) = var("MAX_EPOCHS") {
            self.max_epochs = epochs.trim().parse().map_err(|_| {
                OrchestratorError::InvalidConfig(format!(
                    "MAX_EPOCHS: '{epochs}' is not a positive integer"
                ))
            })?;
        }

        Ok(())
    }
}
