use std::{fs, path::Path};

use log::debug;

use super::{DatasetConfig, TrainingConfig};
use crate::error::OrchestratorError;

/// Loads a [`TrainingConfig`] from a JSON file.
///
/// A relative dataset path is resolved against the config file's directory.
///
/// # Errors
/// Returns an `OrchestratorError` if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<TrainingConfig, OrchestratorError> {
    let content = fs::read_to_string(path).map_err(|source| OrchestratorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = parse(&content)?;

    if let DatasetConfig::Local { path: dataset, .. } = &mut config.dataset {
        if let (true, Some(dir)) = (dataset.is_relative(), path.parent()) {
            *dataset = dir.join(&*dataset);
            debug!("dataset resolved to {}", dataset.display());
        }
    }

    Ok(config)
}

/// Parses a [`TrainingConfig`] from JSON text.
pub fn parse(content: &str) -> Result<TrainingConfig, OrchestratorError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use machine_learning::training::Mode;

    #[test]
    fn parses_a_full_config() {
        let config = parse(
            r#"{
                "dataset": { "kind": "local", "path": "cancer.csv", "has_header": false },
                "mode": "naive",
                "max_epochs": 5
            }"#,
        )
        .unwrap();

        assert_eq!(config.mode, Some(Mode::Naive));
        assert_eq!(config.max_epochs, 5);
        assert_eq!(config.dataset, DatasetConfig::Local {
            path: "cancer.csv".into(),
            has_header: false
        });
    }

    #[test]
    fn missing_dataset_is_an_error() {
        assert!(matches!(
            parse(r#"{ "mode": "naive" }"#),
            Err(OrchestratorError::Json(_))
        ));
    }

    #[test]
    fn unknown_modes_are_an_error() {
        let json = r#"{ "dataset": { "kind": "local", "path": "a.csv" }, "mode": "greedy" }"#;
        assert!(matches!(parse(json), Err(OrchestratorError::Json(_))));
    }
}
