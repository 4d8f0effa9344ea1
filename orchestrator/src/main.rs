use std::{env, io, path::PathBuf};

use anyhow::{Context, Result};
use log::info;
use orchestrator::{
    configs::{self, DEFAULT_DATASET_PATH, TrainingConfig},
    prompt,
    report::ConsoleReporter,
};

/// Usage: `perceptron [CONFIG.json | DATASET.csv]`
///
/// `MODE`, `LEARNING_RATE` and `MAX_EPOCHS` override the configured values. The mode is asked
/// for on stdin when it isn't configured anywhere.
fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

    let mut config = if path.extension().is_some_and(|ext| ext == "json") {
        configs::load(&path).with_context(|| format!("cannot load config '{}'", path.display()))?
    } else {
        TrainingConfig::local(path)
    };
    config.apply_overrides(|key| env::var(key).ok())?;

    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt::select_mode(io::stdin().lock(), io::stdout())
            .context("cannot read the training mode")?,
    };

    let mut reporter = ConsoleReporter::new(io::stdout().lock());
    let outcome = orchestrator::train(config, mode, &mut reporter)?;
    let _stdout = reporter
        .finish()
        .context("cannot write the training report")?;

    info!(
        "{mode} training finished after {} epoch(s), accuracy {:.2}%",
        outcome.epochs, outcome.accuracy
    );

    Ok(())
}
