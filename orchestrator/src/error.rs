use std::{fmt, io, path::PathBuf};

use machine_learning::MlErr;

/// All errors that can occur in the orchestrator.
#[derive(Debug)]
pub enum OrchestratorError {
    /// Invalid configuration, caught before training.
    InvalidConfig(String),
    /// A file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The dataset source holds something that isn't a valid record.
    Parse { line: usize, msg: String },
    /// The config file is not valid JSON for a `TrainingConfig`.
    Json(serde_json::Error),
    /// The core rejected the dataset or the training parameters.
    Ml(MlErr),
    /// An underlying I/O error not covered by the above variants.
    Io(io::Error),
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Read { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Parse { line, msg } => write!(f, "dataset line {line}: {msg}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Ml(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Ml(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for OrchestratorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for OrchestratorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<MlErr> for OrchestratorError {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}
