mod adapter;
mod json;
mod training;

pub use adapter::Adapter;
pub use json::{load, parse};
pub use training::{DEFAULT_DATASET_PATH, DatasetConfig, TrainingConfig};
