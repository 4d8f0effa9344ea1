//! A binary linear classifier trained with the perceptron rule.
//!
//! Records are rows of `f64` whose last value is the label (0 or 1). Weights hold the bias at
//! index 0 followed by one weight per feature. Two trainers are provided: the naive one returns
//! the weights it ends with, the pocket one returns the most accurate weights seen at the end of
//! any epoch.

pub mod arch;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod optimization;
pub mod training;

pub use error::{MlErr, Result};
