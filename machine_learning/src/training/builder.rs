use super::{Mode, NaiveTrainer, PocketTrainer, Trainer, TrainerSpec};
use crate::{Result, optimization::GradientDescent};

/// Builds `Trainer`s given a specification.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the trainer.
    ///
    /// # Returns
    /// The trainer or an error if the spec is invalid.
    pub fn build(&self, spec: &TrainerSpec) -> Result<Box<dyn Trainer>> {
        spec.validate()?;

        let optimizer = GradientDescent::new(spec.learning_rate);
        let trainer: Box<dyn Trainer> = match spec.mode {
            Mode::Naive => Box::new(NaiveTrainer::new(optimizer, spec.max_epochs)),
            Mode::Pocket => Box::new(PocketTrainer::new(optimizer, spec.max_epochs)),
        };

        Ok(trainer)
    }
}
