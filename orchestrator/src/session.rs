use log::info;
use machine_learning::{
    arch::Weights,
    dataset::Dataset,
    metrics::accuracy,
    training::{EpochReport, ProgressSink, TrainerBuilder, TrainerSpec},
};

use crate::error::OrchestratorError;

/// Something that happened during a training session.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingEvent {
    /// An epoch finished, as reported by the trainer.
    Epoch(EpochReport),
    /// Training is over. Holds the returned weights and their accuracy, along with the last
    /// reported epoch and error sum.
    Finished(EpochReport),
}

/// Receives the events of a training session, in order.
pub trait EventSink {
    fn on_event(&mut self, event: &TrainingEvent);
}

impl EventSink for Vec<TrainingEvent> {
    fn on_event(&mut self, event: &TrainingEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: &TrainingEvent) {
        (**self).on_event(event);
    }
}

/// The result of a training session.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub weights: Weights,
    pub accuracy: f64,
    /// The amount of epochs that ran.
    pub epochs: usize,
}

/// Forwards the trainer's progress records as events.
struct Relay<'s> {
    sink: &'s mut dyn EventSink,
    last: Option<(usize, f64)>,
}

impl ProgressSink for Relay<'_> {
    fn record(&mut self, report: &EpochReport) {
        self.last = Some((report.epoch, report.error_sum));
        self.sink.on_event(&TrainingEvent::Epoch(report.clone()));
    }
}

/// A single training run over a validated dataset.
pub struct Session {
    dataset: Dataset,
    spec: TrainerSpec,
}

impl Session {
    /// Creates a new `Session`.
    ///
    /// # Arguments
    /// * `dataset` - The records to train on.
    /// * `spec` - How to train.
    pub fn new(dataset: Dataset, spec: TrainerSpec) -> Self {
        Self { dataset, spec }
    }

    /// Trains to completion, relaying every epoch and a final event to `sink`.
    ///
    /// # Returns
    /// The trained weights and their accuracy, or an error if the trainer can't be built.
    pub fn run(&self, sink: &mut dyn EventSink) -> Result<Outcome, OrchestratorError> {
        let mut trainer = TrainerBuilder::new().build(&self.spec)?;
        info!(
            "training a {} perceptron over {} record(s) with {} feature(s)",
            trainer.mode(),
            self.dataset.len(),
            self.dataset.features()
        );

        let mut relay = Relay { sink, last: None };
        let weights = trainer.train(&self.dataset, &mut relay)?;
        let accuracy = accuracy(weights.view(), &self.dataset)?;
        let (epochs, error_sum) = relay.last.unwrap_or((0, 0.0));

        relay.sink.on_event(&TrainingEvent::Finished(EpochReport {
            epoch: epochs,
            error_sum,
            weights: weights.clone(),
            accuracy,
        }));

        info!(epochs = epochs, accuracy = accuracy; "training finished");

        Ok(Outcome {
            weights,
            accuracy,
            epochs,
        })
    }
}
