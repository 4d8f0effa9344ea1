//! Console rendering of training progress.

use std::{
    fmt,
    io::{self, Write},
};

use machine_learning::arch::Weights;

use crate::session::{EventSink, TrainingEvent};

/// Formats weights with two decimals, comma separated.
pub fn format_weights(weights: &Weights) -> String {
    weights
        .iter()
        .map(|w| format!("{w:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes one line per training event.
///
/// Writing stops at the first I/O error, which is kept and returned by `finish`.
pub struct ConsoleReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the output.
    ///
    /// # Returns
    /// The inner writer, or the first error hit while reporting.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }

        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> EventSink for ConsoleReporter<W> {
    fn on_event(&mut self, event: &TrainingEvent) {
        match event {
            TrainingEvent::Epoch(report) => self.write_line(format_args!(
                "Epoch: {} | errorSum: {:.2} | Weights: {} | Accuracy: {:.2}%",
                report.epoch,
                report.error_sum,
                format_weights(&report.weights),
                report.accuracy
            )),
            TrainingEvent::Finished(report) => self.write_line(format_args!(
                "Final Weights: {} | Accuracy: {:.2}%",
                format_weights(&report.weights),
                report.accuracy
            )),
        }
    }
}
