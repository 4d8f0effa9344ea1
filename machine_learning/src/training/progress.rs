use crate::arch::Weights;

/// The progress record produced once per epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    /// 1-based epoch index.
    pub epoch: usize,
    /// Sum of squared prediction errors over the epoch.
    pub error_sum: f64,
    pub weights: Weights,
    /// Accuracy of `weights` over the whole dataset, as a percentage.
    pub accuracy: f64,
}

/// Receives the progress records of a training run, in epoch order.
pub trait ProgressSink {
    fn record(&mut self, report: &EpochReport);
}

impl ProgressSink for Vec<EpochReport> {
    fn record(&mut self, report: &EpochReport) {
        self.push(report.clone());
    }
}

/// Discards every record.
impl ProgressSink for () {
    fn record(&mut self, _report: &EpochReport) {}
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn record(&mut self, report: &EpochReport) {
        (**self).record(report);
    }
}
