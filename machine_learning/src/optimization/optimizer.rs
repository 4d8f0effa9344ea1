use ndarray::{ArrayView1, ArrayViewMut1};

/// An update rule for a parameter vector given a gradient of the same length.
pub trait Optimizer {
    fn update_params(&mut self, params: ArrayViewMut1<f64>, grad: ArrayView1<f64>);
}
