use ndarray::{ArrayView1, ArrayViewMut1};

use super::Optimizer;

/// Gradient descent optimization algorithm.
///
/// Fed with the perceptron criterion's per-record gradient, `-error * [1, x_0, ..., x_n]`, a
/// step of this optimizer is the classical perceptron learning rule.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step in the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&mut self, mut params: ArrayViewMut1<f64>, grad: ArrayView1<f64>) {
        let lr = self.learning_rate;

        for (w, g) in params.iter_mut().zip(grad) {
            *w -= lr * g;
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn steps_against_the_gradient() {
        let mut gd = GradientDescent::new(0.5);
        let mut params = array![1.0, 2.0, 3.0];
        let grad = array![2.0, -2.0, 0.0];

        gd.update_params(params.view_mut(), grad.view());

        assert_eq!(params, array![0.0_f64, 3.0, 3.0]);
    }

    #[test]
    fn perceptron_gradient_yields_the_perceptron_rule() {
        let mut gd = GradientDescent::new(0.1);
        let mut params = array![0.0, 0.0, 0.0];

        // error = 1 on the record (2, 3): w += 0.1 * [1, 2, 3]
        let error = 1.0_f64;
        let grad = array![-error, -error * 2.0, -error * 3.0];
        gd.update_params(params.view_mut(), grad.view());

        assert_eq!(params, array![0.1_f64, 0.1 * 2.0, 0.1 * 3.0]);
    }
}
