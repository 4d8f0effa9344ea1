/// A threshold activation: yields `top` when the input reaches `tresh` and `bottom` otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    top: f64,
    bottom: f64,
    tresh: f64,
}

impl Step {
    /// Returns a new `Step`.
    ///
    /// # Arguments
    /// * `top` - The output for inputs greater than or equal to `tresh`.
    /// * `bottom` - The output for inputs below `tresh`.
    /// * `tresh` - The threshold.
    pub fn new(top: f64, bottom: f64, tresh: f64) -> Self {
        Self { top, bottom, tresh }
    }

    /// The heaviside step used by the perceptron: 1 for `z >= 0`, 0 otherwise.
    pub fn unit() -> Self {
        Self::new(1., 0., 0.)
    }

    pub fn f(&self, z: f64) -> f64 {
        if z >= self.tresh {
            self.top
        } else {
            self.bottom
        }
    }
}
