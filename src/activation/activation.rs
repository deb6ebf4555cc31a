use serde::{Serialize, Deserialize};

/// Non-linearity applied by a trainable layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
    /// Vector-valued; normalises the whole pre-activation vector at once,
    /// so it is only reachable through `activate()`.
    Softmax,
}

impl ActivationFunction {
    /// Turns the pre-activation values `raw` into activations in place.
    pub fn activate(&self, raw: &mut [f64]) {
        match self {
            ActivationFunction::Sigmoid => {
                for x in raw.iter_mut() {
                    *x = sigmoid(*x);
                }
            }
            ActivationFunction::ReLU => {
                for x in raw.iter_mut() {
                    *x = x.max(0.0);
                }
            }
            ActivationFunction::Softmax => softmax(raw),
        }
    }

    /// Local derivative expressed in terms of the layer's *output* `a`.
    ///
    /// Softmax returns `1.0`: at the output it is paired with the combined
    /// softmax/cross-entropy gradient, and hidden softmax layers pass the
    /// propagated error through unchanged.
    pub fn derivative_from_output(&self, a: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => a * (1.0 - a),
            ActivationFunction::ReLU => if a > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Softmax => 1.0,
        }
    }

    /// Half-width of the uniform range used to initialise weights and biases.
    pub fn init_range(&self) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0,
            ActivationFunction::ReLU | ActivationFunction::Softmax => 0.1,
        }
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Numerically stable softmax: the maximum is subtracted before
/// exponentiating so large pre-activations cannot overflow.
pub fn softmax(values: &mut [f64]) {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in values.iter_mut() {
        *v /= sum;
    }
}
