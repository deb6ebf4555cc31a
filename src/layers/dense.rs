use rand::Rng;

use crate::{
    activation::ActivationFunction,
    layers::Layer,
    loss::MseLoss,
    math::{dot, Matrix},
};

/// What sits after a dense layer during the backward pass.
#[derive(Debug, Clone, Copy)]
pub enum Downstream<'a> {
    /// This is the output layer; errors come from the targets.
    Output { targets: &'a [f64] },
    /// A hidden layer; errors are propagated back from `next`, which has
    /// already been processed in this pass.
    Hidden { next: &'a DenseLayer },
}

/// Fully connected layer shared by the Sigmoid, ReLU and Softmax variants.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    pub size: usize,
    pub input_size: usize,
    /// `size × input_size`; row `n` holds neuron `n`'s input weights.
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activator: ActivationFunction,
    activations: Vec<f64>,
    errors: Vec<f64>,
}

impl DenseLayer {
    /// Weights and biases are drawn uniformly from the activation's init range.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activator: ActivationFunction,
        rng: &mut R,
    ) -> DenseLayer {
        let range = activator.init_range();
        let weights = Matrix::uniform(size, input_size, range, rng);
        let biases = (0..size).map(|_| rng.gen_range(-range..range)).collect();

        DenseLayer {
            size,
            input_size,
            weights,
            biases,
            activator,
            activations: vec![0.0; size],
            errors: vec![0.0; size],
        }
    }

    /// # Panics
    /// Panics if `input.len() != self.input_size`.
    pub fn forward(&mut self, input: &[f64]) -> &[f64] {
        assert_eq!(input.len(), self.input_size, "dense layer fed a vector of the wrong length");
        for n in 0..self.size {
            self.activations[n] = dot(input, self.weights.row(n)) + self.biases[n];
        }
        self.activator.activate(&mut self.activations);
        &self.activations
    }

    /// Computes this layer's error signal, then takes one gradient-descent
    /// step on its weights and biases against `previous`'s activations.
    ///
    /// Each error is the loss gradient with respect to the neuron's
    /// pre-activation, so subtracting `learning_rate * error` always moves
    /// downhill. Returns the sum of squared errors for this layer.
    ///
    /// # Panics
    /// Panics if `previous` or the downstream vectors do not match this
    /// layer's shape.
    pub fn backward(&mut self, previous: &Layer, downstream: Downstream<'_>, learning_rate: f64) -> f64 {
        let mut total = 0.0;

        for n in 0..self.size {
            let predicted = self.activations[n];
            let signal = match downstream {
                Downstream::Output { targets } => {
                    assert_eq!(targets.len(), self.size, "target vector of the wrong length");
                    MseLoss::gradient(predicted, targets[n])
                }
                Downstream::Hidden { next } => {
                    assert_eq!(next.input_size, self.size, "next layer is not wired to this one");
                    next.errors().iter()
                        .zip(next.weights.column(n))
                        .map(|(e, w)| e * w)
                        .sum::<f64>()
                }
            };
            self.errors[n] = signal * self.activator.derivative_from_output(predicted);
            total += self.errors[n] * self.errors[n];
        }

        self.update_weights_and_biases(previous.activations(), learning_rate);
        total
    }

    /// `weight[n][j] -= lr * previous[j] * error[n]`, `bias[n] -= lr * error[n]`.
    pub fn update_weights_and_biases(&mut self, previous: &[f64], learning_rate: f64) {
        assert_eq!(previous.len(), self.input_size, "previous activations of the wrong length");
        for n in 0..self.size {
            let step = learning_rate * self.errors[n];
            for (w, &a) in self.weights.data[n].iter_mut().zip(previous) {
                *w -= step * a;
            }
            self.biases[n] -= step;
        }
    }

    pub fn activations(&self) -> &[f64] {
        &self.activations
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }
}
