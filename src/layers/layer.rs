use rand::Rng;

use crate::layers::{DenseLayer, InputLayer, LayerKind};

/// One stage of a network.
#[derive(Debug, Clone)]
pub enum Layer {
    Input(InputLayer),
    Dense(DenseLayer),
}

impl Layer {
    /// Builds a layer of the given kind, drawing initial parameters from `rng`.
    pub fn new<R: Rng + ?Sized>(kind: LayerKind, size: usize, input_size: usize, rng: &mut R) -> Layer {
        match kind.activation() {
            None => Layer::Input(InputLayer::new(size, input_size)),
            Some(activator) => Layer::Dense(DenseLayer::new(size, input_size, activator, rng)),
        }
    }

    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Input(_) => LayerKind::Input,
            Layer::Dense(dense) => dense.activator.into(),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Layer::Input(input) => input.size,
            Layer::Dense(dense) => dense.size,
        }
    }

    pub fn input_size(&self) -> usize {
        match self {
            Layer::Input(input) => input.input_size,
            Layer::Dense(dense) => dense.input_size,
        }
    }

    pub fn forward(&mut self, input: &[f64]) -> &[f64] {
        match self {
            Layer::Input(layer) => layer.forward(input),
            Layer::Dense(layer) => layer.forward(input),
        }
    }

    /// Output of the most recent forward pass.
    pub fn activations(&self) -> &[f64] {
        match self {
            Layer::Input(layer) => layer.activations(),
            Layer::Dense(layer) => layer.activations(),
        }
    }

    pub fn as_dense(&self) -> Option<&DenseLayer> {
        match self {
            Layer::Dense(dense) => Some(dense),
            Layer::Input(_) => None,
        }
    }

    pub fn as_dense_mut(&mut self) -> Option<&mut DenseLayer> {
        match self {
            Layer::Dense(dense) => Some(dense),
            Layer::Input(_) => None,
        }
    }
}
