use serde::{Serialize, Deserialize};

use crate::activation::ActivationFunction;

/// Variant tag used when declaring a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Input,
    Sigmoid,
    Relu,
    Softmax,
}

impl LayerKind {
    /// The activation a trainable layer of this kind applies; `None` for `Input`.
    pub fn activation(self) -> Option<ActivationFunction> {
        match self {
            LayerKind::Input => None,
            LayerKind::Sigmoid => Some(ActivationFunction::Sigmoid),
            LayerKind::Relu => Some(ActivationFunction::ReLU),
            LayerKind::Softmax => Some(ActivationFunction::Softmax),
        }
    }
}

impl From<ActivationFunction> for LayerKind {
    fn from(activation: ActivationFunction) -> Self {
        match activation {
            ActivationFunction::Sigmoid => LayerKind::Sigmoid,
            ActivationFunction::ReLU => LayerKind::Relu,
            ActivationFunction::Softmax => LayerKind::Softmax,
        }
    }
}
