use thiserror::Error;

use crate::layers::LayerKind;

/// Errors raised while building, configuring or driving a [`Network`](crate::Network).
///
/// Configuration variants are returned before any state changes, so a
/// caller can inspect the error and retry with a corrected topology.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{kind:?} layer must have at least one neuron")]
    ZeroNeurons { kind: LayerKind },

    #[error("the network already has an input layer")]
    DuplicateInput,

    #[error("{kind:?} layer added before any input layer")]
    MissingInput { kind: LayerKind },

    #[error("layer declares {got} inputs but the previous layer has {expected} neurons")]
    InputCountMismatch { expected: usize, got: usize },

    #[error("task declares no layers")]
    EmptyTopology,

    #[error("network is already configured")]
    AlreadyConfigured,

    #[error("network has not been configured with a task")]
    NotConfigured,

    #[error("network has no layers")]
    EmptyNetwork,

    #[error("dataset has {inputs} input rows but {targets} target rows")]
    DatasetMismatch { inputs: usize, targets: usize },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("learning rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),

    #[error("epoch count must be at least 1")]
    InvalidEpochs,

    #[error("batch size {batch} exceeds dataset size {len}")]
    BatchTooLarge { batch: usize, len: usize },

    #[error("dataset row {row} has {got} values, expected {expected}")]
    SampleLength { row: usize, expected: usize, got: usize },

    #[error("input has {got} values, expected {expected}")]
    InputLength { expected: usize, got: usize },

    #[error("target has {got} values, expected {expected}")]
    TargetLength { expected: usize, got: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
