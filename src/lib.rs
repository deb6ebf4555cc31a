pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::ActivationFunction;
pub use error::{NetworkError, Result};
pub use layers::{DenseLayer, Layer, LayerKind};
pub use math::{argmax, dot, Matrix};
pub use network::{LayerSpec, Network, ShuffleMode, Task, TaskSpec};
pub use train::{train_loop, LoopConfig, LoopOutcome, StopReason};
