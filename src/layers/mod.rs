pub mod dense;
pub mod input;
pub mod kind;
pub mod layer;

pub use dense::{DenseLayer, Downstream};
pub use input::InputLayer;
pub use kind::LayerKind;
pub use layer::Layer;
