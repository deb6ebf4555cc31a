pub mod network;
pub mod shuffle;
pub mod spec;
pub mod task;

pub use network::Network;
pub use shuffle::ShuffleMode;
pub use spec::{LayerSpec, TaskSpec};
pub use task::Task;
