pub mod loop_config;
pub mod loop_fn;
pub mod round_stats;

pub use loop_config::{LoopConfig, LoopOutcome, StopReason};
pub use loop_fn::train_loop;
pub use round_stats::RoundStats;
