use serde::{Serialize, Deserialize};

/// Statistics for one round (one `Network::train` call) of `train_loop`.
///
/// When a `progress_tx` channel is configured in `LoopConfig`, the loop
/// sends one `RoundStats` value after every completed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundStats {
    /// 1-based round number.
    pub round: usize,
    /// Maximum rounds requested for this run.
    pub max_rounds: usize,
    /// `Network::last_train_error` after this round.
    pub train_error: f64,
    /// Error accumulated over the final epoch of this round.
    pub epoch_error: f64,
    /// Samples processed by the network since it was configured.
    pub samples_seen: usize,
    /// Wall-clock duration of this round in milliseconds.
    pub elapsed_ms: u64,
}
