use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::train::round_stats::RoundStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_rounds`  : upper bound on `Network::train` calls
/// - `target_error`: stop once `last_train_error` drops below this value
/// - `progress_tx` : optional channel; one `RoundStats` is sent per round.
///                    If the receiver is dropped the loop stops.
/// - `stop_flag`   : optional atomic flag; when set to `true` from another
///                    thread the loop stops before the next round.
pub struct LoopConfig {
    pub max_rounds: usize,
    pub target_error: Option<f64>,
    pub progress_tx: Option<mpsc::Sender<RoundStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl LoopConfig {
    /// A config with no convergence target, progress channel or stop flag.
    pub fn new(max_rounds: usize) -> Self {
        LoopConfig {
            max_rounds,
            target_error: None,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_target_error(mut self, target_error: f64) -> Self {
        self.target_error = Some(target_error);
        self
    }
}

/// Why `train_loop` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Converged,
    MaxRounds,
    Stopped,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopOutcome {
    pub rounds: usize,
    pub last_train_error: f64,
    pub reason: StopReason,
}
