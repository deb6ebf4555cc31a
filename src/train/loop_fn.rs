use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::Result;
use crate::network::{Network, Task};
use crate::train::loop_config::{LoopConfig, LoopOutcome, StopReason};
use crate::train::round_stats::RoundStats;

/// Calls `network.train()` repeatedly until the error target is met, the
/// round budget runs out, the stop flag is raised or the progress receiver
/// goes away. `task.report` runs after every round.
///
/// `network` must already be configured (normally from `task`).
pub fn train_loop<T: Task + ?Sized>(
    network: &mut Network,
    task: &mut T,
    config: &LoopConfig,
) -> Result<LoopOutcome> {
    let stopped = || {
        config.stop_flag.as_ref().map_or(false, |flag| flag.load(Ordering::Relaxed))
    };

    for round in 1..=config.max_rounds {
        if stopped() {
            return Ok(outcome(round - 1, network, StopReason::Stopped));
        }

        let t_start = Instant::now();
        let epoch_error = network.train()?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        task.report(network);

        if let Some(ref tx) = config.progress_tx {
            let stats = RoundStats {
                round,
                max_rounds: config.max_rounds,
                train_error: network.last_train_error(),
                epoch_error,
                samples_seen: network.num_epochs(),
                elapsed_ms,
            };
            if tx.send(stats).is_err() {
                return Ok(outcome(round, network, StopReason::Disconnected));
            }
        }

        if let Some(target) = config.target_error {
            if network.last_train_error() < target {
                log::info!("converged after {round} rounds, error {:.6}", network.last_train_error());
                return Ok(outcome(round, network, StopReason::Converged));
            }
        }
    }

    Ok(outcome(config.max_rounds, network, StopReason::MaxRounds))
}

fn outcome(rounds: usize, network: &Network, reason: StopReason) -> LoopOutcome {
    LoopOutcome {
        rounds,
        last_train_error: network.last_train_error(),
        reason,
    }
}
