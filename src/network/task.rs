use crate::network::{Network, TaskSpec};

/// A training task: supplies the dataset, hyperparameters and topology a
/// network is configured from.
pub trait Task {
    /// Fills in `spec`. Called exactly once, by [`Network::configure`].
    fn declare(&mut self, spec: &mut TaskSpec);

    /// Reporting hook for callers that drive training in rounds, e.g. to
    /// print or plot progress. Never invoked by the network itself.
    fn report(&mut self, _network: &Network) {}
}
