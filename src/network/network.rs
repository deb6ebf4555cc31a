use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    error::{NetworkError, Result},
    layers::{DenseLayer, Downstream, Layer, LayerKind},
    loss::MseLoss,
    math::argmax,
    network::{shuffle::Shuffler, ShuffleMode, Task, TaskSpec},
};

/// A feedforward network: an input layer followed by dense layers, each
/// wired to the previous layer's output.
#[derive(Debug)]
pub struct Network {
    layers: Vec<Layer>,
    task: Option<TaskSpec>,
    init_rng: StdRng,
    shuffle_mode: ShuffleMode,
    shuffler: Shuffler,
    num_epochs: usize,
    last_train_error: f64,
    last_train_time: Duration,
}

impl Network {
    /// An empty network whose weights are initialised from entropy.
    pub fn new() -> Network {
        Network::with_rng(StdRng::from_entropy())
    }

    /// An empty network with reproducible weight initialisation.
    pub fn with_seed(seed: u64) -> Network {
        Network::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(init_rng: StdRng) -> Network {
        Network {
            layers: Vec::new(),
            task: None,
            init_rng,
            shuffle_mode: ShuffleMode::default(),
            shuffler: Shuffler::new(0, ShuffleMode::default()),
            num_epochs: 0,
            last_train_error: 0.0,
            last_train_time: Duration::ZERO,
        }
    }

    /// Chooses how training orders samples. May be called before or after
    /// `configure`; a seeded mode restarts its sequence from `seed`.
    pub fn set_shuffle_mode(&mut self, mode: ShuffleMode) {
        self.shuffle_mode = mode;
        self.shuffler.reseed(mode);
    }

    /// Validates and appends one layer.
    ///
    /// The first layer must be `Input`, and only the first. Every other layer
    /// must declare as many inputs as the current last layer has neurons. On
    /// error nothing is appended.
    pub fn add_layer(&mut self, kind: LayerKind, size: usize, input_size: usize) -> Result<&Layer> {
        if let Err(err) = self.check_layer(kind, size, input_size) {
            log::warn!("rejected {kind:?} layer ({size} neurons, {input_size} inputs): {err}");
            return Err(err);
        }

        let layer = Layer::new(kind, size, input_size, &mut self.init_rng);
        log::debug!("layer {}: {kind:?} with {size} neurons, {input_size} inputs", self.layers.len());
        self.layers.push(layer);
        Ok(&self.layers[self.layers.len() - 1])
    }

    fn check_layer(&self, kind: LayerKind, size: usize, input_size: usize) -> Result<()> {
        if size == 0 {
            return Err(NetworkError::ZeroNeurons { kind });
        }
        match (kind, self.layers.last()) {
            (LayerKind::Input, None) => Ok(()),
            (LayerKind::Input, Some(_)) => Err(NetworkError::DuplicateInput),
            (_, None) => Err(NetworkError::MissingInput { kind }),
            (_, Some(last)) if last.size() != input_size => Err(NetworkError::InputCountMismatch {
                expected: last.size(),
                got: input_size,
            }),
            _ => Ok(()),
        }
    }

    /// Binds a task: lets it declare its descriptor, builds the declared
    /// layers and prepares the shuffle permutation over the dataset rows.
    ///
    /// Must be called once. If anything in the descriptor is invalid the
    /// layers added so far are removed and the network stays unconfigured.
    pub fn configure<T: Task + ?Sized>(&mut self, task: &mut T) -> Result<()> {
        if self.task.is_some() {
            return Err(NetworkError::AlreadyConfigured);
        }

        let mut spec = TaskSpec::default();
        task.declare(&mut spec);
        validate_hyperparameters(&spec)?;

        let existing = self.layers.len();
        let built = spec.layers.iter()
            .try_for_each(|l| self.add_layer(l.kind, l.size, l.input_size).map(|_| ()))
            .and_then(|_| self.check_dataset(&spec));
        if let Err(err) = built {
            self.layers.truncate(existing);
            return Err(err);
        }

        log::info!(
            "configured network: {} layers, {} samples, learning rate {}, {} epochs per train",
            self.layers.len(),
            spec.inputs.len(),
            spec.learning_rate,
            spec.epochs,
        );
        self.shuffler = Shuffler::new(spec.inputs.len(), self.shuffle_mode);
        self.task = Some(spec);
        Ok(())
    }

    fn check_dataset(&self, spec: &TaskSpec) -> Result<()> {
        let input_size = self.layers.first().map_or(0, Layer::size);
        let output_size = self.layers.last().map_or(0, Layer::size);

        for (row, (input, target)) in spec.inputs.iter().zip(&spec.targets).enumerate() {
            if input.len() != input_size {
                return Err(NetworkError::SampleLength { row, expected: input_size, got: input.len() });
            }
            if target.len() != output_size {
                return Err(NetworkError::SampleLength { row, expected: output_size, got: target.len() });
            }
        }
        Ok(())
    }

    /// Feeds `input` through every layer in order; returns the output layer's
    /// activations.
    pub fn forward(&mut self, input: &[f64]) -> Result<&[f64]> {
        let first = self.layers.first().ok_or(NetworkError::EmptyNetwork)?;
        if input.len() != first.size() {
            return Err(NetworkError::InputLength { expected: first.size(), got: input.len() });
        }
        Ok(forward_layers(&mut self.layers, input))
    }

    /// Back-propagates from the output layer towards the input, updating
    /// every trainable layer with the task's learning rate. Uses the
    /// activations left by the preceding `forward`. Returns the summed
    /// squared error of all layers.
    pub fn backward(&mut self, targets: &[f64]) -> Result<f64> {
        let task = self.task.as_ref().ok_or(NetworkError::NotConfigured)?;
        let output_size = self.layers.last().map_or(0, Layer::size);
        if targets.len() != output_size {
            return Err(NetworkError::TargetLength { expected: output_size, got: targets.len() });
        }
        Ok(backward_layers(&mut self.layers, targets, task.learning_rate))
    }

    /// Runs the task's configured number of epochs.
    ///
    /// Each epoch reshuffles the sample order and processes the first
    /// `batch_size` samples (all of them when it is 0), one forward and one
    /// backward pass per sample. Returns the error accumulated over the final
    /// epoch.
    pub fn train(&mut self) -> Result<f64> {
        let task = self.task.as_ref().ok_or(NetworkError::NotConfigured)?;
        let start = Instant::now();
        let num_items = task.items_per_epoch();
        let mut error = 0.0;

        for epoch in 0..task.epochs {
            let last_epoch = epoch + 1 == task.epochs;
            error = 0.0;

            let order = self.shuffler.shuffle();
            for (i, &row) in order[..num_items].iter().enumerate() {
                forward_layers(&mut self.layers, &task.inputs[row]);
                error += backward_layers(&mut self.layers, &task.targets[row], task.learning_rate);

                if i == 0 && last_epoch {
                    self.last_train_error = error;
                }
                if self.num_epochs % 1000 == 0 {
                    log::info!("sample {}, error {:.6}", self.num_epochs, error);
                }
                self.num_epochs += 1;
            }
        }

        self.last_train_time = start.elapsed();
        log::debug!("train: {} epochs in {:?}, final epoch error {:.6}", task.epochs, self.last_train_time, error);
        Ok(error)
    }

    /// Runs a forward pass on a configured network and returns the output
    /// layer's activations.
    ///
    /// The slice borrows the network's own buffers and is overwritten by the
    /// next forward pass; copy it to keep it.
    pub fn predict(&mut self, input: &[f64]) -> Result<&[f64]> {
        if self.task.is_none() {
            return Err(NetworkError::NotConfigured);
        }
        self.forward(input)
    }

    /// Mean squared error over a dataset. Weights are not touched.
    pub fn evaluate(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
        check_rows(inputs, targets)?;
        let mut total = 0.0;
        for (input, target) in inputs.iter().zip(targets) {
            let output = self.forward(input)?;
            if output.len() != target.len() {
                return Err(NetworkError::TargetLength { expected: output.len(), got: target.len() });
            }
            total += MseLoss::loss(output, target);
        }
        Ok(total / inputs.len() as f64)
    }

    /// Fraction of rows whose predicted `argmax` matches the target's.
    pub fn accuracy(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
        check_rows(inputs, targets)?;
        let mut correct = 0;
        for (input, target) in inputs.iter().zip(targets) {
            if argmax(self.forward(input)?) == argmax(target) {
                correct += 1;
            }
        }
        Ok(correct as f64 / inputs.len() as f64)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable access to a trainable layer's parameters.
    pub fn dense_mut(&mut self, index: usize) -> Option<&mut DenseLayer> {
        self.layers.get_mut(index).and_then(Layer::as_dense_mut)
    }

    pub fn task(&self) -> Option<&TaskSpec> {
        self.task.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.task.is_some()
    }

    /// Total samples processed by `train` so far.
    pub fn num_epochs(&self) -> usize {
        self.num_epochs
    }

    /// Error after the first sample of the final epoch of the latest `train`.
    pub fn last_train_error(&self) -> f64 {
        self.last_train_error
    }

    pub fn last_train_time(&self) -> Duration {
        self.last_train_time
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::new()
    }
}

fn validate_hyperparameters(spec: &TaskSpec) -> Result<()> {
    if spec.layers.is_empty() {
        return Err(NetworkError::EmptyTopology);
    }
    if !(spec.learning_rate > 0.0 && spec.learning_rate.is_finite()) {
        return Err(NetworkError::InvalidLearningRate(spec.learning_rate));
    }
    if spec.epochs == 0 {
        return Err(NetworkError::InvalidEpochs);
    }
    check_rows(&spec.inputs, &spec.targets)?;
    if spec.batch_size > spec.inputs.len() {
        return Err(NetworkError::BatchTooLarge { batch: spec.batch_size, len: spec.inputs.len() });
    }
    Ok(())
}

fn check_rows(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
    if inputs.len() != targets.len() {
        return Err(NetworkError::DatasetMismatch { inputs: inputs.len(), targets: targets.len() });
    }
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    Ok(())
}

/// Each layer consumes the activations its predecessor just produced.
fn forward_layers<'a>(layers: &'a mut [Layer], input: &[f64]) -> &'a [f64] {
    let Some((first, rest)) = layers.split_first_mut() else {
        return &[];
    };
    let mut current = first.forward(input);
    for layer in rest {
        current = layer.forward(current);
    }
    current
}

/// Walks from the output layer back to the first dense layer. Each layer
/// sees its predecessor (for the weight update) and its already-updated
/// successor (for error propagation).
fn backward_layers(layers: &mut [Layer], targets: &[f64], learning_rate: f64) -> f64 {
    let mut error = 0.0;
    for i in (1..layers.len()).rev() {
        let (head, tail) = layers.split_at_mut(i);
        let (current, rest) = tail.split_at_mut(1);
        let downstream = match rest.first().and_then(Layer::as_dense) {
            Some(next) => Downstream::Hidden { next },
            None => Downstream::Output { targets },
        };
        if let Some(dense) = current[0].as_dense_mut() {
            error += dense.backward(&head[i - 1], downstream, learning_rate);
        }
    }
    error
}
