use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::layers::LayerKind;
use crate::network::task::Task;

/// Describes one layer in a task's topology.
///
/// Fields:
/// - `kind`       : variant of the layer (`input`, `sigmoid`, `relu`, `softmax`)
/// - `size`       : number of neurons in this layer
/// - `input_size` : number of values feeding into this layer; must equal the
///                   previous layer's `size` (ignored for the input layer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub kind: LayerKind,
    pub size: usize,
    #[serde(default)]
    pub input_size: usize,
}

/// A fully serializable task descriptor: the dataset, the hyperparameters
/// and the layer topology a [`Network`](crate::Network) is configured from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Samples processed per epoch; `0` means the whole dataset.
    #[serde(default)]
    pub batch_size: usize,
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl TaskSpec {
    /// Appends a layer description to the topology.
    pub fn add_layer(&mut self, kind: LayerKind, size: usize, input_size: usize) -> &mut Self {
        self.layers.push(LayerSpec { kind, size, input_size });
        self
    }

    /// Number of samples one epoch processes.
    pub fn items_per_epoch(&self) -> usize {
        if self.batch_size > 0 { self.batch_size } else { self.inputs.len() }
    }

    /// Serializes the task to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `TaskSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<TaskSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for TaskSpec {
    fn default() -> Self {
        TaskSpec {
            learning_rate: 0.1,
            epochs: 1,
            batch_size: 0,
            inputs: vec![],
            targets: vec![],
            layers: vec![],
        }
    }
}

/// A plain descriptor declares itself.
impl Task for TaskSpec {
    fn declare(&mut self, spec: &mut TaskSpec) {
        spec.clone_from(self);
    }
}
