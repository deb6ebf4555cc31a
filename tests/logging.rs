//! Progress records emitted while training.

use std::sync::Mutex;

use ferrite_net::{LayerKind, Network, ShuffleMode, TaskSpec};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

#[test]
fn train_logs_every_thousand_samples() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let mut task = TaskSpec {
        learning_rate: 0.1,
        epochs: 500,
        batch_size: 0,
        inputs: vec![vec![0.1], vec![0.3], vec![0.5], vec![0.7], vec![0.9]],
        targets: vec![vec![0.9], vec![0.7], vec![0.5], vec![0.3], vec![0.1]],
        layers: vec![],
    };
    task.add_layer(LayerKind::Input, 1, 0)
        .add_layer(LayerKind::Sigmoid, 1, 1);

    let mut network = Network::with_seed(12);
    network.set_shuffle_mode(ShuffleMode::Seeded(12));
    network.configure(&mut task).unwrap();
    network.train().unwrap();
    assert_eq!(network.num_epochs(), 2500);

    let progress: Vec<String> = LOGGER.records.lock().unwrap().iter()
        .filter(|r| r.starts_with("sample "))
        .cloned()
        .collect();
    assert_eq!(progress.len(), 3, "{progress:?}");
    assert!(progress[0].starts_with("sample 0,"));
    assert!(progress[1].starts_with("sample 1000,"));
    assert!(progress[2].starts_with("sample 2000,"));
}
