use ferrite_net::{train_loop, LayerKind, LoopConfig, Network, NetworkError, Task, TaskSpec};

/// Maps 2-D points to RGB triples.
struct ColorTask {
    rounds: usize,
}

impl Task for ColorTask {
    fn declare(&mut self, spec: &mut TaskSpec) {
        spec.learning_rate = 0.1;
        spec.epochs = 10;
        spec.batch_size = 0;
        spec.inputs = vec![
            vec![0.1, 0.1],
            vec![0.2, 0.4],
            vec![0.9, 0.5],
            vec![0.5, 0.9],
            vec![0.8, 0.1],
        ];
        spec.targets = vec![
            vec![0.0, 0.0, 0.0],
            vec![0.1, 0.1, 0.97],
            vec![0.1, 0.9, 0.97],
            vec![0.9, 0.1, 0.1],
            vec![0.9, 0.9, 0.1],
        ];
        spec.add_layer(LayerKind::Input, 2, 0)
            .add_layer(LayerKind::Sigmoid, 9, 2)
            .add_layer(LayerKind::Sigmoid, 3, 9);
    }

    fn report(&mut self, network: &Network) {
        self.rounds += 1;
        if self.rounds % 100 == 0 {
            println!("round {:>5}: error {:.6}", self.rounds, network.last_train_error());
        }
    }
}

fn main() -> ferrite_net::Result<()> {
    env_logger::init();

    let mut task = ColorTask { rounds: 0 };
    let mut network = Network::new();
    network.configure(&mut task)?;

    let config = LoopConfig::new(2_000).with_target_error(0.0001);
    let outcome = train_loop(&mut network, &mut task, &config)?;
    println!("{:?} after {} rounds in {:?} per round", outcome.reason, outcome.rounds, network.last_train_time());

    let spec = network.task().cloned().ok_or(NetworkError::NotConfigured)?;
    for (input, target) in spec.inputs.iter().zip(&spec.targets) {
        let output = network.predict(input)?;
        println!("{input:?} -> {output:.3?} (target {target:?})");
    }
    Ok(())
}
