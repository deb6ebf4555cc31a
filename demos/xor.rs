use ferrite_net::{LayerKind, Network, NetworkError, Task, TaskSpec};

struct XorTask;

impl Task for XorTask {
    fn declare(&mut self, spec: &mut TaskSpec) {
        spec.learning_rate = 0.5;
        spec.epochs = 1000;
        spec.batch_size = 0;
        spec.inputs = vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ];
        spec.targets = vec![
            vec![1.0],
            vec![0.0],
            vec![1.0],
            vec![0.0],
        ];
        spec.add_layer(LayerKind::Input, 2, 0)
            .add_layer(LayerKind::Sigmoid, 3, 2)
            .add_layer(LayerKind::Sigmoid, 1, 3);
    }
}

fn main() -> ferrite_net::Result<()> {
    env_logger::init();

    let mut network = Network::new();
    network.configure(&mut XorTask)?;

    let spec = network.task().cloned().ok_or(NetworkError::NotConfigured)?;
    let (inputs, targets) = (spec.inputs, spec.targets);

    for round in 0..10 {
        let error = network.train()?;
        println!("Round {round}: epoch error = {error:.6}");
    }

    println!("MSE: {:.6}", network.evaluate(&inputs, &targets)?);
    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }
    Ok(())
}
