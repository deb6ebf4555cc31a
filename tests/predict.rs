//! Forward passes and single backward steps on untrained networks.

use ferrite_net::{argmax, LayerKind, Matrix, Network, NetworkError, TaskSpec};

const SIMPLE_INPUTS: [[f64; 2]; 2] = [[0.1, 0.1], [0.5, 0.5]];

fn simple_network(kind: LayerKind) -> Network {
    let mut network = Network::with_seed(3);
    network.add_layer(LayerKind::Input, 2, 0).unwrap();
    network.add_layer(kind, 1, 2).unwrap();
    network.add_layer(kind, 1, 1).unwrap();
    network
}

#[test]
fn predict_is_repeatable() {
    for kind in [LayerKind::Sigmoid, LayerKind::Relu] {
        let mut task = simple_task();
        for layer in task.layers.iter_mut().skip(1) {
            layer.kind = kind;
        }
        let mut network = Network::with_seed(3);
        network.configure(&mut task).unwrap();

        let first = network.predict(&SIMPLE_INPUTS[0]).unwrap().to_vec();
        let second = network.predict(&SIMPLE_INPUTS[0]).unwrap().to_vec();
        assert_eq!(first, second, "{kind:?}");
    }
}

#[test]
fn softmax_output_is_a_distribution() {
    let mut network = Network::with_seed(11);
    network.add_layer(LayerKind::Input, 2, 0).unwrap();
    network.add_layer(LayerKind::Relu, 1, 2).unwrap();
    network.add_layer(LayerKind::Softmax, 6, 1).unwrap();

    for input in SIMPLE_INPUTS.iter().chain(&[[50.0, -80.0], [1e3, 1e3]]) {
        let first = network.forward(input).unwrap().to_vec();
        let second = network.forward(input).unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(argmax(&first), argmax(&second));
        assert_eq!(first.len(), 6);
        let total: f64 = first.iter().sum();
        assert!((total - 1.0).abs() < 1e-4, "sum {total}");
    }
}

#[test]
fn single_neuron_forward() {
    let mut network = Network::with_seed(1);
    network.add_layer(LayerKind::Input, 2, 0).unwrap();
    network.add_layer(LayerKind::Sigmoid, 1, 2).unwrap();

    let dense = network.dense_mut(1).unwrap();
    dense.biases = vec![0.3];
    dense.weights = Matrix::from_data(vec![vec![0.23, -0.1]]);

    let out = network.forward(&[1.0, 0.0]).unwrap();
    assert!((out[0] - 0.6295).abs() < 0.001);
}

#[test]
fn precondition_violations_are_errors() {
    let mut empty = Network::with_seed(1);
    assert!(matches!(empty.forward(&[1.0]), Err(NetworkError::EmptyNetwork)));
    assert!(matches!(empty.predict(&[1.0]), Err(NetworkError::NotConfigured)));
    assert!(matches!(empty.train(), Err(NetworkError::NotConfigured)));

    let mut network = simple_network(LayerKind::Sigmoid);
    assert!(!network.is_configured());
    assert!(matches!(network.predict(&[1.0, 0.0]), Err(NetworkError::NotConfigured)));
    assert!(matches!(
        network.forward(&[1.0, 2.0, 3.0]),
        Err(NetworkError::InputLength { expected: 2, got: 3 })
    ));
    assert!(matches!(network.backward(&[1.0]), Err(NetworkError::NotConfigured)));
    assert!(matches!(network.train(), Err(NetworkError::NotConfigured)));

    let mut configured = Network::with_seed(1);
    configured.configure(&mut simple_task()).unwrap();
    assert!(matches!(
        configured.predict(&[1.0, 2.0, 3.0]),
        Err(NetworkError::InputLength { expected: 2, got: 3 })
    ));
}

fn simple_task() -> TaskSpec {
    let mut spec = TaskSpec {
        learning_rate: 0.1,
        epochs: 1,
        batch_size: 0,
        inputs: SIMPLE_INPUTS.iter().map(|r| r.to_vec()).collect(),
        targets: vec![vec![1.0], vec![5.0]],
        layers: vec![],
    };
    spec.add_layer(LayerKind::Input, 2, 0)
        .add_layer(LayerKind::Sigmoid, 1, 2)
        .add_layer(LayerKind::Sigmoid, 1, 1);
    spec
}

#[test]
fn backward_losses_depend_on_the_sample() {
    let mut network = Network::with_seed(5);
    network.configure(&mut simple_task()).unwrap();

    network.predict(&SIMPLE_INPUTS[0]).unwrap();
    let loss1 = network.backward(&[1.0]).unwrap();

    network.predict(&SIMPLE_INPUTS[1]).unwrap();
    let loss2 = network.backward(&[1.0]).unwrap();

    assert!(loss1 > 0.0);
    assert_ne!(loss1, loss2);
}

#[test]
fn backward_checks_target_length() {
    let mut network = Network::with_seed(5);
    network.configure(&mut simple_task()).unwrap();
    network.predict(&SIMPLE_INPUTS[0]).unwrap();

    assert!(matches!(
        network.backward(&[1.0, 2.0]),
        Err(NetworkError::TargetLength { expected: 1, got: 2 })
    ));
}

#[test]
fn backward_only_touches_trainable_layers() {
    let mut network = Network::with_seed(5);
    network.configure(&mut simple_task()).unwrap();
    let before: Vec<Matrix> = network.layers().iter()
        .filter_map(|l| l.as_dense())
        .map(|d| d.weights.clone())
        .collect();

    network.predict(&SIMPLE_INPUTS[1]).unwrap();
    network.backward(&[5.0]).unwrap();

    let after: Vec<Matrix> = network.layers().iter()
        .filter_map(|l| l.as_dense())
        .map(|d| d.weights.clone())
        .collect();
    assert_eq!(before.len(), 2);
    assert!(before.iter().zip(&after).all(|(b, a)| b != a));
    assert_eq!(network.layers()[0].activations(), &SIMPLE_INPUTS[1]);
}
