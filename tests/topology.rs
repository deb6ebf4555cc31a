//! Layer validation when building a network by hand or from a task.

use ferrite_net::{LayerKind, Network, NetworkError, TaskSpec};

fn simple_task() -> TaskSpec {
    let mut spec = TaskSpec {
        learning_rate: 0.1,
        epochs: 1,
        batch_size: 0,
        inputs: vec![vec![0.1, 0.1], vec![0.5, 0.5]],
        targets: vec![vec![0.9], vec![0.1]],
        layers: vec![],
    };
    spec.add_layer(LayerKind::Input, 2, 0)
        .add_layer(LayerKind::Sigmoid, 1, 2)
        .add_layer(LayerKind::Sigmoid, 1, 1);
    spec
}

#[test]
fn first_layer_must_be_input() {
    let mut network = Network::with_seed(1);
    let err = network.add_layer(LayerKind::Sigmoid, 1, 0).unwrap_err();
    assert!(matches!(err, NetworkError::MissingInput { kind: LayerKind::Sigmoid }));
    assert!(network.layers().is_empty());
}

#[test]
fn second_input_layer_is_rejected() {
    let mut network = Network::with_seed(1);
    network.add_layer(LayerKind::Input, 2, 0).unwrap();
    let err = network.add_layer(LayerKind::Input, 2, 0).unwrap_err();
    assert!(matches!(err, NetworkError::DuplicateInput));
    assert_eq!(network.layers().len(), 1);
}

#[test]
fn zero_neurons_and_mismatched_inputs_are_rejected() {
    let mut network = Network::with_seed(1);
    network.add_layer(LayerKind::Input, 2, 0).unwrap();
    network.add_layer(LayerKind::Sigmoid, 2, 2).unwrap();

    assert!(matches!(
        network.add_layer(LayerKind::Relu, 0, 2),
        Err(NetworkError::ZeroNeurons { kind: LayerKind::Relu })
    ));
    assert!(matches!(
        network.add_layer(LayerKind::Relu, 2, 3),
        Err(NetworkError::InputCountMismatch { expected: 2, got: 3 })
    ));
    assert_eq!(network.layers().len(), 2);

    let layer = network.add_layer(LayerKind::Softmax, 4, 2).unwrap();
    assert_eq!(layer.kind(), LayerKind::Softmax);
    assert_eq!((layer.size(), layer.input_size()), (4, 2));
}

#[test]
fn configure_builds_declared_layers() {
    let mut network = Network::with_seed(1);
    network.configure(&mut simple_task()).unwrap();

    let kinds: Vec<_> = network.layers().iter().map(|l| l.kind()).collect();
    assert_eq!(kinds, vec![LayerKind::Input, LayerKind::Sigmoid, LayerKind::Sigmoid]);
    assert!(network.is_configured());
}

#[test]
fn configure_twice_is_an_error() {
    let mut network = Network::with_seed(1);
    network.configure(&mut simple_task()).unwrap();
    assert!(matches!(
        network.configure(&mut simple_task()),
        Err(NetworkError::AlreadyConfigured)
    ));
    assert_eq!(network.layers().len(), 3);
}

#[test]
fn duplicate_input_in_task_rolls_back() {
    let mut task = simple_task();
    task.layers.insert(1, task.layers[0].clone());

    let mut network = Network::with_seed(1);
    assert!(matches!(network.configure(&mut task), Err(NetworkError::DuplicateInput)));
    assert!(network.layers().is_empty());
    assert!(!network.is_configured());
}

#[test]
fn invalid_descriptors_are_rejected() {
    let cases: [(fn(&mut TaskSpec), fn(&NetworkError) -> bool); 9] = [
        (|t| t.layers.clear(), |e| matches!(e, NetworkError::EmptyTopology)),
        (|t| t.learning_rate = 0.0, |e| matches!(e, NetworkError::InvalidLearningRate(_))),
        (|t| t.learning_rate = f64::NAN, |e| matches!(e, NetworkError::InvalidLearningRate(_))),
        (|t| t.epochs = 0, |e| matches!(e, NetworkError::InvalidEpochs)),
        (|t| { t.targets.pop(); }, |e| matches!(e, NetworkError::DatasetMismatch { inputs: 2, targets: 1 })),
        (|t| { t.inputs.clear(); t.targets.clear(); }, |e| matches!(e, NetworkError::EmptyDataset)),
        (|t| t.batch_size = 3, |e| matches!(e, NetworkError::BatchTooLarge { batch: 3, len: 2 })),
        (|t| t.inputs[1].push(0.0), |e| matches!(e, NetworkError::SampleLength { row: 1, expected: 2, got: 3 })),
        (|t| t.targets[0] = vec![], |e| matches!(e, NetworkError::SampleLength { row: 0, expected: 1, got: 0 })),
    ];

    for (i, (mutate, check)) in cases.into_iter().enumerate() {
        let mut task = simple_task();
        mutate(&mut task);
        let mut network = Network::with_seed(1);
        let err = network.configure(&mut task).unwrap_err();
        assert!(check(&err), "case {i}: unexpected error {err:?}");
        assert!(network.layers().is_empty(), "case {i}: layers left behind");
    }
}
