// Trains a network described by a task JSON file and prints its predictions
// for the training inputs.
//
//   cargo run -- task.json [max_rounds] [target_error]
//
// Set RUST_LOG=info (or debug) to see training progress.
use clap::Parser;
use ferrite_net::{train_loop, LoopConfig, Network, TaskSpec};

#[derive(Parser, Debug)]
#[command(name = "ferrite-net")]
#[command(about = "Train a feedforward network from a task file", long_about = None)]
struct Args {
    /// Task descriptor (JSON)
    path: String,

    /// Maximum number of train rounds
    #[arg(default_value_t = 10_000)]
    max_rounds: usize,

    /// Stop once the last training error drops below this value
    #[arg(default_value_t = 0.001)]
    target_error: f64,
}

fn main() -> ferrite_net::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut task = TaskSpec::load_json(&args.path)?;
    let mut network = Network::new();
    network.configure(&mut task)?;

    let config = LoopConfig::new(args.max_rounds).with_target_error(args.target_error);
    let outcome = train_loop(&mut network, &mut task, &config)?;
    println!(
        "{:?} after {} rounds ({} samples), last error {:.6}",
        outcome.reason,
        outcome.rounds,
        network.num_epochs(),
        outcome.last_train_error,
    );

    for (input, target) in task.inputs.iter().zip(&task.targets) {
        let output = network.predict(input)?;
        println!("{input:?} -> {output:.4?} (target {target:?})");
    }
    Ok(())
}
