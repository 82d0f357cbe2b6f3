//! Run one tracer over a random array and print the trace as JSON
//!
//! Usage: trace [algorithm] [seed] [length]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use sort_tracer::{random_data, Algorithm, DataConfig, Frame, Tracer};

#[derive(Serialize)]
struct TraceOutput {
    algorithm: String,
    input: Vec<u32>,
    frames: Vec<Frame>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let algorithm: Algorithm = match args.get(1).map(|s| s.parse()).unwrap_or(Ok(Algorithm::Bubble)) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(42);
    let length: usize = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DataConfig::default().length);

    let config = DataConfig { length, ..DataConfig::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let input = match random_data(&mut rng, &config) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    log::info!("{} over {} values (seed {})", algorithm, input.len(), seed);
    let frames = algorithm.apply(&input);

    let output = TraceOutput {
        algorithm: algorithm.name().to_string(),
        input,
        frames,
    };
    match serde_json::to_string(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to serialize trace: {}", e);
            std::process::exit(1);
        }
    }
}
