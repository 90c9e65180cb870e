//! Step throughput of the engine across grid sizes

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::{Dimensions, LifeEngine, SeedMode};

fn benchmark_step(size: usize, iterations: u32, rng: &mut StdRng) -> Option<f64> {
    let dims = Dimensions::new(size, size).ok()?;
    let mut engine = LifeEngine::seeded(dims, &SeedMode::Random, rng).ok()?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [10, 100, 500, 1000, 2000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x11fe);

    println!("{:>12} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<42}", "");

    for size in sizes {
        match benchmark_step(size, iterations, &mut rng) {
            Some(ms) => {
                let cells = (size * size) as f64;
                println!(
                    "{:>12} {:>12.3} {:>16.1}",
                    format!("{}x{}", size, size),
                    ms,
                    cells / (ms / 1000.0) / 1_000_000.0
                );
            }
            None => println!("{:>12} {:>12}", format!("{}x{}", size, size), "failed"),
        }
    }
}
