// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line entry point for the solver comparison.
//!
//! Generates one random instance, benchmarks all five strategies on it,
//! prints a table to stdout, and optionally persists the records to a CSV
//! file. The defaults (20 items, weights up to 50, values up to 100) keep
//! the exponential strategies tractable; raising `--items` far beyond that
//! is where brute force stops coming back.

use clap::Parser;
use haversack_bench::{
    harness::{BenchmarkHarness, DEFAULT_REPETITIONS},
    report::{ConsoleReporter, CsvReporter, Reporter},
};
use haversack_model::generate::InstanceGenerator;
use haversack_solver::{
    backtracking::Backtracking, brute_force::BruteForce, divide_and_conquer::DivideAndConquer,
    dp::DynamicProgramming, greedy::Greedy,
};
use rand::{SeedableRng, rngs::StdRng};
use std::error::Error;
use std::path::PathBuf;

/// Benchmark five 0/1 knapsack strategies on one random instance.
#[derive(Debug, Parser)]
#[command(name = "haversack", version, about)]
struct Args {
    /// Number of items to generate. Exponential strategies are O(2^n);
    /// keep this modest.
    #[arg(short = 'n', long, default_value_t = 20)]
    items: usize,

    /// Inclusive upper bound for random item weights.
    #[arg(long, default_value_t = 50)]
    max_weight: u64,

    /// Inclusive upper bound for random item values.
    #[arg(long, default_value_t = 100)]
    max_value: u64,

    /// Timed repetitions per strategy.
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: u32,

    /// Seed for the instance generator. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also write the records to this CSV file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let generator = InstanceGenerator::new(args.max_weight, args.max_value);
    let instance = generator.generate(&mut rng, args.items);
    log::info!("generated {}", instance);

    let mut harness = BenchmarkHarness::new().with_repetitions(args.repetitions);
    harness.add_strategy(DynamicProgramming);
    harness.add_strategy(BruteForce);
    harness.add_strategy(Greedy);
    harness.add_strategy(Backtracking);
    harness.add_strategy(DivideAndConquer);

    let records = harness.run(&instance);

    ConsoleReporter::new(std::io::stdout().lock()).report(&records)?;

    if let Some(path) = &args.csv {
        CsvReporter::create(path)?.report(&records)?;
        log::info!("wrote {} records to {}", records.len(), path.display());
    }

    Ok(())
}
