//! Evaluate a [`GAgPredictor`] against generated traces.
//!
//! Each run uses a handful of periodic branches and some amount of noise,
//! and compares the standard GAg scheme with the variant that shifts the
//! counter direction into global history.

use gag::*;
use gag::sim::evaluate;
use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const RECORDS: usize = 100_000;

fn run(cfg: GAgConfig, records: &[BranchRecord]) -> Result<()> {
    let mut gag = cfg.build()?;
    let stat = evaluate(&mut gag, records)?;
    println!("  {:20} Global hit rate: {}/{} ({:.2}% correct) ({} misses)",
        format!("{:?}", cfg.history_source),
        stat.global_hits(),
        stat.global_brns(),
        stat.hit_rate() * 100.0,
        stat.global_miss()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let usage = || {
        println!("usage: {} <history bits> <counter bits> [noise] [seed]",
            args[0]);
        ExitCode::FAILURE
    };
    if args.len() < 3 {
        return usage();
    }
    let (Ok(history_bits), Ok(counter_bits)) =
        (args[1].parse::<usize>(), args[2].parse::<usize>())
    else {
        return usage();
    };
    let Ok(noise) = args.get(3).map_or(Ok(0.0), |s| s.parse::<f64>()) else {
        return usage();
    };
    let Ok(seed) = args.get(4).map_or(Ok(0), |s| s.parse::<u64>()) else {
        return usage();
    };

    let mut generator = TraceGenerator::new(seed, noise);
    generator.add_branch(0x1000, &[Outcome::T, Outcome::T, Outcome::T, Outcome::N])
        .add_branch(0x1010, &[Outcome::N])
        .add_branch(0x1020, &[Outcome::T, Outcome::N])
        .add_random_branch(0x1030, 6);
    let records = generator.generate(RECORDS);
    println!("[*] Generated {} records (noise={:.3}, seed={})",
        records.len(), noise, seed);

    for history_source in [HistorySource::Outcome, HistorySource::CounterDirection] {
        let cfg = GAgConfig {
            history_bits,
            counter_bits,
            history_source,
            ..Default::default()
        };
        if let Err(e) = run(cfg, &records) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
