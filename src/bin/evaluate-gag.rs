//! Evaluate a [`GAgPredictor`] against one or more text traces.

use gag::*;
use gag::sim::evaluate;
use std::env;
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        println!("usage: {} <history bits> <counter bits> <trace files>",
            args[0]);
        return ExitCode::FAILURE;
    }
    let (Ok(history_bits), Ok(counter_bits)) =
        (args[1].parse::<usize>(), args[2].parse::<usize>())
    else {
        println!("usage: {} <history bits> <counter bits> <trace files>",
            args[0]);
        return ExitCode::FAILURE;
    };

    let cfg = GAgConfig { history_bits, counter_bits, ..Default::default() };
    let mut gag = match cfg.build() {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        },
    };
    println!("[*] GAg H={} W={}: {} PHT entries, {} storage bits",
        history_bits, counter_bits, gag.pht().len(), cfg.storage_bits());

    for path in &args[3..] {
        let trace = match BranchTrace::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                error!("{}: {}", path, e);
                return ExitCode::FAILURE;
            },
        };
        println!("[*] Loaded {} records from {}", trace.num_entries(), path);

        gag.reset();
        let start = Instant::now();
        let stat = match evaluate(&mut gag, trace.as_slice()) {
            Ok(s) => s,
            Err(e) => {
                error!("{}: {}", trace.name(), e);
                return ExitCode::FAILURE;
            },
        };

        println!("[*] Completed in {:.3?}", start.elapsed());
        println!("[*] Unique branches: {}", stat.num_unique_branches());
        println!("[*] Global hit rate: {}/{} ({:.2}% correct) ({} misses)",
            stat.global_hits(),
            stat.global_brns(),
            stat.hit_rate() * 100.0,
            stat.global_miss()
        );
        println!("[*] Average MPKB:    {:.4}", stat.mpkb());
        println!("[*] Low hit rate branches:");
        for (pc, data) in stat.get_low_rate_branches(8, 0.55) {
            println!("    {:016x}: {:6}/{:6} ({:.4})",
                pc, data.hits, data.occ, data.hit_rate()
            );
        }
        println!();
    }
    ExitCode::SUCCESS
}
