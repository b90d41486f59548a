//! CLI entrypoint for the fragsim workload driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use fragsim_core::{FitStrategy, SpaceLogRecord, SpaceManager};
use fragsim_harness::error::HarnessError;
use fragsim_harness::report::{self, SweepSummary};
use fragsim_harness::sweep::{SweepConfig, run_sweep};
use fragsim_harness::workload::{self, RequestSizes};

/// Fragmentation simulator over a fixed linear address space.
#[derive(Debug, Parser)]
#[command(name = "fragsim")]
#[command(about = "Compare best-fit, worst-fit, and first-fit placement under random workloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sweep trial lengths and write per-strategy metric series.
    Sweep {
        /// Units in the managed address space.
        #[arg(long, default_value_t = workload::DEFAULT_CAPACITY)]
        capacity: usize,
        /// Mean request size; requests are uniform in [1, 2*mean].
        #[arg(long, default_value_t = workload::DEFAULT_MEAN_REQUEST)]
        mean_request: usize,
        /// Shortest trial, in cycles.
        #[arg(long, default_value_t = workload::DEFAULT_MIN_CYCLES)]
        min_cycles: usize,
        /// Longest trial, in cycles.
        #[arg(long, default_value_t = workload::DEFAULT_MAX_CYCLES)]
        max_cycles: usize,
        /// Step between successive trial lengths.
        #[arg(long, default_value_t = workload::DEFAULT_CYCLE_INCREMENT)]
        cycle_increment: usize,
        /// Placement strategy to sweep.
        #[arg(long, value_enum, default_value = "all")]
        strategy: StrategyArg,
        /// RNG seed for a reproducible run (entropy-seeded when omitted).
        #[arg(long)]
        seed: Option<u64>,
        /// Output directory for the CSV series.
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// Optional path for a JSON summary of the whole run.
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Run one trial and dump the final layout and lifecycle records.
    Trace {
        #[arg(long, default_value_t = workload::DEFAULT_CAPACITY)]
        capacity: usize,
        #[arg(long, default_value_t = workload::DEFAULT_MEAN_REQUEST)]
        mean_request: usize,
        /// Cycles to run.
        #[arg(long, default_value_t = 25)]
        cycles: usize,
        #[arg(long, value_enum, default_value = "first-fit")]
        strategy: StrategyArg,
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// CLI-facing strategy selector; `all` sweeps every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    All,
    FirstFit,
    BestFit,
    WorstFit,
}

impl StrategyArg {
    fn strategies(self) -> Vec<FitStrategy> {
        match self {
            StrategyArg::All => FitStrategy::ALL.to_vec(),
            StrategyArg::FirstFit => vec![FitStrategy::FirstFit],
            StrategyArg::BestFit => vec![FitStrategy::BestFit],
            StrategyArg::WorstFit => vec![FitStrategy::WorstFit],
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() {
    use std::error::Error as _;

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HarnessError> {
    match cli.command {
        Command::Sweep {
            capacity,
            mean_request,
            min_cycles,
            max_cycles,
            cycle_increment,
            strategy,
            seed,
            output,
            summary,
        } => {
            let mut rng = seeded_rng(seed);
            let mut sweeps = Vec::new();
            for fit in strategy.strategies() {
                let config = SweepConfig {
                    capacity,
                    mean_request,
                    min_cycles,
                    max_cycles,
                    cycle_increment,
                    strategy: fit,
                };
                let sweep = run_sweep(&config, &mut rng)?;
                let (hole_path, usage_path) = report::write_sweep_csvs(&output, fit, &sweep)?;
                println!(
                    "{}: {} trials, {} placed, {} declined -> {}, {}",
                    fit.label(),
                    sweep.mean_hole_size.len(),
                    sweep.total_successes,
                    sweep.total_failures,
                    hole_path.display(),
                    usage_path.display(),
                );
                sweeps.push(sweep);
            }
            if let Some(path) = summary {
                report::write_summary_json(
                    &path,
                    &SweepSummary {
                        capacity,
                        mean_request,
                        min_cycles,
                        max_cycles,
                        cycle_increment,
                        seed,
                        strategies: sweeps,
                    },
                )?;
                println!("summary -> {}", path.display());
            }
            Ok(())
        }
        Command::Trace {
            capacity,
            mean_request,
            cycles,
            strategy,
            seed,
        } => {
            let fit = *strategy
                .strategies()
                .first()
                .unwrap_or(&FitStrategy::FirstFit);
            trace(capacity, mean_request, cycles, fit, seed)
        }
    }
}

/// Runs one trial while keeping the lifecycle records, then prints the
/// record stream and the final space layout.
fn trace(
    capacity: usize,
    mean_request: usize,
    cycles: usize,
    strategy: FitStrategy,
    seed: Option<u64>,
) -> Result<(), HarnessError> {
    let mut rng = seeded_rng(seed);
    let mut manager = SpaceManager::new(capacity);
    let sizes = RequestSizes::new(mean_request);
    let mut live = workload::prime(&mut manager, &sizes, &mut rng);
    manager.drain_lifecycle_logs();

    use rand::Rng as _;
    for cycle in 0..cycles {
        if !live.is_empty() {
            let idx = rng.gen_range(0..live.len());
            let victim = live.swap_remove(idx);
            manager
                .release(victim)
                .map_err(|source| HarnessError::LostAllocation { cycle, source })?;
        }
        if let Some(start) = manager.allocate(sizes.sample(&mut rng), strategy) {
            live.push(start);
        }
        manager
            .validate()
            .map_err(|violation| HarnessError::Violation { cycle, violation })?;
        for record in manager.drain_lifecycle_logs() {
            println!("{}", render_record(cycle, &record));
        }
    }

    let metrics = manager.metrics();
    println!("{manager}");
    println!(
        "utilization={:.6} mean_hole_size={:.6} holes={} allocations={} largest_hole={}",
        metrics.utilization,
        metrics.mean_hole_size,
        metrics.hole_count,
        metrics.allocation_count,
        metrics.largest_hole,
    );
    Ok(())
}

fn render_record(cycle: usize, record: &SpaceLogRecord) -> String {
    format!(
        "cycle={} #{:04} [{}] {}/{} start={} size={} strategy={} outcome={} holes={} allocations={} live={} {}",
        cycle,
        record.decision_id,
        record.level.label(),
        record.op,
        record.event,
        record.start.map_or("-".into(), |v| v.to_string()),
        record.size.map_or("-".into(), |v| v.to_string()),
        record.strategy.unwrap_or("-"),
        record.outcome,
        record.hole_count,
        record.allocation_count,
        record.live_units,
        record.details,
    )
}
