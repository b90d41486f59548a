//! Sweep orchestration: one trial per cycle count over a range.

use rand::Rng;
use serde::Serialize;

use fragsim_core::FitStrategy;

use crate::error::HarnessError;
use crate::trial::{TrialConfig, run_trial};

/// Parameters of a sweep for one strategy.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    pub capacity: usize,
    pub mean_request: usize,
    pub min_cycles: usize,
    pub max_cycles: usize,
    pub cycle_increment: usize,
    pub strategy: FitStrategy,
}

/// One `(cycle count, averaged metric)` record of an output series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub cycles: usize,
    pub value: f64,
}

/// Both metric series for one strategy, plus aggregate counters.
#[derive(Debug, Clone, Serialize)]
pub struct StrategySweep {
    /// Strategy label (`first_fit`, `best_fit`, `worst_fit`).
    pub strategy: &'static str,
    /// Per-trial average mean hole size, keyed by cycle count.
    pub mean_hole_size: Vec<SeriesPoint>,
    /// Per-trial average utilization ratio, keyed by cycle count.
    pub utilization: Vec<SeriesPoint>,
    /// Placed requests across all trials.
    pub total_successes: usize,
    /// Declined requests across all trials.
    pub total_failures: usize,
}

/// Runs one trial per cycle count in
/// `min_cycles..=max_cycles` step `cycle_increment`, each over a fresh
/// manager, and collects the two metric series.
pub fn run_sweep<R: Rng>(config: &SweepConfig, rng: &mut R) -> Result<StrategySweep, HarnessError> {
    let mut sweep = StrategySweep {
        strategy: config.strategy.label(),
        mean_hole_size: Vec::new(),
        utilization: Vec::new(),
        total_successes: 0,
        total_failures: 0,
    };

    let mut cycles = config.min_cycles;
    while cycles <= config.max_cycles {
        let summary = run_trial(
            &TrialConfig {
                capacity: config.capacity,
                mean_request: config.mean_request,
                cycles,
                strategy: config.strategy,
            },
            rng,
        )?;
        sweep.mean_hole_size.push(SeriesPoint {
            cycles,
            value: summary.avg_mean_hole_size,
        });
        sweep.utilization.push(SeriesPoint {
            cycles,
            value: summary.avg_utilization,
        });
        sweep.total_successes += summary.successes;
        sweep.total_failures += summary.failures;

        // A zero increment would never terminate.
        if config.cycle_increment == 0 {
            break;
        }
        cycles += config.cycle_increment;
    }
    Ok(sweep)
}
