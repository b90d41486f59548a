//! End-to-end sweep runs: file emission, CSV shape, and seeded
//! reproducibility.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use fragsim_core::FitStrategy;
use fragsim_harness::report::{self, SweepSummary};
use fragsim_harness::sweep::{SweepConfig, run_sweep};

fn scratch_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()))
}

fn small_config(strategy: FitStrategy) -> SweepConfig {
    SweepConfig {
        capacity: 400,
        mean_request: 20,
        min_cycles: 1,
        max_cycles: 30,
        cycle_increment: 10,
        strategy,
    }
}

#[test]
fn test_sweep_writes_both_series_files() {
    let dir = scratch_dir("fragsim-sweep");
    let sweep = run_sweep(
        &small_config(FitStrategy::BestFit),
        &mut StdRng::seed_from_u64(8),
    )
    .unwrap();
    let (hole_path, usage_path) =
        report::write_sweep_csvs(&dir, FitStrategy::BestFit, &sweep).unwrap();

    assert_eq!(
        hole_path.file_name().unwrap(),
        "best_fit_mean_hole_size.csv"
    );
    assert_eq!(
        usage_path.file_name().unwrap(),
        "best_fit_elements_in_use.csv"
    );

    let hole_body = fs::read_to_string(&hole_path).unwrap();
    let usage_body = fs::read_to_string(&usage_path).unwrap();
    assert_eq!(hole_body.lines().count(), 3); // trial lengths 1, 11, 21
    assert_eq!(usage_body.lines().count(), 3);

    for line in usage_body.lines() {
        let (cycles, value) = line.split_once(',').expect("two comma-separated fields");
        let cycles: usize = cycles.parse().unwrap();
        let value: f64 = value.parse().unwrap();
        assert!(cycles >= 1);
        assert!((0.0..=1.0).contains(&value));
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_sweep_is_reproducible_per_seed() {
    let a = run_sweep(
        &small_config(FitStrategy::WorstFit),
        &mut StdRng::seed_from_u64(21),
    )
    .unwrap();
    let b = run_sweep(
        &small_config(FitStrategy::WorstFit),
        &mut StdRng::seed_from_u64(21),
    )
    .unwrap();
    assert_eq!(a.mean_hole_size, b.mean_hole_size);
    assert_eq!(a.utilization, b.utilization);
    assert_eq!(a.total_successes, b.total_successes);
}

#[test]
fn test_summary_json_round_trips_fields() {
    let dir = scratch_dir("fragsim-summary");
    let path = dir.join("sweep_summary.json");

    let mut rng = StdRng::seed_from_u64(4);
    let strategies = FitStrategy::ALL
        .iter()
        .map(|&s| run_sweep(&small_config(s), &mut rng).unwrap())
        .collect();
    let summary = SweepSummary {
        capacity: 400,
        mean_request: 20,
        min_cycles: 1,
        max_cycles: 30,
        cycle_increment: 10,
        seed: Some(4),
        strategies,
    };
    report::write_summary_json(&path, &summary).unwrap();

    let body = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["capacity"], 400);
    assert_eq!(parsed["seed"], 4);
    let labels: Vec<&str> = parsed["strategies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["strategy"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["best_fit", "worst_fit", "first_fit"]);
    assert_eq!(
        parsed["strategies"][0]["mean_hole_size"]
            .as_array()
            .unwrap()
            .len(),
        parsed["strategies"][0]["utilization"]
            .as_array()
            .unwrap()
            .len()
    );

    fs::remove_dir_all(&dir).ok();
}
