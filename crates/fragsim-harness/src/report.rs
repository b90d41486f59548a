//! Report writing: CSV series and the JSON sweep summary.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use fragsim_core::FitStrategy;

use crate::error::HarnessError;
use crate::sweep::{SeriesPoint, StrategySweep};

/// File names for a strategy's two CSV series:
/// `(mean hole size, elements in use)`.
pub fn series_file_names(strategy: FitStrategy) -> (String, String) {
    (
        format!("{}_mean_hole_size.csv", strategy.label()),
        format!("{}_elements_in_use.csv", strategy.label()),
    )
}

/// Renders a series as `cycles,value` lines with six fractional digits.
pub fn render_series_csv(points: &[SeriesPoint]) -> String {
    let mut out = String::new();
    for point in points {
        // write! to a String cannot fail.
        let _ = writeln!(out, "{},{:.6}", point.cycles, point.value);
    }
    out
}

/// Writes both CSV series of a sweep into `dir`, returning the paths.
pub fn write_sweep_csvs(
    dir: &Path,
    strategy: FitStrategy,
    sweep: &StrategySweep,
) -> Result<(PathBuf, PathBuf), HarnessError> {
    fs::create_dir_all(dir)?;
    let (hole_name, usage_name) = series_file_names(strategy);
    let hole_path = dir.join(hole_name);
    let usage_path = dir.join(usage_name);
    fs::write(&hole_path, render_series_csv(&sweep.mean_hole_size))?;
    fs::write(&usage_path, render_series_csv(&sweep.utilization))?;
    Ok((hole_path, usage_path))
}

/// Machine-readable record of a whole run, one entry per strategy.
#[derive(Debug, Serialize)]
pub struct SweepSummary {
    pub capacity: usize,
    pub mean_request: usize,
    pub min_cycles: usize,
    pub max_cycles: usize,
    pub cycle_increment: usize,
    /// Seed of the run, when one was fixed.
    pub seed: Option<u64>,
    pub strategies: Vec<StrategySweep>,
}

/// Writes the summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &SweepSummary) -> Result<(), HarnessError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(summary)?;
    fs::write(path, body)?;
    Ok(())
}
