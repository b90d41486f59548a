//! Workload driver for the fragsim block-space manager.
//!
//! This crate provides:
//! - Workload generation: uniform random request sizes over an injectable RNG
//! - Trial execution: repeated release/allocate cycles with per-cycle
//!   invariant validation and metric accumulation
//! - Sweep orchestration: one trial per cycle count over a configurable range
//! - Report writing: per-strategy CSV series and a JSON sweep summary
//!
//! The core is consumed only through its public manager API; no list is
//! touched directly here.

#![forbid(unsafe_code)]

pub mod error;
pub mod report;
pub mod sweep;
pub mod trial;
pub mod workload;

pub use error::HarnessError;
pub use sweep::{SeriesPoint, StrategySweep, SweepConfig, run_sweep};
pub use trial::{TrialConfig, TrialSummary, run_trial};
pub use workload::RequestSizes;
