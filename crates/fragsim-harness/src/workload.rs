//! Randomized workload generation.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so the
//! core stays deterministic and every run is reproducible from a seed.

use rand::Rng;

use fragsim_core::{FitStrategy, SpaceManager};

/// Units in the managed space for the reference workload.
pub const DEFAULT_CAPACITY: usize = 2000;
/// Mean request size of the reference workload.
pub const DEFAULT_MEAN_REQUEST: usize = 25;
/// Shortest trial in the reference sweep.
pub const DEFAULT_MIN_CYCLES: usize = 1;
/// Longest trial in the reference sweep.
pub const DEFAULT_MAX_CYCLES: usize = 1000;
/// Step between successive trial lengths.
pub const DEFAULT_CYCLE_INCREMENT: usize = 1;

/// Uniform request sizes in `[1, 2 * mean]`, so the expected size is
/// `mean + 1/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSizes {
    mean: usize,
}

impl RequestSizes {
    /// `mean` must be positive; a zero mean would make every request
    /// impossible to draw.
    pub fn new(mean: usize) -> Self {
        assert!(mean > 0, "mean request size must be positive");
        Self { mean }
    }

    pub fn mean(&self) -> usize {
        self.mean
    }

    /// Draws one request size.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(1..=self.mean * 2)
    }
}

/// Fills a fresh manager with `capacity / mean` first-fit allocations of
/// random size, so trials start from a populated space rather than an
/// empty one. Returns the start offsets of the allocations that landed.
pub fn prime<R: Rng>(manager: &mut SpaceManager, sizes: &RequestSizes, rng: &mut R) -> Vec<usize> {
    let attempts = manager.capacity() / sizes.mean();
    let mut live = Vec::with_capacity(attempts);
    for _ in 0..attempts {
        if let Some(start) = manager.allocate(sizes.sample(rng), FitStrategy::FirstFit) {
            live.push(start);
        }
    }
    live
}
