//! Shared helpers for fragsim benchmarks.

use fragsim_core::{FitStrategy, SpaceManager};

/// Builds a heavily fragmented manager by filling the space with small
/// first-fit allocations and releasing every other one. Returns the
/// manager and the surviving allocation starts.
pub fn fragmented_manager(capacity: usize) -> (SpaceManager, Vec<usize>) {
    let mut manager = SpaceManager::new(capacity);
    let mut live = Vec::new();
    let mut step = 0usize;
    loop {
        let size = step % 31 + 2;
        match manager.allocate(size, FitStrategy::FirstFit) {
            Some(start) => live.push(start),
            None => break,
        }
        step += 1;
    }
    let mut survivors = Vec::with_capacity(live.len() / 2);
    for (i, start) in live.into_iter().enumerate() {
        if i % 2 == 0 {
            let released = manager.release(start);
            debug_assert!(released.is_ok());
        } else {
            survivors.push(start);
        }
    }
    (manager, survivors)
}
