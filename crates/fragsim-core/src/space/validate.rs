//! Partition auditor.
//!
//! Read-only proof that the hole and allocation lists still tile the
//! address space exactly once. A failure here is a defect in a prior list
//! mutation, not a runtime condition to recover from.

use thiserror::Error;

use super::block_list::BlockList;

/// Internal-consistency defect detected by [`check_partition`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    /// Size sums of the two lists do not add up to the capacity.
    #[error("capacity mismatch: allocated {allocated} + free {free} != capacity {capacity}")]
    CapacityMismatch {
        allocated: usize,
        free: usize,
        capacity: usize,
    },
    /// The merged address-order walk could not match `offset` against the
    /// next hole or allocation, or ended away from the capacity boundary.
    #[error("broken coverage at offset {offset}: gap or overlap in the merged walk")]
    BrokenCoverage { offset: usize },
    /// Two holes are address-adjacent, so a coalescing step was missed.
    #[error(
        "unmerged adjacent holes: [{first_start}, {first_start}+{first_size}) touches {second_start}"
    )]
    AdjacentHoles {
        first_start: usize,
        first_size: usize,
        second_start: usize,
    },
}

/// Proves that `holes` and `allocations` together tile `[0, capacity)`
/// with no gaps, no overlaps, and no unmerged adjacent holes.
///
/// Three checks, in order:
/// 1. size sums add up to `capacity`
/// 2. no two consecutive holes touch
/// 3. the merged address-order walk visits every offset exactly once
pub fn check_partition(
    capacity: usize,
    holes: &BlockList,
    allocations: &BlockList,
) -> Result<(), Violation> {
    let free = holes.total_size();
    let allocated = allocations.total_size();
    if allocated + free != capacity {
        return Err(Violation::CapacityMismatch {
            allocated,
            free,
            capacity,
        });
    }

    // Direct check of the coalescing contract.
    let mut it = holes.iter().peekable();
    while let Some(hole) = it.next() {
        if let Some(next) = it.peek()
            && hole.abuts(next)
        {
            return Err(Violation::AdjacentHoles {
                first_start: hole.start,
                first_size: hole.size,
                second_start: next.start,
            });
        }
    }

    // Merged walk: at each running offset exactly one list must produce
    // the next block, and it must begin precisely at the offset.
    let mut hole_it = holes.iter().peekable();
    let mut alloc_it = allocations.iter().peekable();
    let mut offset = 0usize;
    while offset < capacity {
        // A zero-sized block would stall the walk; treat it as broken
        // coverage rather than looping.
        let advanced = if alloc_it.peek().is_some_and(|a| a.start == offset) {
            alloc_it.next().map(|a| a.size).unwrap_or(0)
        } else if hole_it.peek().is_some_and(|h| h.start == offset) {
            hole_it.next().map(|h| h.size).unwrap_or(0)
        } else {
            0
        };
        if advanced == 0 {
            return Err(Violation::BrokenCoverage { offset });
        }
        offset += advanced;
    }
    if offset != capacity || hole_it.next().is_some() || alloc_it.next().is_some() {
        return Err(Violation::BrokenCoverage { offset });
    }
    Ok(())
}
