//! Read-only fragmentation and utilization measurements.

use super::block_list::BlockList;

/// Point-in-time measurement of the managed space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceMetrics {
    /// Allocated fraction of the capacity, in `[0, 1]`.
    pub utilization: f64,
    /// Mean hole size, `0.0` when no holes exist.
    pub mean_hole_size: f64,
    /// Holes currently in the list.
    pub hole_count: usize,
    /// Live allocations currently in the list.
    pub allocation_count: usize,
    /// Size of the largest hole, `0` when no holes exist.
    pub largest_hole: usize,
}

/// `sum(allocation sizes) / capacity`.
pub(crate) fn utilization_ratio(allocations: &BlockList, capacity: usize) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    allocations.total_size() as f64 / capacity as f64
}

/// `sum(hole sizes) / count(holes)`, guarding the empty list.
pub(crate) fn mean_hole_size(holes: &BlockList) -> f64 {
    if holes.is_empty() {
        return 0.0;
    }
    holes.total_size() as f64 / holes.len() as f64
}

pub(crate) fn snapshot(capacity: usize, holes: &BlockList, allocations: &BlockList) -> SpaceMetrics {
    SpaceMetrics {
        utilization: utilization_ratio(allocations, capacity),
        mean_hole_size: mean_hole_size(holes),
        hole_count: holes.len(),
        allocation_count: allocations.len(),
        largest_hole: holes.iter().map(|h| h.size).max().unwrap_or(0),
    }
}
