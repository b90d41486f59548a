//! Space manager: owns the two block lists and every mutation on them.

use std::fmt;

use thiserror::Error;

use super::block_list::{Block, BlockList};
use super::log::{SpaceLogLevel, SpaceLogRecord};
use super::metrics::{self, SpaceMetrics};
use super::placement::{self, FitStrategy};
use super::validate::{Violation, check_partition};

/// Recoverable "nothing there" outcome from [`SpaceManager::release`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SpaceError {
    /// No live allocation begins at the given offset.
    #[error("no allocation begins at offset {start}")]
    UnknownStart { start: usize },
}

/// Manager of one linear address range `[0, capacity)`.
///
/// Exactly one hole list and one allocation list; every offset of the
/// space belongs to exactly one block across the two. Created per
/// simulation run and exclusively owned by it; all mutation goes through
/// `&mut self`, so no concurrent access is possible by construction.
#[derive(Debug, Clone)]
pub struct SpaceManager {
    /// Total units in the managed range.
    capacity: usize,
    /// Unallocated ranges, never mutually adjacent.
    holes: BlockList,
    /// Live ranges; adjacency allowed.
    allocations: BlockList,
    /// Units currently allocated, maintained incrementally.
    live_units: usize,
    /// Monotonic lifecycle decision id.
    next_decision_id: u64,
    /// Structured lifecycle records awaiting a drain.
    lifecycle_logs: Vec<SpaceLogRecord>,
}

impl SpaceManager {
    /// Creates a manager with the hole list seeded to a single hole
    /// spanning the full space.
    pub fn new(capacity: usize) -> Self {
        let mut holes = BlockList::new();
        if capacity > 0 {
            holes.insert(Block::new(0, capacity));
        }
        Self {
            capacity,
            holes,
            allocations: BlockList::new(),
            live_units: 0,
            next_decision_id: 1,
            lifecycle_logs: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The hole list, read-only.
    pub fn holes(&self) -> &BlockList {
        &self.holes
    }

    /// The allocation list, read-only.
    pub fn allocations(&self) -> &BlockList {
        &self.allocations
    }

    fn next_log_decision_id(&mut self) -> u64 {
        let id = self.next_decision_id;
        self.next_decision_id = self.next_decision_id.wrapping_add(1);
        id
    }

    #[allow(clippy::too_many_arguments)]
    fn record_lifecycle(
        &mut self,
        level: SpaceLogLevel,
        op: &'static str,
        event: &'static str,
        start: Option<usize>,
        size: Option<usize>,
        strategy: Option<FitStrategy>,
        outcome: &'static str,
        details: impl Into<String>,
    ) {
        let decision_id = self.next_log_decision_id();
        let trace_id = format!("core::space::{}::{:016x}", op, decision_id);
        self.lifecycle_logs.push(SpaceLogRecord {
            decision_id,
            trace_id,
            level,
            op,
            event,
            start,
            size,
            strategy: strategy.map(|s| s.label()),
            outcome,
            details: details.into(),
            hole_count: self.holes.len(),
            allocation_count: self.allocations.len(),
            live_units: self.live_units,
        });
    }

    /// Hands out and clears the buffered lifecycle records.
    pub fn drain_lifecycle_logs(&mut self) -> Vec<SpaceLogRecord> {
        std::mem::take(&mut self.lifecycle_logs)
    }

    /// Places a request of `size` units using `strategy`.
    ///
    /// On success the allocation sits at the original start of the winning
    /// hole and its start offset is returned. `None` means no hole was
    /// large enough (or the request was zero-sized); the lists are left
    /// untouched. This is an expected, recoverable outcome.
    pub fn allocate(&mut self, size: usize, strategy: FitStrategy) -> Option<usize> {
        if size == 0 {
            self.record_lifecycle(
                SpaceLogLevel::Warn,
                "allocate",
                "declined",
                None,
                Some(size),
                Some(strategy),
                "zero_size",
                "zero-sized requests are declined",
            );
            return None;
        }
        let Some(hole) = placement::find_fit(&self.holes, size, strategy) else {
            self.record_lifecycle(
                SpaceLogLevel::Warn,
                "allocate",
                "declined",
                None,
                Some(size),
                Some(strategy),
                "no_fit",
                format!("no hole of {} units or more", size),
            );
            return None;
        };

        let start = hole.start;
        let consumed = self.holes.remove_by_start(start);
        debug_assert!(consumed.is_some());
        if hole.size > size {
            // The remainder keeps the tail of the hole; the allocation
            // takes the original start.
            self.holes.insert(Block::new(start + size, hole.size - size));
        }
        self.allocations.insert(Block::new(start, size));
        self.live_units += size;

        self.record_lifecycle(
            SpaceLogLevel::Trace,
            "allocate",
            "placed",
            Some(start),
            Some(size),
            Some(strategy),
            "success",
            format!("hole_size={}", hole.size),
        );
        Some(start)
    }

    /// Returns the allocation beginning at `start` to the hole list,
    /// merging it with any address-adjacent holes.
    ///
    /// The released range always re-enters the hole list as one maximal,
    /// fully coalesced hole.
    pub fn release(&mut self, start: usize) -> Result<(), SpaceError> {
        let Some(freed) = self.allocations.remove_by_start(start) else {
            self.record_lifecycle(
                SpaceLogLevel::Warn,
                "release",
                "unknown_release",
                Some(start),
                None,
                None,
                "not_found",
                "no live allocation at this offset",
            );
            return Err(SpaceError::UnknownStart { start });
        };
        self.live_units -= freed.size;

        // Adjacency is a relation on addresses, not list positions, so the
        // neighbors are found by scanning the whole list. The no-adjacent-
        // holes invariant bounds the matches to one per side.
        let before = self.holes.iter().find(|h| h.abuts(&freed)).copied();
        let after = self.holes.iter().find(|h| freed.abuts(h)).copied();

        let mut merged = freed;
        if let Some(prev) = before {
            self.holes.remove_by_start(prev.start);
            merged = Block::new(prev.start, prev.size + merged.size);
        }
        if let Some(next) = after {
            self.holes.remove_by_start(next.start);
            merged.size += next.size;
        }
        self.holes.insert(merged);

        let absorbed = before.is_some() as usize + after.is_some() as usize;
        self.record_lifecycle(
            SpaceLogLevel::Trace,
            "release",
            if absorbed > 0 { "coalesced" } else { "released" },
            Some(start),
            Some(freed.size),
            None,
            "success",
            format!(
                "absorbed={} hole=[{},{})",
                absorbed,
                merged.start,
                merged.end()
            ),
        );
        Ok(())
    }

    /// Audits the two lists against the partition invariant.
    ///
    /// Read-only; a returned [`Violation`] signals a defect in a prior
    /// operation, not a condition to recover from.
    pub fn validate(&self) -> Result<(), Violation> {
        check_partition(self.capacity, &self.holes, &self.allocations)
    }

    /// Allocated fraction of the capacity, in `[0, 1]`.
    pub fn utilization_ratio(&self) -> f64 {
        metrics::utilization_ratio(&self.allocations, self.capacity)
    }

    /// Mean hole size, `0.0` when no holes exist.
    pub fn mean_hole_size(&self) -> f64 {
        metrics::mean_hole_size(&self.holes)
    }

    /// Full read-only measurement of the current state.
    pub fn metrics(&self) -> SpaceMetrics {
        metrics::snapshot(self.capacity, &self.holes, &self.allocations)
    }
}

impl fmt::Display for SpaceManager {
    /// Renders both lists as inclusive `[lo,hi]` ranges, holes first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Holes:")?;
        for hole in &self.holes {
            write!(f, " [{},{}]", hole.start, hole.end() - 1)?;
        }
        writeln!(f)?;
        write!(f, "Allocations:")?;
        for alloc in &self.allocations {
            write!(f, " [{},{}]", alloc.start, alloc.end() - 1)?;
        }
        Ok(())
    }
}
