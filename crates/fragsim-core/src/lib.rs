//! # fragsim-core
//!
//! In-memory simulation of dynamic allocation over a fixed linear address
//! space. The crate owns two address-ordered block lists (free holes and
//! live allocations), places requests with first-fit, best-fit, or
//! worst-fit search, coalesces holes on release, and can prove at any
//! point that the two lists still tile the space exactly once.
//!
//! No real memory is managed; blocks are `(start, size)` ranges and the
//! whole crate is safe, single-threaded Rust.

#![deny(unsafe_code)]

pub mod space;

pub use space::{
    Block, BlockList, FitStrategy, SpaceError, SpaceLogLevel, SpaceLogRecord, SpaceManager,
    SpaceMetrics, Violation, check_partition,
};
