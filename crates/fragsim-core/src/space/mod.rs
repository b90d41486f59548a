//! Block-space management.
//!
//! The manager keeps the address range `[0, capacity)` partitioned between
//! two ordered block lists:
//! - the hole list: unallocated ranges, never mutually adjacent
//! - the allocation list: live ranges, adjacency allowed
//!
//! Placement moves a prefix of a hole onto the allocation list; release
//! moves a range back and merges it with any address-adjacent holes.

pub mod block_list;
pub mod log;
pub mod manager;
pub mod metrics;
pub mod placement;
pub mod validate;

pub use block_list::{Block, BlockList};
pub use log::{SpaceLogLevel, SpaceLogRecord};
pub use manager::{SpaceError, SpaceManager};
pub use metrics::SpaceMetrics;
pub use placement::FitStrategy;
pub use validate::{Violation, check_partition};
