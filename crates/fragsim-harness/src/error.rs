//! Harness error type.

use thiserror::Error;

use fragsim_core::{SpaceError, Violation};

/// Failure of a trial, sweep, or report-writing step.
///
/// A `Violation` or `LostAllocation` is a defect signal: the run is
/// aborted rather than continued on a corrupt space.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The validator flagged the space after a cycle.
    #[error("space invariant violated during cycle {cycle}")]
    Violation {
        cycle: usize,
        #[source]
        violation: Violation,
    },
    /// The driver's live-allocation bookkeeping disagreed with the core.
    #[error("driver lost track of a live allocation during cycle {cycle}")]
    LostAllocation {
        cycle: usize,
        #[source]
        source: SpaceError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
