//! Structured lifecycle records for manager operations.
//!
//! The manager appends one record per decision into an in-memory buffer;
//! the driver drains the buffer between cycles and decides what to render.
//! There is no I/O here.

/// Severity of a lifecycle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceLogLevel {
    Trace,
    Debug,
    Warn,
}

impl SpaceLogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SpaceLogLevel::Trace => "TRACE",
            SpaceLogLevel::Debug => "DEBUG",
            SpaceLogLevel::Warn => "WARN",
        }
    }
}

/// One manager decision, with a snapshot of the list state after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceLogRecord {
    /// Monotonic decision id, unique per manager.
    pub decision_id: u64,
    /// Correlation id for this record.
    pub trace_id: String,
    /// Severity level.
    pub level: SpaceLogLevel,
    /// Operation name (`allocate`, `release`).
    pub op: &'static str,
    /// Event kind (`placed`, `declined`, `released`, ...).
    pub event: &'static str,
    /// Start offset involved in the event.
    pub start: Option<usize>,
    /// Size involved in the event.
    pub size: Option<usize>,
    /// Placement strategy label, for allocate events.
    pub strategy: Option<&'static str>,
    /// Machine-readable outcome label.
    pub outcome: &'static str,
    /// Free-form details for debugging.
    pub details: String,
    /// Snapshot: holes currently in the list.
    pub hole_count: usize,
    /// Snapshot: live allocations currently in the list.
    pub allocation_count: usize,
    /// Snapshot: units currently allocated.
    pub live_units: usize,
}
