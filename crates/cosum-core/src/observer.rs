//! Observer pattern for per-range completion reports.
//!
//! Workers notify the observer once their range is summed. Observers only
//! watch; nothing they do feeds back into the computation.

use serde::Serialize;

use crate::partition::TermRange;

/// Report emitted by a worker when its range is done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkReport {
    /// Position of the range in the partition.
    pub index: usize,
    /// Number of ranges in the partition.
    pub total: usize,
    /// The range that was summed.
    pub range: TermRange,
    /// Partial sum over `range`.
    pub partial: f64,
}

impl ChunkReport {
    /// Create a new chunk report.
    #[must_use]
    pub fn new(index: usize, total: usize, range: TermRange, partial: f64) -> Self {
        Self {
            index,
            total,
            range,
            partial,
        }
    }
}

/// Observer trait for receiving chunk reports from workers.
///
/// Called concurrently from worker threads, hence `Send + Sync`.
pub trait ChunkObserver: Send + Sync {
    /// Receive a chunk report.
    fn on_chunk_complete(&self, report: &ChunkReport);
}
