//! Concrete observer implementations.

use crossbeam_channel::Sender;
use tracing::debug;

use crate::observer::{ChunkObserver, ChunkReport};

/// Observer that sends reports through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<ChunkReport>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ChunkReport>) -> Self {
        Self { sender }
    }
}

impl ChunkObserver for ChannelObserver {
    fn on_chunk_complete(&self, report: &ChunkReport) {
        // A full or disconnected channel drops the report.
        let _ = self.sender.try_send(*report);
    }
}

/// Observer that logs each finished range at debug level.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkObserver for LoggingObserver {
    fn on_chunk_complete(&self, report: &ChunkReport) {
        debug!(
            chunk = %format!("{}/{}", report.index + 1, report.total),
            start = report.range.start,
            end = report.range.end,
            partial = report.partial,
            "Range summed"
        );
    }
}

/// Null object pattern — discards every report.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkObserver for NoOpObserver {
    fn on_chunk_complete(&self, _report: &ChunkReport) {
        // Intentionally empty
    }
}
