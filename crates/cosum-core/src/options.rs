//! Engine options and configuration.

use crate::constants::{MAX_WORKERS, TERM_CEILING};

/// Options for the parallel partial-sum engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOptions {
    /// Upper bound on the number of workers (0 = `MAX_WORKERS`).
    /// Values above `MAX_WORKERS` are clamped by `normalize`.
    pub max_workers: usize,
    /// Term index at which the truncation search gives up (0 = `TERM_CEILING`).
    pub term_ceiling: u64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            max_workers: MAX_WORKERS,
            term_ceiling: TERM_CEILING,
        }
    }
}

impl SeriesOptions {
    /// Normalize options, applying defaults where values are zero and
    /// keeping the worker bound within `MAX_WORKERS`.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_workers == 0 || self.max_workers > MAX_WORKERS {
            self.max_workers = MAX_WORKERS;
        }
        if self.term_ceiling == 0 {
            self.term_ceiling = TERM_CEILING;
        }
        self
    }
}
