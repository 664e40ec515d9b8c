//! Parallel partial-sum engine.
//!
//! `SeriesEngine` estimates the truncation index, partitions `[1, N]`,
//! sums each range on its own worker, and adds the partial results in
//! partition order once every worker has finished.

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::{execute_scoped, worker_count};
use crate::observer::{ChunkObserver, ChunkReport};
use crate::observers::NoOpObserver;
use crate::options::SeriesOptions;
use crate::partition::{partial_sum, partition};
use crate::truncation::estimate_truncation_with_ceiling;

/// Error type for series computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Epsilon is zero, negative, or NaN.
    #[error("invalid epsilon {0}: must be a positive number")]
    InvalidEpsilon(f64),

    /// An argument other than epsilon is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The worker pool could not be created.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// The series sum missed the control value by epsilon or more.
    #[error("series at x = {x} differs from control value by {difference:e} (epsilon {epsilon:e})")]
    NotConverged {
        /// Series argument.
        x: f64,
        /// `|S - y|`.
        difference: f64,
        /// Target precision.
        epsilon: f64,
    },

    /// There were no results to analyze.
    #[error("no results")]
    NoResults,
}

/// Detailed result of one series computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesOutcome {
    /// The series sum S.
    pub sum: f64,
    /// Number of terms summed (N).
    pub terms: u64,
    /// Number of workers that ran (one per range).
    pub workers: usize,
    /// Whether the truncation search stopped at the ceiling.
    pub capped: bool,
}

/// Engine computing `Σ cos(n·x)/n` in parallel.
#[derive(Debug, Clone, Default)]
pub struct SeriesEngine {
    opts: SeriesOptions,
}

impl SeriesEngine {
    /// Create a new engine; options are normalized.
    #[must_use]
    pub fn new(opts: SeriesOptions) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    /// Compute the series sum to precision `epsilon`.
    pub fn compute(&self, x: f64, epsilon: f64) -> Result<SeriesOutcome, SeriesError> {
        self.compute_with_observer(x, epsilon, &NoOpObserver::new())
    }

    /// Compute the series sum, reporting each finished range to `observer`.
    pub fn compute_with_observer(
        &self,
        x: f64,
        epsilon: f64,
        observer: &dyn ChunkObserver,
    ) -> Result<SeriesOutcome, SeriesError> {
        validate(x, epsilon)?;

        let truncation = estimate_truncation_with_ceiling(x, epsilon, self.opts.term_ceiling);
        if truncation.capped {
            warn!(
                x,
                epsilon,
                terms = truncation.terms,
                "Truncation search hit the term ceiling"
            );
        }

        let ranges = partition(truncation.terms, worker_count(self.opts.max_workers), x);
        let total = ranges.len();
        debug!(x, epsilon, terms = truncation.terms, ranges = total, "Dispatching ranges");

        let tasks: Vec<_> = ranges
            .into_iter()
            .enumerate()
            .map(|(index, range)| {
                move || {
                    let partial = partial_sum(range);
                    observer.on_chunk_complete(&ChunkReport::new(index, total, range, partial));
                    partial
                }
            })
            .collect();

        // Every worker has been joined here; reduce in partition order.
        let partials = execute_scoped(tasks, total)?;
        let sum = partials.iter().fold(0.0, |acc, partial| acc + partial);

        if sum.is_nan() {
            warn!(x, terms = truncation.terms, "Series sum is NaN: n·x overflowed");
        }
        debug!(x, sum, "Series sum complete");

        Ok(SeriesOutcome {
            sum,
            terms: truncation.terms,
            workers: total,
            capped: truncation.capped,
        })
    }
}

fn validate(x: f64, epsilon: f64) -> Result<(), SeriesError> {
    if epsilon.is_nan() || epsilon <= 0.0 {
        return Err(SeriesError::InvalidEpsilon(epsilon));
    }
    if !x.is_finite() {
        return Err(SeriesError::InvalidArgument(format!("x must be finite, got {x}")));
    }
    Ok(())
}
