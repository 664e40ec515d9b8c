//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use cosum_core::engine::{SeriesError, SeriesOutcome};
use cosum_core::observer::ChunkReport;

/// Outcome of comparing the series sum with the control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// `|S - y| < epsilon`.
    Converged,
    /// `|S - y| >= epsilon`.
    NotConverged,
    /// The control value is NaN at this argument.
    Undefined,
}

impl Verdict {
    /// Classify a difference against epsilon.
    #[must_use]
    pub fn classify(difference: f64, epsilon: f64) -> Self {
        if difference.is_nan() {
            Self::Undefined
        } else if difference < epsilon {
            Self::Converged
        } else {
            Self::NotConverged
        }
    }
}

/// Series sum, control value, and their discrepancy at one argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Series argument.
    pub x: f64,
    /// Target precision.
    pub epsilon: f64,
    /// Series sum S.
    pub series_sum: f64,
    /// Control value y (NaN serializes as `null`).
    pub control: f64,
    /// `|S - y|`.
    pub difference: f64,
    /// Number of terms summed.
    pub terms: u64,
    /// Number of workers used.
    pub workers: usize,
    /// Whether the term ceiling capped the truncation search.
    pub capped: bool,
    /// Verdict for `difference` against `epsilon`.
    pub verdict: Verdict,
    /// Wall time of the series computation.
    pub duration: Duration,
    /// Per-range reports in partition order, when collected.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<ChunkReport>,
}

impl Comparison {
    /// Build a comparison from an engine outcome and a control value.
    #[must_use]
    pub fn new(
        x: f64,
        epsilon: f64,
        outcome: SeriesOutcome,
        control: f64,
        duration: Duration,
    ) -> Self {
        let difference = (outcome.sum - control).abs();
        Self {
            x,
            epsilon,
            series_sum: outcome.sum,
            control,
            difference,
            terms: outcome.terms,
            workers: outcome.workers,
            capped: outcome.capped,
            verdict: Verdict::classify(difference, epsilon),
            duration,
            chunks: Vec::new(),
        }
    }
}

/// Result for one argument of a sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Series argument.
    pub x: f64,
    /// The comparison or a structured error.
    pub outcome: Result<Comparison, SeriesError>,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single comparison.
    fn present_comparison(&self, comparison: &Comparison);

    /// Present the results of a sweep.
    fn present_sweep(&self, results: &[SweepResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
