//! Core orchestration: comparisons, parallel sweeps, and sweep analysis.

use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info};

use cosum_core::control::control_value;
use cosum_core::engine::{SeriesEngine, SeriesError};
use cosum_core::observer::{ChunkObserver, ChunkReport};
use cosum_core::observers::{ChannelObserver, NoOpObserver};

use crate::interfaces::{Comparison, SweepResult, Verdict};

/// Compute the series sum at `x` and compare it with the control value.
pub fn compare(engine: &SeriesEngine, x: f64, epsilon: f64) -> Result<Comparison, SeriesError> {
    compare_with_observer(engine, x, epsilon, &NoOpObserver::new())
}

/// Compare at `x`, forwarding chunk reports to `observer`.
pub fn compare_with_observer(
    engine: &SeriesEngine,
    x: f64,
    epsilon: f64,
    observer: &dyn ChunkObserver,
) -> Result<Comparison, SeriesError> {
    let start = Instant::now();
    let outcome = engine.compute_with_observer(x, epsilon, observer)?;
    let duration = start.elapsed();

    let comparison = Comparison::new(x, epsilon, outcome, control_value(x), duration);
    info!(
        x,
        series_sum = comparison.series_sum,
        control = comparison.control,
        difference = comparison.difference,
        verdict = ?comparison.verdict,
        "Comparison complete"
    );
    Ok(comparison)
}

/// Compare at `x` and attach every range's report to the comparison.
///
/// Reports still reach `observer` as each worker finishes; the attached
/// copies are sorted into partition order.
pub fn compare_with_chunks(
    engine: &SeriesEngine,
    x: f64,
    epsilon: f64,
    observer: &dyn ChunkObserver,
) -> Result<Comparison, SeriesError> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let collector = Forwarding {
        channel: ChannelObserver::new(tx),
        inner: observer,
    };

    let mut comparison = compare_with_observer(engine, x, epsilon, &collector)?;
    drop(collector);

    let mut chunks: Vec<ChunkReport> = rx.try_iter().collect();
    chunks.sort_by_key(|report| report.index);
    comparison.chunks = chunks;
    Ok(comparison)
}

/// Sends each report down a channel, then hands it to the wrapped observer.
struct Forwarding<'a> {
    channel: ChannelObserver,
    inner: &'a dyn ChunkObserver,
}

impl ChunkObserver for Forwarding<'_> {
    fn on_chunk_complete(&self, report: &ChunkReport) {
        self.channel.on_chunk_complete(report);
        self.inner.on_chunk_complete(report);
    }
}

/// Compare at every `x` in `xs`, one result per argument in input order.
///
/// Arguments are processed in parallel; each comparison still runs its own
/// bounded worker pool.
pub fn execute_sweep(engine: &SeriesEngine, xs: &[f64], epsilon: f64) -> Vec<SweepResult> {
    let run = |&x: &f64| SweepResult {
        x,
        outcome: compare(engine, x, epsilon),
    };

    if xs.len() == 1 {
        // Single argument: run directly
        return xs.iter().map(run).collect();
    }

    debug!(points = xs.len(), epsilon, "Running sweep");
    xs.par_iter().map(run).collect()
}

/// Check a sweep: every point must have succeeded and converged.
///
/// Points whose control value is undefined are skipped. Returns the first
/// error in input order, or `NotConverged` for the first miss.
pub fn analyze_sweep(results: &[SweepResult]) -> Result<(), SeriesError> {
    if results.is_empty() {
        return Err(SeriesError::NoResults);
    }

    for result in results {
        let comparison = result.outcome.as_ref().map_err(Clone::clone)?;
        if comparison.verdict == Verdict::NotConverged {
            return Err(SeriesError::NotConverged {
                x: comparison.x,
                difference: comparison.difference,
                epsilon: comparison.epsilon,
            });
        }
    }

    Ok(())
}
