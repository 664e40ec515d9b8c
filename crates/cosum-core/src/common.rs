//! Common utilities: ephemeral worker pools and worker-count selection.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;

use crate::constants::MAX_WORKERS;
use crate::engine::SeriesError;

/// Execute tasks on a pool of exactly `workers` threads built for this call.
///
/// The pool is scoped: every worker thread has been joined by the time
/// this returns. Results come back in task order.
pub fn execute_scoped<T, F>(tasks: Vec<F>, workers: usize) -> Result<Vec<T>, SeriesError>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("cosum-worker-{i}"))
        .build_scoped(
            |thread| thread.run(),
            |pool| pool.install(|| tasks.into_par_iter().map(|task| task()).collect()),
        )
        .map_err(|e| SeriesError::Pool(format!("failed to create thread pool: {e}")))
}

/// Number of parallel execution units reported by the OS.
#[must_use]
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// Worker count for one series sum: the hardware parallelism, bounded by
/// `max_workers` and never above `MAX_WORKERS`.
#[must_use]
pub fn worker_count(max_workers: usize) -> usize {
    let cap = if max_workers == 0 {
        MAX_WORKERS
    } else {
        max_workers.min(MAX_WORKERS)
    };
    default_parallelism().min(cap).max(1)
}
