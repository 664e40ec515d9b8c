//! # cosum-core
//!
//! Core library for cosum: sums the series `S(x) = Σ cos(n·x)/n` to a
//! target precision with a bounded pool of parallel workers, and provides
//! the closed-form control value `−ln(2·sin(x/2))` it converges to.

pub mod common;
pub mod constants;
pub mod control;
pub mod engine;
pub mod observer;
pub mod observers;
pub mod options;
pub mod partition;
pub mod truncation;

// Re-exports
pub use constants::{exit_codes, DEFAULT_EPSILON, DEFAULT_X, MAX_WORKERS, TERM_CEILING};
pub use control::control_value;
pub use engine::{SeriesEngine, SeriesError, SeriesOutcome};
pub use observer::{ChunkObserver, ChunkReport};
pub use options::SeriesOptions;
pub use partition::{partial_sum, partition, series_term, TermRange};
pub use truncation::{estimate_truncation, estimate_truncation_with_ceiling, Truncation};

/// Compute `Σ cos(n·x)/n` to precision `epsilon` with default options.
///
/// For advanced configuration (worker bound, term ceiling, chunk
/// observers), use `SeriesEngine` directly.
///
/// # Example
/// ```
/// let s = cosum_core::compute_series_sum(std::f64::consts::PI, 1e-4).unwrap();
/// assert!((s + std::f64::consts::LN_2).abs() < 1e-3);
/// ```
pub fn compute_series_sum(x: f64, epsilon: f64) -> Result<f64, SeriesError> {
    SeriesEngine::default()
        .compute(x, epsilon)
        .map(|outcome| outcome.sum)
}
