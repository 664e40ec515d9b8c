//! Constants for series truncation, worker limits, and defaults.

/// Upper bound on the number of workers used for one series sum,
/// regardless of how many cores the machine reports.
pub const MAX_WORKERS: usize = 4;

/// Term index past which the truncation search gives up and uses the
/// current index as N.
pub const TERM_CEILING: u64 = 10_000_000;

/// Default target precision for the series sum.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Default argument of the series (π, where the sum is −ln 2).
pub const DEFAULT_X: f64 = std::f64::consts::PI;

/// Process exit codes for the `cosum` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The series sum missed the control value by epsilon or more.
    pub const ERROR_NOT_CONVERGED: i32 = 3;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
}
