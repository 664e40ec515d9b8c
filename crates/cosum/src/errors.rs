//! Error handling and exit codes.

use cosum_core::constants::exit_codes;
use cosum_core::engine::SeriesError;

/// Map a series error to the process exit code.
pub fn handle_error(err: &SeriesError) -> i32 {
    match err {
        SeriesError::InvalidEpsilon(_) | SeriesError::InvalidArgument(_) => {
            exit_codes::ERROR_CONFIG
        }
        SeriesError::NotConverged { .. } => exit_codes::ERROR_NOT_CONVERGED,
        SeriesError::Pool(_) | SeriesError::NoResults => exit_codes::ERROR_GENERIC,
    }
}
