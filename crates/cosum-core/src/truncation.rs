//! Truncation index estimate.
//!
//! Walks the term indices from 1 upward until a term's magnitude drops
//! below epsilon. Since `|cos(n·x)/n| <= 1/n`, the search always ends for
//! a positive epsilon; `TERM_CEILING` stops it for degenerate input.

use serde::Serialize;

use crate::constants::TERM_CEILING;
use crate::partition::series_term;

/// Result of a truncation search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Truncation {
    /// Number of terms to sum (N), always at least 1.
    pub terms: u64,
    /// Whether the search stopped at the ceiling instead of the bound.
    pub capped: bool,
}

/// Smallest term index `N` with `|cos(N·x)/N| < epsilon`, capped at
/// `TERM_CEILING + 1`.
///
/// # Example
/// ```
/// use cosum_core::truncation::estimate_truncation;
///
/// assert_eq!(estimate_truncation(std::f64::consts::PI, 1e-3), 1001);
/// assert_eq!(estimate_truncation(0.5, 2.0), 1);
/// ```
#[must_use]
pub fn estimate_truncation(x: f64, epsilon: f64) -> u64 {
    estimate_truncation_with_ceiling(x, epsilon, TERM_CEILING).terms
}

/// Truncation search with an explicit ceiling.
///
/// Once the index exceeds `ceiling` the search stops and that index is
/// used as N with `capped` set.
#[must_use]
pub fn estimate_truncation_with_ceiling(x: f64, epsilon: f64, ceiling: u64) -> Truncation {
    let mut n: u64 = 1;
    loop {
        if series_term(n, x).abs() < epsilon {
            return Truncation {
                terms: n,
                capped: false,
            };
        }
        n += 1;
        if n > ceiling {
            return Truncation {
                terms: n,
                capped: true,
            };
        }
    }
}
