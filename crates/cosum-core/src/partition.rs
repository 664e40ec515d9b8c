//! Series terms, term ranges, and the contiguous partition of `[1, N]`.
//!
//! A `TermRange` is the unit of work handed to one worker. `partition`
//! produces ranges that are pairwise disjoint and cover `{1, ..., N}`
//! exactly; `partial_sum` adds up the terms of one range.

use serde::Serialize;

/// Value of the series term `cos(n·x)/n`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn series_term(n: u64, x: f64) -> f64 {
    let n = n as f64;
    (n * x).cos() / n
}

/// Contiguous, inclusive slice of term indices to be summed by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermRange {
    /// First term index (1-based, inclusive).
    pub start: u64,
    /// Last term index (inclusive).
    pub end: u64,
    /// Argument of the series.
    pub x: f64,
}

impl TermRange {
    /// Create a new range over `start..=end`.
    #[must_use]
    pub fn new(start: u64, end: u64, x: f64) -> Self {
        Self { start, end, x }
    }

    /// Number of terms covered by this range.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether the range covers no terms at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Bounds as a `(start, end)` pair.
    #[must_use]
    pub fn bounds(&self) -> (u64, u64) {
        (self.start, self.end)
    }
}

/// Split `[1, n]` into at most `workers` contiguous ranges.
///
/// Every range but the last has `n / workers` terms; the last one ends at
/// `n` and absorbs the remainder. Ranges left empty by that rule (when
/// `n < workers`) are dropped, so small `n` collapses to the single range
/// `[1, n]`. A worker count of zero is treated as one.
#[must_use]
pub fn partition(n: u64, workers: usize, x: f64) -> Vec<TermRange> {
    let workers = workers.max(1) as u64;
    let chunk = n / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk + 1;
            let end = if i + 1 < workers { (i + 1) * chunk } else { n };
            TermRange::new(start, end, x)
        })
        .filter(|range| !range.is_empty())
        .collect()
}

/// Sum the series terms of one range by plain iteration.
#[must_use]
pub fn partial_sum(range: TermRange) -> f64 {
    let mut sum = 0.0;
    for n in range.start..=range.end {
        sum += series_term(n, range.x);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn term_values() {
        assert!((series_term(1, 0.0) - 1.0).abs() < 1e-15);
        assert!((series_term(2, 0.0) - 0.5).abs() < 1e-15);
        assert!((series_term(1, PI) + 1.0).abs() < 1e-15);
        assert!((series_term(2, PI) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn partition_ten_by_four() {
        let ranges = partition(10, 4, PI);
        let bounds: Vec<(u64, u64)> = ranges.iter().map(TermRange::bounds).collect();
        assert_eq!(bounds, vec![(1, 2), (3, 4), (5, 6), (7, 10)]);
        assert!(ranges.iter().all(|r| (r.x - PI).abs() < f64::EPSILON));
    }

    #[test]
    fn partition_even_split() {
        let bounds: Vec<(u64, u64)> = partition(12, 4, 1.0).iter().map(TermRange::bounds).collect();
        assert_eq!(bounds, vec![(1, 3), (4, 6), (7, 9), (10, 12)]);
    }

    #[test]
    fn partition_single_worker() {
        let bounds: Vec<(u64, u64)> = partition(7, 1, 1.0).iter().map(TermRange::bounds).collect();
        assert_eq!(bounds, vec![(1, 7)]);
    }

    #[test]
    fn partition_fewer_terms_than_workers() {
        let bounds: Vec<(u64, u64)> = partition(3, 4, 1.0).iter().map(TermRange::bounds).collect();
        assert_eq!(bounds, vec![(1, 3)]);

        let bounds: Vec<(u64, u64)> = partition(1, 4, 1.0).iter().map(TermRange::bounds).collect();
        assert_eq!(bounds, vec![(1, 1)]);
    }

    #[test]
    fn partition_zero_workers_is_one() {
        let bounds: Vec<(u64, u64)> = partition(5, 0, 1.0).iter().map(TermRange::bounds).collect();
        assert_eq!(bounds, vec![(1, 5)]);
    }

    #[test]
    fn partition_covers_every_index_once() {
        for n in 1..=40u64 {
            for workers in 1..=6usize {
                let ranges = partition(n, workers, 0.5);
                assert!(ranges.len() <= workers);
                let covered: Vec<u64> = ranges.iter().flat_map(|r| r.start..=r.end).collect();
                let expected: Vec<u64> = (1..=n).collect();
                assert_eq!(covered, expected, "n={n} workers={workers}");
            }
        }
    }

    #[test]
    fn range_len() {
        assert_eq!(TermRange::new(3, 4, 0.0).len(), 2);
        assert_eq!(TermRange::new(7, 7, 0.0).len(), 1);
        assert_eq!(TermRange::new(2, 1, 0.0).len(), 0);
        assert!(TermRange::new(2, 1, 0.0).is_empty());
    }

    #[test]
    fn partial_sum_single_term() {
        let sum = partial_sum(TermRange::new(1, 1, PI));
        assert!((sum - PI.cos()).abs() < 1e-15);
    }

    #[test]
    fn partial_sum_harmonic_at_zero() {
        let sum = partial_sum(TermRange::new(1, 3, 0.0));
        let expected = 1.0 + 1.0 / 2.0 + 1.0 / 3.0;
        assert!((sum - expected).abs() < 1e-12);
    }

    #[test]
    fn partial_sums_add_up() {
        let whole = partial_sum(TermRange::new(1, 1000, 0.3));
        let pieces: f64 = partition(1000, 4, 0.3).into_iter().map(partial_sum).sum();
        assert!((whole - pieces).abs() < 1e-12);
    }
}
