//! CLI output formatting.

use std::time::Duration;

/// Format a real value with ten decimals; NaN prints as `undefined`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{value:.10}")
    }
}

/// Format a discrepancy in scientific notation; NaN prints as `undefined`.
#[must_use]
pub fn format_difference(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{value:.10e}")
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_decimals() {
        assert_eq!(format_value(-std::f64::consts::LN_2), "-0.6931471806");
        assert_eq!(format_value(0.0), "0.0000000000");
    }

    #[test]
    fn format_value_nan() {
        assert_eq!(format_value(f64::NAN), "undefined");
    }

    #[test]
    fn format_difference_scientific() {
        assert_eq!(format_difference(5e-8), "5.0000000000e-8");
        assert_eq!(format_difference(f64::NAN), "undefined");
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(10_000_001), "10,000,001");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }
}
