//! CLI result presenters: human-readable text and JSON.

use serde_json::{json, Value};

use cosum_orchestration::interfaces::{Comparison, ResultPresenter, SweepResult, Verdict};

use crate::output::{format_difference, format_duration, format_number, format_value};
use crate::ui::{print_error, print_header, status_fail, status_ok, status_skip};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed for one comparison.
    #[must_use]
    pub fn comparison_lines(&self, c: &Comparison) -> Vec<String> {
        if self.quiet {
            return vec![format_value(c.series_sum)];
        }

        let mut lines = vec![
            format!("x: {}", format_value(c.x)),
            format!("Series sum S: {}", format_value(c.series_sum)),
            format!("Control value y: {}", format_value(c.control)),
            format!("Difference |S - y|: {}", format_difference(c.difference)),
        ];

        if self.verbose {
            lines.push(format!("Terms: {}", format_number(c.terms)));
            lines.push(format!("Workers: {}", c.workers));
            lines.push(format!("Duration: {}", format_duration(c.duration)));
            for report in &c.chunks {
                lines.push(format!(
                    "  Range {}/{}: [{}, {}] partial {}",
                    report.index + 1,
                    report.total,
                    format_number(report.range.start),
                    format_number(report.range.end),
                    format_value(report.partial),
                ));
            }
        }
        if c.capped {
            lines.push(format!(
                "Warning: truncation stopped at the term ceiling ({} terms)",
                format_number(c.terms)
            ));
        }

        lines.push(status_line(c));
        lines
    }

    /// Row printed for one sweep point.
    #[must_use]
    pub fn sweep_row(&self, result: &SweepResult) -> String {
        match &result.outcome {
            Ok(c) if self.quiet => format_value(c.series_sum),
            Ok(c) => format!(
                "  {:>14} {:>16} {:>16} {:>18}  {}",
                format_value(c.x),
                format_value(c.series_sum),
                format_value(c.control),
                format_difference(c.difference),
                verdict_tag(c.verdict),
            ),
            Err(e) if self.quiet => format!("error: {e}"),
            Err(e) => format!("  {:>14} ERROR: {e}", format_value(result.x)),
        }
    }
}

fn status_line(c: &Comparison) -> String {
    match c.verdict {
        Verdict::Converged => status_ok(&format!(
            "Precision reached: difference below {:e}",
            c.epsilon
        )),
        Verdict::NotConverged => status_fail(&format!(
            "Precision not reached: difference not below {:e}",
            c.epsilon
        )),
        Verdict::Undefined => status_skip(&format!(
            "Control value undefined at x = {}",
            c.x
        )),
    }
}

fn verdict_tag(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Converged => "OK",
        Verdict::NotConverged => "FAIL",
        Verdict::Undefined => "SKIP",
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_comparison(&self, comparison: &Comparison) {
        for line in self.comparison_lines(comparison) {
            println!("{line}");
        }
    }

    fn present_sweep(&self, results: &[SweepResult]) {
        if !self.quiet {
            print_header("Sweep");
            println!(
                "  {:>14} {:>16} {:>16} {:>18}  {}",
                "x", "S", "y", "|S - y|", "status"
            );
            println!("{:-<90}", "");
        }
        for result in results {
            println!("{}", self.sweep_row(result));
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// JSON result presenter.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// JSON document for a sweep; failed points carry an `error` field.
    #[must_use]
    pub fn sweep_value(results: &[SweepResult]) -> Value {
        Value::Array(
            results
                .iter()
                .map(|result| match &result.outcome {
                    Ok(c) => json!(c),
                    Err(e) => json!({ "x": result.x, "error": e.to_string() }),
                })
                .collect(),
        )
    }
}

impl Default for JsonResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_comparison(&self, comparison: &Comparison) {
        match serde_json::to_string_pretty(comparison) {
            Ok(text) => println!("{text}"),
            Err(e) => self.present_error(&e.to_string()),
        }
    }

    fn present_sweep(&self, results: &[SweepResult]) {
        match serde_json::to_string_pretty(&Self::sweep_value(results)) {
            Ok(text) => println!("{text}"),
            Err(e) => self.present_error(&e.to_string()),
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", json!({ "error": error }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use cosum_core::engine::{SeriesError, SeriesOutcome};
    use cosum_core::observer::ChunkReport;
    use cosum_core::partition::TermRange;

    fn comparison(sum: f64, control: f64, epsilon: f64) -> Comparison {
        let outcome = SeriesOutcome {
            sum,
            terms: 10_000_001,
            workers: 4,
            capped: false,
        };
        Comparison::new(
            std::f64::consts::PI,
            epsilon,
            outcome,
            control,
            Duration::from_millis(5),
        )
    }

    #[test]
    fn presenter_flags() {
        let presenter = CLIResultPresenter::new(true, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
    }

    #[test]
    fn quiet_prints_only_sum() {
        let presenter = CLIResultPresenter::new(false, true);
        let lines = presenter.comparison_lines(&comparison(-0.69314718, -0.6931471806, 1e-7));
        assert_eq!(lines, vec!["-0.6931471800".to_string()]);
    }

    #[test]
    fn normal_output_reports_values() {
        let presenter = CLIResultPresenter::new(false, false);
        let lines = presenter.comparison_lines(&comparison(-0.69314718, -0.6931471806, 1e-7));
        assert!(lines.iter().any(|l| l.starts_with("Series sum S: -0.69314718")));
        assert!(lines.iter().any(|l| l.starts_with("Control value y: -0.6931471806")));
        assert!(lines.iter().any(|l| l.starts_with("Difference |S - y|:")));
        assert!(lines.iter().any(|l| l.contains("Precision reached")));
        assert!(!lines.iter().any(|l| l.starts_with("Terms:")));
    }

    #[test]
    fn verbose_output_reports_terms_and_workers() {
        let presenter = CLIResultPresenter::new(true, false);
        let lines = presenter.comparison_lines(&comparison(-0.69314718, -0.6931471806, 1e-7));
        assert!(lines.contains(&"Terms: 10,000,001".to_string()));
        assert!(lines.contains(&"Workers: 4".to_string()));
    }

    #[test]
    fn verbose_output_lists_ranges() {
        let mut c = comparison(-0.69, -0.69, 1e-3);
        c.chunks = vec![
            ChunkReport::new(0, 2, TermRange::new(1, 500, c.x), -0.5),
            ChunkReport::new(1, 2, TermRange::new(501, 1001, c.x), -0.19),
        ];

        let verbose = CLIResultPresenter::new(true, false).comparison_lines(&c);
        assert!(verbose.contains(&"  Range 1/2: [1, 500] partial -0.5000000000".to_string()));
        assert!(verbose.contains(&"  Range 2/2: [501, 1,001] partial -0.1900000000".to_string()));

        let normal = CLIResultPresenter::new(false, false).comparison_lines(&c);
        assert!(!normal.iter().any(|l| l.contains("Range")));
    }

    #[test]
    fn json_includes_chunks_when_present() {
        let mut c = comparison(-0.69, -0.69, 1e-3);
        c.chunks = vec![ChunkReport::new(0, 1, TermRange::new(1, 1001, c.x), -0.69)];
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["chunks"][0]["range"]["start"], 1);
        assert_eq!(value["chunks"][0]["range"]["end"], 1001);
    }

    #[test]
    fn not_converged_status() {
        let presenter = CLIResultPresenter::new(false, false);
        let lines = presenter.comparison_lines(&comparison(0.0, -0.35, 1e-3));
        assert!(lines.last().unwrap().contains("Precision not reached"));
    }

    #[test]
    fn undefined_status() {
        let presenter = CLIResultPresenter::new(false, false);
        let lines = presenter.comparison_lines(&comparison(7.48, f64::NAN, 1e-3));
        assert!(lines.iter().any(|l| l == "Control value y: undefined"));
        assert!(lines.last().unwrap().contains("undefined"));
    }

    #[test]
    fn capped_warning() {
        let presenter = CLIResultPresenter::new(false, false);
        let mut c = comparison(-0.69, -0.69, 1e-3);
        c.capped = true;
        let lines = presenter.comparison_lines(&c);
        assert!(lines.iter().any(|l| l.contains("term ceiling")));
    }

    #[test]
    fn sweep_rows() {
        let presenter = CLIResultPresenter::new(false, false);
        let ok = SweepResult {
            x: std::f64::consts::PI,
            outcome: Ok(comparison(-0.69314718, -0.6931471806, 1e-7)),
        };
        let err = SweepResult {
            x: 1.0,
            outcome: Err(SeriesError::InvalidEpsilon(0.0)),
        };
        assert!(presenter.sweep_row(&ok).ends_with("OK"));
        assert!(presenter.sweep_row(&err).contains("ERROR: invalid epsilon"));
    }

    #[test]
    fn sweep_rows_quiet() {
        let presenter = CLIResultPresenter::new(false, true);
        let ok = SweepResult {
            x: std::f64::consts::PI,
            outcome: Ok(comparison(-0.5, -0.5, 1e-7)),
        };
        assert_eq!(presenter.sweep_row(&ok), "-0.5000000000");
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CLIResultPresenter::new(true, false);
        presenter.present_comparison(&comparison(-0.69, -0.69, 1e-3));
        presenter.present_sweep(&[]);
        presenter.present_error("test error message");
    }

    #[test]
    fn json_sweep_value() {
        let results = vec![
            SweepResult {
                x: std::f64::consts::PI,
                outcome: Ok(comparison(-0.69, -0.69, 1e-3)),
            },
            SweepResult {
                x: 2.0,
                outcome: Err(SeriesError::InvalidEpsilon(0.0)),
            },
        ];
        let value = JsonResultPresenter::sweep_value(&results);
        assert_eq!(value[0]["verdict"], "converged");
        assert_eq!(value[0]["workers"], 4);
        assert_eq!(value[1]["x"], 2.0);
        assert!(value[1]["error"].as_str().unwrap().contains("invalid epsilon"));
    }

    #[test]
    fn json_present_does_not_panic() {
        let presenter = JsonResultPresenter::new();
        presenter.present_comparison(&comparison(7.48, f64::NAN, 1e-3));
        presenter.present_sweep(&[]);
        presenter.present_error("boom");
    }
}
