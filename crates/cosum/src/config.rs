//! Application configuration from CLI flags and environment.

use clap::Parser;

use cosum_core::constants::{DEFAULT_EPSILON, DEFAULT_X};
use cosum_core::options::SeriesOptions;

/// cosum — parallel sum of the series Σ cos(n·x)/n, checked against −ln(2·sin(x/2)).
#[derive(Parser, Debug)]
#[command(name = "cosum", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Argument x of the series.
    #[arg(short = 'x', long = "x", default_value_t = DEFAULT_X, allow_negative_numbers = true, env = "COSUM_X")]
    pub x: f64,

    /// Target precision: terms are summed until one drops below epsilon.
    #[arg(short, long, default_value_t = DEFAULT_EPSILON, allow_negative_numbers = true, env = "COSUM_EPSILON")]
    pub epsilon: f64,

    /// Maximum number of workers (0 = auto, never more than 4).
    #[arg(short, long, default_value = "0")]
    pub workers: usize,

    /// Comma-separated list of x values to compare in one run.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub sweep: Vec<f64>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the series sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (terms, workers, per-range log lines).
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit with a non-zero code when the precision target is missed.
    #[arg(long)]
    pub strict: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options derived from the flags.
    #[must_use]
    pub fn series_options(&self) -> SeriesOptions {
        SeriesOptions {
            max_workers: self.workers,
            ..Default::default()
        }
        .normalize()
    }

    /// Arguments to evaluate: the sweep list, or the single `x`.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        if self.sweep.is_empty() {
            vec![self.x]
        } else {
            self.sweep.clone()
        }
    }
}
