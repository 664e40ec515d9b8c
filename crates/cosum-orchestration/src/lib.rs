//! # cosum-orchestration
//!
//! Comparison of the series sum against its control value, and parallel
//! sweeps over many arguments.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{Comparison, ResultPresenter, SweepResult, Verdict};
pub use orchestrator::{
    analyze_sweep, compare, compare_with_chunks, compare_with_observer, execute_sweep,
};
