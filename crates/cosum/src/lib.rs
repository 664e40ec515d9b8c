//! cosum library — application logic for the series calculator.

pub mod app;
pub mod config;
pub mod errors;
