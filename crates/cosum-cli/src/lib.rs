//! # cosum-cli
//!
//! Text and JSON result presentation, number formatting, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonResultPresenter};
