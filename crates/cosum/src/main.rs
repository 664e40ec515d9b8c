//! cosum — parallel cosine series sum checked against its control value.

use anyhow::Result;
use cosum_core::constants::exit_codes;
use cosum_core::engine::SeriesError;
use cosum_lib::{app, config, errors};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    // Initialize tracing; -v shows per-range debug lines from the engine.
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if config.verbose {
        filter = filter.add_directive("cosum_core=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(exit_codes::SUCCESS) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => match err.downcast_ref::<SeriesError>() {
            Some(series_err) => {
                eprintln!("Error: {series_err}");
                std::process::exit(errors::handle_error(series_err));
            }
            None => Err(err),
        },
    }
}
