//! Application entry point and dispatch.

use anyhow::Result;
use tracing::warn;

use cosum_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use cosum_core::constants::exit_codes;
use cosum_core::engine::{SeriesEngine, SeriesError};
use cosum_core::observers::{LoggingObserver, NoOpObserver};
use cosum_orchestration::interfaces::{ResultPresenter, Verdict};
use cosum_orchestration::orchestrator::{
    analyze_sweep, compare_with_chunks, compare_with_observer, execute_sweep,
};

use crate::config::AppConfig;
use crate::errors::handle_error;

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        cosum_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter::new())
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    };
    let engine = SeriesEngine::new(config.series_options());

    if config.sweep.is_empty() {
        run_single(config, &engine, presenter.as_ref())
    } else {
        run_sweep(config, &engine, presenter.as_ref())
    }
}

fn run_single(
    config: &AppConfig,
    engine: &SeriesEngine,
    presenter: &dyn ResultPresenter,
) -> Result<i32> {
    // Verbose runs also carry the per-range breakdown into the output.
    let comparison = if config.verbose {
        compare_with_chunks(engine, config.x, config.epsilon, &LoggingObserver::new())?
    } else {
        compare_with_observer(engine, config.x, config.epsilon, &NoOpObserver::new())?
    };
    presenter.present_comparison(&comparison);

    if config.strict && comparison.verdict == Verdict::NotConverged {
        return Ok(exit_codes::ERROR_NOT_CONVERGED);
    }
    Ok(exit_codes::SUCCESS)
}

fn run_sweep(
    config: &AppConfig,
    engine: &SeriesEngine,
    presenter: &dyn ResultPresenter,
) -> Result<i32> {
    let results = execute_sweep(engine, &config.points(), config.epsilon);
    presenter.present_sweep(&results);

    match analyze_sweep(&results) {
        Ok(()) => Ok(exit_codes::SUCCESS),
        Err(err @ SeriesError::NotConverged { .. }) => {
            warn!("{err}");
            if config.strict {
                Ok(handle_error(&err))
            } else {
                Ok(exit_codes::SUCCESS)
            }
        }
        Err(err) => {
            presenter.present_error(&err.to_string());
            Ok(handle_error(&err))
        }
    }
}
