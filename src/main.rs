//! Main application entry point and high-level flow coordination.
//!
//! The flow for a single invocation:
//! 1. Logging level from `LOG_LEVEL`, then argument parsing
//! 2. Early exit for help and version (no configuration is read)
//! 3. Configuration loading and validation, optional log file
//! 4. Fixed time source for `--at`
//! 5. The selected service, printed once
//!
//! No service flag means nothing is printed and the exit code is zero.

use anyhow::Result;
use std::sync::Arc;

use astronomical::args::{self, CliAction, ParsedArgs};
use astronomical::config::{self, Config};
use astronomical::constants::*;
use astronomical::logger::Log;
use astronomical::physics::Kernel;
use astronomical::services::{AlarmsService, Service, SunService, TimeService};
use astronomical::time_source::{self, FixedTimeSource};
use astronomical::{log_critical, log_debug, log_error, log_error_exit, log_info, log_pipe};

fn main() -> Result<()> {
    Log::init_from_env();

    let parsed_args = ParsedArgs::from_env();

    match parsed_args.action {
        CliAction::ShowHelp => {
            args::display_help();
            return Ok(());
        }
        CliAction::ShowVersion => {
            args::display_version_info();
            return Ok(());
        }
        CliAction::Nothing => return Ok(()),
        CliAction::Sun | CliAction::Time | CliAction::Alarms => {}
    }

    config::set_config_dir(parsed_args.config_dir)?;
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log_error_exit!("Configuration error: {e:#}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Some(path) = &config.log_file
        && let Err(e) = Log::start_file_logging(path)
    {
        log_pipe!();
        log_error!("Continuing without log file: {e:#}");
    }

    if let Some(instant) = parsed_args.at {
        time_source::init_time_source(Arc::new(FixedTimeSource::new(instant)));
        log_info!("Evaluating at fixed instant {instant}");
    }

    if let Err(e) = run_service(parsed_args.action, &config) {
        log_pipe!();
        log_critical!("{e:#}");
        std::process::exit(EXIT_FAILURE);
    }
    Ok(())
}

/// Build and print the service selected on the command line.
fn run_service(action: CliAction, config: &Config) -> Result<()> {
    let locale = match config.locale() {
        Ok(locale) => locale,
        Err(e) => {
            log_error_exit!("Configuration error: {e:#}");
            std::process::exit(EXIT_FAILURE);
        }
    };
    let sink = Log;
    let kernel = Kernel::new(&sink);

    let service: Box<dyn Service> = match action {
        CliAction::Sun => Box::new(SunService::new(locale, &kernel)?),
        CliAction::Time => Box::new(TimeService::new(locale)),
        CliAction::Alarms => {
            let requirements = config.requirements()?;
            Box::new(AlarmsService::new(&requirements, &locale, &sink))
        }
        CliAction::ShowHelp | CliAction::ShowVersion | CliAction::Nothing => return Ok(()),
    };

    log_debug!("CLI OPTION: \"{}\" invoked.", service.name());
    println!("{service}");
    Ok(())
}
