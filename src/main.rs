// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo driver: logs a message and a warning to the console and today's log file.
//!
//! Usage: `joblog [SETTINGS_PATH]`. Without an argument `appsettings.json` in the current
//! directory is used if present. `RUST_LOG=debug` shows joblog's own diagnostics.

use joblog::{AmbientSettings, Destination, JobLogger, Level, LoggerConfig};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_SETTINGS: &str = "appsettings.json";
const DEFAULT_LOG_DIRECTORY: &str = "logs";

fn load_settings(explicit: Option<String>) -> joblog::Result<AmbientSettings> {
    let settings = match explicit {
        Some(path) => AmbientSettings::from_file(path)?,
        None if Path::new(DEFAULT_SETTINGS).exists() => AmbientSettings::from_file(DEFAULT_SETTINGS)?,
        None => {
            log::debug!("no {DEFAULT_SETTINGS}, using defaults");
            AmbientSettings::default()
        }
    };
    Ok(settings.with_env_overrides())
}

fn run() -> joblog::Result<()> {
    let settings = load_settings(std::env::args().nth(1))?;
    let config = settings.apply(
        LoggerConfig::new(
            [Destination::Console, Destination::File],
            [Level::Message, Level::Warning],
        )
        .with_file_directory(DEFAULT_LOG_DIRECTORY),
    );
    let logger = JobLogger::new(config)?;
    logger.log_message("demo")?;
    logger.log_warning("hi!")?;
    logger.flush()
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("joblog: {e}");
            ExitCode::FAILURE
        }
    }
}
