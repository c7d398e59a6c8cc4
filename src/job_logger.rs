// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`JobLogger`] orchestrator.
//!
//! A `JobLogger` is built once from a [`LoggerConfig`] and then holds an immutable view of it:
//! the enabled levels, the enabled sinks in fan-out order, and the [`FailurePolicy`].
//!
//! # The log call
//!
//! Every entry point ([`JobLogger::log_message`], [`JobLogger::log_warning`],
//! [`JobLogger::log_error`]) funnels into [`JobLogger::log`]:
//!
//! 1. A level outside the configured set returns `Ok(())` without touching any sink.
//! 2. A message that is empty after trimming fails with [`Error::InvalidArgument`].
//! 3. One [`LogRecord`] is built, capturing the timestamp.
//! 4. The record goes to the enabled sinks in the order file, console, database.
//!
//! # Sink failures
//!
//! Under [`FailurePolicy::AttemptAll`] every sink is tried and all failures come back together
//! in [`Error::Sinks`]. Under [`FailurePolicy::FailFast`] the first failure stops the fan-out.

use crate::config::LoggerConfig;
use crate::console_sink::ConsoleSink;
use crate::database_sink::DatabaseSink;
use crate::destination::Destination;
use crate::error::{Error, Result, SinkFailure};
use crate::file_sink::FileSink;
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::collections::BTreeSet;
use std::sync::Arc;

/// What a log call does when a sink fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Try every enabled sink, then report all failures together.
    #[default]
    AttemptAll,
    /// Stop at the first failing sink; later sinks are not attempted.
    FailFast,
}

#[derive(Debug)]
pub struct JobLogger {
    levels: BTreeSet<Level>,
    sinks: Vec<Arc<dyn Sink>>,
    failure_policy: FailurePolicy,
}

impl JobLogger {
    /**
    Validates the config and builds the standard sink for each enabled destination.

    No I/O happens here; directories and database connections are only touched by log calls.
    */
    pub fn new(config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        let mut sinks: Vec<Arc<dyn Sink>> = Vec::with_capacity(config.destinations.len());
        for destination in Destination::FAN_OUT_ORDER {
            if !config.is_enabled(destination) {
                continue;
            }
            sinks.push(default_sink(destination, &config)?);
        }
        log::debug!(
            "joblog: levels {:?}, destinations {:?}, policy {:?}",
            config.levels,
            config.destinations,
            config.failure_policy
        );
        Ok(Self {
            levels: config.levels,
            sinks,
            failure_policy: config.failure_policy,
        })
    }

    /**
    Validates the config and uses the supplied sinks instead of the standard ones.

    Every enabled destination needs exactly one sink. Sinks for destinations the config does
    not enable are discarded.
    */
    pub fn with_sinks(config: LoggerConfig, sinks: Vec<Arc<dyn Sink>>) -> Result<Self> {
        config.validate()?;
        let mut chosen: Vec<Arc<dyn Sink>> = Vec::with_capacity(config.destinations.len());
        for sink in sinks {
            let destination = sink.destination();
            if !config.is_enabled(destination) {
                log::debug!("joblog: dropping sink for disabled destination {destination}");
                continue;
            }
            if chosen.iter().any(|s| s.destination() == destination) {
                return Err(Error::configuration(format!(
                    "more than one sink supplied for the {destination} destination"
                )));
            }
            chosen.push(sink);
        }
        if let Some(missing) = config
            .destinations
            .iter()
            .find(|d| !chosen.iter().any(|s| s.destination() == **d))
        {
            return Err(Error::configuration(format!(
                "no sink supplied for the enabled {missing} destination"
            )));
        }
        chosen.sort_by_key(|s| s.destination().fan_out_rank());
        Ok(Self {
            levels: config.levels,
            sinks: chosen,
            failure_policy: config.failure_policy,
        })
    }

    pub fn log_message(&self, message: &str) -> Result<()> {
        self.log(Level::Message, message)
    }

    pub fn log_warning(&self, message: &str) -> Result<()> {
        self.log(Level::Warning, message)
    }

    pub fn log_error(&self, message: &str) -> Result<()> {
        self.log(Level::Error, message)
    }

    pub fn log(&self, level: Level, message: &str) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        if message.trim().is_empty() {
            return Err(Error::invalid("message must be specified"));
        }
        let record = LogRecord::new(level, message);

        let mut failures = Vec::new();
        for sink in &self.sinks {
            if let Err(error) = sink.write_record(&record) {
                let destination = sink.destination();
                log::warn!("joblog: {destination} sink failed: {error}");
                failures.push(SinkFailure { destination, error });
                if self.failure_policy == FailurePolicy::FailFast {
                    break;
                }
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Sinks(failures))
        }
    }

    /// Flushes every sink, collecting failures the same way a log call does.
    pub fn flush(&self) -> Result<()> {
        let failures: Vec<SinkFailure> = self
            .sinks
            .iter()
            .filter_map(|sink| {
                sink.flush().err().map(|error| SinkFailure {
                    destination: sink.destination(),
                    error,
                })
            })
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Sinks(failures))
        }
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }

    pub fn levels(&self) -> &BTreeSet<Level> {
        &self.levels
    }

    /// Enabled destinations, in fan-out order.
    pub fn destinations(&self) -> Vec<Destination> {
        self.sinks.iter().map(|s| s.destination()).collect()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}

fn default_sink(destination: Destination, config: &LoggerConfig) -> Result<Arc<dyn Sink>> {
    let sink: Arc<dyn Sink> = match destination {
        Destination::Console => {
            Arc::new(ConsoleSink::stdout().with_colors(config.console_colors))
        }
        Destination::File => {
            let directory = config.file_directory.clone().ok_or_else(|| {
                Error::configuration("file destination is enabled but no directory is configured")
            })?;
            Arc::new(FileSink::new(directory))
        }
        Destination::Database => {
            let connection_string = config.connection_string.clone().ok_or_else(|| {
                Error::configuration(
                    "database destination is enabled but no connection string is configured",
                )
            })?;
            Arc::new(DatabaseSink::new(connection_string))
        }
    };
    Ok(sink)
}
