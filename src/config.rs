// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction input for a [`JobLogger`](crate::JobLogger).
//!
//! A [`LoggerConfig`] names which severities pass the filter and which destinations receive
//! accepted messages. The directory and connection string are plain values supplied by the
//! caller; the config never goes looking for them.
//!
//! ```
//! use joblog::{Destination, Level, LoggerConfig};
//!
//! let config = LoggerConfig::new(
//!     [Destination::Console, Destination::File],
//!     [Level::Message, Level::Warning],
//! )
//! .with_file_directory("logs");
//! assert!(config.validate().is_ok());
//! ```

use crate::destination::Destination;
use crate::error::{Error, Result};
use crate::job_logger::FailurePolicy;
use crate::level::Level;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub destinations: BTreeSet<Destination>,
    pub levels: BTreeSet<Level>,
    /// Directory holding the daily log files. Required when [`Destination::File`] is enabled.
    pub file_directory: Option<PathBuf>,
    /// Database location. Required when [`Destination::Database`] is enabled.
    pub connection_string: Option<String>,
    pub failure_policy: FailurePolicy,
    pub console_colors: bool,
}

impl LoggerConfig {
    pub fn new(
        destinations: impl IntoIterator<Item = Destination>,
        levels: impl IntoIterator<Item = Level>,
    ) -> Self {
        Self {
            destinations: destinations.into_iter().collect(),
            levels: levels.into_iter().collect(),
            file_directory: None,
            connection_string: None,
            failure_policy: FailurePolicy::default(),
            console_colors: true,
        }
    }

    pub fn with_file_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file_directory = Some(directory.into());
        self
    }

    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    pub fn is_enabled(&self, destination: Destination) -> bool {
        self.destinations.contains(&destination)
    }

    /**
    Checks the config can back a logger.

    Both sets must be non-empty, and each enabled destination that needs an ambient value
    must have a non-blank one.
    */
    pub fn validate(&self) -> Result<()> {
        if self.destinations.is_empty() {
            return Err(Error::configuration(
                "there is no destination configured to put the message",
            ));
        }
        if self.levels.is_empty() {
            return Err(Error::configuration(
                "there is no level configured for the message",
            ));
        }
        if self.is_enabled(Destination::File) {
            let missing = self
                .file_directory
                .as_ref()
                .is_none_or(|dir| dir.as_os_str().to_string_lossy().trim().is_empty());
            if missing {
                return Err(Error::configuration(
                    "file destination is enabled but no log file directory is configured",
                ));
            }
        }
        if self.is_enabled(Destination::Database) {
            let missing = self
                .connection_string
                .as_deref()
                .is_none_or(|s| s.trim().is_empty());
            if missing {
                return Err(Error::configuration(
                    "database destination is enabled but no connection string is configured",
                ));
            }
        }
        Ok(())
    }
}
