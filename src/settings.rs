// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ambient settings: where the log files go and which database to write to.
//!
//! These values usually come from a JSON settings file shaped like
//!
//! ```json
//! { "ConnectionString": "joblog.sqlite", "LogFileDirectory": "logs" }
//! ```
//!
//! optionally overridden by the `JOBLOG_CONNECTION_STRING` and `JOBLOG_LOG_FILE_DIRECTORY`
//! environment variables. Nothing in the logging path reads settings on its own; callers load
//! them here and [`apply`](AmbientSettings::apply) them to a [`LoggerConfig`].

use crate::config::LoggerConfig;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONNECTION_STRING_ENV: &str = "JOBLOG_CONNECTION_STRING";
pub const LOG_FILE_DIRECTORY_ENV: &str = "JOBLOG_LOG_FILE_DIRECTORY";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AmbientSettings {
    #[serde(default)]
    pub connection_string: Option<String>,
    #[serde(default)]
    pub log_file_directory: Option<PathBuf>,
}

impl AmbientSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("malformed settings: {e}")))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("cannot read settings {}: {e}", path.display()))
        })?;
        log::debug!("loaded settings from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Replaces values with the ones found in the environment, if any.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(CONNECTION_STRING_ENV) {
            self.connection_string = Some(value);
        }
        if let Some(value) = lookup(LOG_FILE_DIRECTORY_ENV) {
            self.log_file_directory = Some(PathBuf::from(value));
        }
        self
    }

    /// Copies the configured values into `config`, leaving its other values alone.
    pub fn apply(&self, mut config: LoggerConfig) -> LoggerConfig {
        if let Some(connection_string) = &self.connection_string {
            config.connection_string = Some(connection_string.clone());
        }
        if let Some(directory) = &self.log_file_directory {
            config.file_directory = Some(directory.clone());
        }
        config
    }
}
