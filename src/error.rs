// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for joblog.
//!
//! [`Error`] is what callers see. Sink implementations report a [`SinkError`], which the
//! [`JobLogger`](crate::JobLogger) wraps in a [`SinkFailure`] together with the destination
//! that produced it.

use crate::destination::Destination;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{}", describe_failures(.0))]
    Sinks(Vec<SinkFailure>),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// The sink failures carried by this error, if any.
    pub fn sink_failures(&self) -> &[SinkFailure] {
        match self {
            Error::Sinks(failures) => failures,
            _ => &[],
        }
    }
}

/// Failure reported by a single sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
#[error("{destination} sink failed: {error}")]
pub struct SinkFailure {
    pub destination: Destination,
    #[source]
    pub error: SinkError,
}

fn describe_failures(failures: &[SinkFailure]) -> String {
    let parts: Vec<String> = failures.iter().map(|f| f.to_string()).collect();
    format!("{} sink(s) failed: {}", failures.len(), parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_failures_are_listed() {
        let err = Error::Sinks(vec![
            SinkFailure {
                destination: Destination::File,
                error: std::io::Error::other("disk full").into(),
            },
            SinkFailure {
                destination: Destination::Console,
                error: std::io::Error::other("broken pipe").into(),
            },
        ]);
        let text = err.to_string();
        assert!(text.starts_with("2 sink(s) failed"), "{text}");
        assert!(text.contains("file sink failed: io error: disk full"), "{text}");
        assert!(text.contains("console sink failed"), "{text}");
        assert_eq!(err.sink_failures().len(), 2);
    }

    #[test]
    fn non_sink_errors_have_no_failures() {
        assert!(Error::invalid("x").sink_failures().is_empty());
    }
}
