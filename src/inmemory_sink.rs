// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that captures formatted lines in memory instead of writing them anywhere. It stands
//! in for any [`Destination`], which makes it useful for:
//!
//! - Unit testing code that logs through a [`JobLogger`](crate::JobLogger)
//! - Checking which destinations a call reached, and in what order
//! - Inspecting log output programmatically
//!
//! The captured lines live behind a `Mutex<Vec<String>>`, so the sink can be shared across
//! threads through an `Arc`.

use crate::destination::Destination;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An in-memory sink that stores formatted lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use joblog::{Destination, InMemorySink, JobLogger, Level, LoggerConfig};
/// use std::sync::Arc;
///
/// let console = Arc::new(InMemorySink::new(Destination::Console));
/// let config = LoggerConfig::new([Destination::Console], [Level::Warning]);
/// let logger = JobLogger::with_sinks(config, vec![console.clone()]).unwrap();
///
/// logger.log_warning("disk almost full").unwrap();
/// logger.log_message("ignored, level not enabled").unwrap();
///
/// let logs = console.drain_logs();
/// assert!(logs.contains("[Warning]: "));
/// assert!(logs.ends_with(" - disk almost full."));
/// assert!(console.is_empty());
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    destination: Destination,
    logs: Mutex<Vec<String>>,
}

impl InMemorySink {
    /// Creates an empty sink that reports itself as `destination`.
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            logs: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drains all captured lines into a single newline-joined string, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.lock();
        let result = logs.join("\n");
        logs.clear();
        result
    }

    /// Drains the captured lines individually.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for InMemorySink {
    fn destination(&self) -> Destination {
        self.destination
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), SinkError> {
        let line = record.to_string();
        self.lock().push(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn captures_and_drains() {
        let sink = InMemorySink::new(Destination::File);
        assert_eq!(sink.destination(), Destination::File);
        sink.write_record(&LogRecord::new(Level::Message, "one"))
            .unwrap();
        sink.write_record(&LogRecord::new(Level::Error, "two"))
            .unwrap();
        assert_eq!(sink.len(), 2);

        let lines = sink.drain_lines();
        assert!(lines[0].starts_with("[Message]: ") && lines[0].ends_with(" - one."));
        assert!(lines[1].starts_with("[Error]: ") && lines[1].ends_with(" - two."));
        assert!(sink.is_empty());
        assert_eq!(sink.drain_logs(), "");
    }
}
