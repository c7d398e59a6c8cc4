// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::destination::Destination;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use std::fmt::Debug;

pub trait Sink: Debug + Send + Sync {
    /**
    The destination this sink writes to.

    The [`JobLogger`](crate::JobLogger) uses this to place the sink in the fan-out order.
    */
    fn destination(&self) -> Destination;

    /**
        Writes the record to the destination.

        Called at most once per accepted log call. Errors are reported back to the logger, which
        decides whether the remaining sinks still run.
    */
    fn write_record(&self, record: &LogRecord) -> Result<(), SinkError>;

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}

/*
Boilerplate notes.

# Sink

Clone on a sink makes little sense since sinks usually own a handle (a writer, a path, a
connection string), and the logger holds them behind Arc anyway.
PartialEq/Eq/Hash would raise the data-vs-provenance question; avoid.
Default is not sensible since most sinks need a target to be constructed.
Send/Sync is required so a JobLogger can be shared across threads.
*/
