//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# joblog

joblog is a small job logger that writes each accepted message to one or more destinations.

# The model

A logger is configured with two sets:

* the **levels** that pass the filter: `Message`, `Warning`, `Error`;
* the **destinations** that receive accepted messages: `Console`, `File`, `Database`.

Both sets must be non-empty.  A message at a level outside the set is dropped silently; that is
policy, not an error.

| Destination | Output                                                     | Needs               |
|-------------|------------------------------------------------------------|---------------------|
| File        | `LogFile<YYYY-MM-DD>.txt`, one formatted line per record   | a directory         |
| Console     | stdout, colored by level (red, yellow, white)              | nothing             |
| Database    | a row `(message, level)` in the `Log` table, SQLite        | a connection string |

A single call visits the enabled destinations in the order file, console, database.

# The API

```rust
use joblog::{Destination, JobLogger, Level, LoggerConfig};

# let dir = tempfile::tempdir().unwrap();
let config = LoggerConfig::new(
    [Destination::Console, Destination::File],
    [Level::Message, Level::Warning],
)
.with_file_directory(dir.path());

let logger = JobLogger::new(config)?;
logger.log_message("demo")?;
logger.log_warning("hi!")?;
logger.log_error("not enabled, so nothing happens")?;
# Ok::<(), joblog::Error>(())
```

Files and console get lines like

```text
[Message]: 2026-10-18 09:30:00 - demo.
```

while the database gets the raw message and a numeric level code
(see [`Level::database_code`]).

# Failures

Every call returns a [`Result`].  Configuration problems surface from [`JobLogger::new`],
blank messages from the log call itself.  When a sink fails, the default
[`FailurePolicy::AttemptAll`] still tries the remaining sinks and reports every failure together
in [`Error::Sinks`]; [`FailurePolicy::FailFast`] stops at the first one.

# Settings

The logger never reads configuration files.  [`AmbientSettings`] loads the connection string and
log directory from a JSON settings file and the environment, for callers that want that.

# Testing

[`InMemorySink`] captures formatted lines and can stand in for any destination through
[`JobLogger::with_sinks`].
*/

mod config;
mod console_sink;
mod database_sink;
mod destination;
mod error;
mod file_sink;
mod inmemory_sink;
mod job_logger;
mod level;
mod log_record;
pub mod settings;
mod sink;

pub use config::LoggerConfig;
pub use console_sink::{ConsoleSink, color_for};
pub use database_sink::DatabaseSink;
pub use destination::Destination;
pub use error::{Error, Result, SinkError, SinkFailure};
pub use file_sink::FileSink;
pub use inmemory_sink::InMemorySink;
pub use job_logger::{FailurePolicy, JobLogger};
pub use level::Level;
pub use log_record::{LogRecord, TIMESTAMP_FORMAT};
pub use settings::AmbientSettings;
pub use sink::Sink;
