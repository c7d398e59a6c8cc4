// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database sink.
//!
//! Records are inserted into a table named `Log` with the columns `message` and `level`.
//! The message is stored exactly as logged (no formatting, no timestamp) and the level is stored
//! as its [`database_code`](crate::Level::database_code).
//!
//! The connection string is the path of an SQLite database. A connection is opened for every
//! record and closed before `write_record` returns. Values are always bound as statement
//! parameters, never spliced into the SQL text.

use crate::destination::Destination;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use rusqlite::{Connection, params};

const INSERT_SQL: &str = "INSERT INTO Log (message, level) VALUES (?1, ?2)";
const SCHEMA_SQL: &str =
    "CREATE TABLE IF NOT EXISTS Log (message TEXT NOT NULL, level INTEGER NOT NULL)";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseSink {
    connection_string: String,
}

impl DatabaseSink {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Creates the `Log` table if it does not exist yet.
    pub fn install_schema(&self) -> Result<(), SinkError> {
        let connection = self.open()?;
        connection.execute(SCHEMA_SQL, [])?;
        close(connection)
    }

    fn open(&self) -> Result<Connection, SinkError> {
        log::trace!("opening database {}", self.connection_string);
        Ok(Connection::open(&self.connection_string)?)
    }
}

/**
Closes the connection, surfacing any error from the close itself.

On the error paths of the callers the connection is dropped instead, which also closes it.
*/
fn close(connection: Connection) -> Result<(), SinkError> {
    connection.close().map_err(|(_, e)| SinkError::Storage(e))
}

impl Sink for DatabaseSink {
    fn destination(&self) -> Destination {
        Destination::Database
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), SinkError> {
        let connection = self.open()?;
        connection.execute(
            INSERT_SQL,
            params![record.message(), record.level().database_code()],
        )?;
        close(connection)
    }
}
