// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for joblog.
//!
//! A [`LogRecord`] is the transient `(level, message, timestamp)` triple that exists for the
//! duration of a single log call. The [`JobLogger`](crate::JobLogger) builds exactly one record
//! per accepted call and hands the same record to every sink, so all destinations agree on the
//! timestamp.
//!
//! # Format
//!
//! The [`Display`] implementation is the message formatter:
//!
//! ```text
//! [Warning]: 2026-10-18 14:03:55 - disk almost full.
//! ```
//!
//! The trailing period is always appended, even if the message already ends with one.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Local, TimeZone};
//! use joblog::{Level, LogRecord};
//!
//! let at = Local.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
//! let record = LogRecord::at(Level::Message, "demo", at);
//! assert_eq!(record.to_string(), "[Message]: 2026-10-18 09:30:00 - demo.");
//! ```

use crate::Level;
use chrono::{DateTime, Local, NaiveDate};
use std::fmt::Display;

/// `strftime` pattern used for the timestamp inside a formatted line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    level: Level,
    message: String,
    timestamp: DateTime<Local>,
}

impl LogRecord {
    /**
    Creates a record stamped with the current local time.

    Each call reads the clock, so two records built from the same input are not
    guaranteed to format identically.
    */
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self::at(level, message, Local::now())
    }

    /// Creates a record with an explicit timestamp.
    pub fn at(level: Level, message: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The raw message, exactly as the caller passed it.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Calendar day the record belongs to, in local time.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]: {} - {}.",
            self.level,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone: derived
- PartialEq/Eq/Hash: derived, all fields participate
- Display: the single-line formatter

NOT IMPLEMENTED:
- Default: a record without a message is never valid
- Ord/PartialOrd: records are compared by arrival, not by value
- Copy: owns a String
*/
