// SPDX-License-Identifier: MIT OR Apache-2.0

//! Day-partitioned text file sink.
//!
//! Every record is appended to `LogFile<YYYY-MM-DD>.txt` inside the configured directory,
//! where the date is the record's own local calendar day. The directory is created on first
//! use. Files are opened in append mode for each record and closed again afterwards; the sink
//! keeps no handle between calls.

use crate::destination::Destination;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Name of the log file for the given day, e.g. `LogFile2026-10-18.txt`.
    pub fn file_name(day: NaiveDate) -> String {
        format!("LogFile{}.txt", day.format("%Y-%m-%d"))
    }

    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.directory.join(Self::file_name(day))
    }
}

impl Sink for FileSink {
    fn destination(&self) -> Destination {
        Destination::File
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), SinkError> {
        if !self.directory.is_dir() {
            log::debug!("creating log directory {}", self.directory.display());
            fs::create_dir_all(&self.directory)?;
        }
        let path = self.path_for(record.day());
        log::trace!("appending to {}", path.display());
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        //whole line in one write
        file.write_all(format!("{record}\n").as_bytes())?;
        Ok(())
    }
}
