// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::destination::Destination;
use crate::error::SinkError;
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[37m";
const RESET: &str = "\x1b[0m";

/// ANSI color cue written before a line of the given level.
pub fn color_for(level: Level) -> &'static str {
    match level {
        Level::Error => RED,
        Level::Warning => YELLOW,
        Level::Message => WHITE,
    }
}

/**
A sink that writes one line per record to the console (stdout by default).

Each line is prefixed with a color cue for its level and followed by a reset, so the
terminal's color state is unchanged after every write.
 */
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    colors: bool,
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            colors: true,
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn destination(&self) -> Destination {
        Destination::Console
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), SinkError> {
        let line = if self.colors {
            format!("{}{}{}\n", color_for(record.level()), record, RESET)
        } else {
            format!("{}\n", record)
        };
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn record(level: Level, message: &str) -> LogRecord {
        let at = Local.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        LogRecord::at(level, message, at)
    }

    #[test]
    fn colors_by_level_and_resets() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleSink::with_writer(Box::new(buffer.clone()));
        sink.write_record(&record(Level::Error, "boom")).unwrap();
        sink.write_record(&record(Level::Warning, "hmm")).unwrap();
        sink.write_record(&record(Level::Message, "ok")).unwrap();

        let out = buffer.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "\x1b[31m[Error]: 2026-10-18 12:00:00 - boom.\x1b[0m",
                "\x1b[33m[Warning]: 2026-10-18 12:00:00 - hmm.\x1b[0m",
                "\x1b[37m[Message]: 2026-10-18 12:00:00 - ok.\x1b[0m",
            ]
        );
    }

    #[test]
    fn plain_output_without_colors() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleSink::with_writer(Box::new(buffer.clone())).with_colors(false);
        sink.write_record(&record(Level::Error, "boom")).unwrap();
        assert_eq!(buffer.contents(), "[Error]: 2026-10-18 12:00:00 - boom.\n");
    }

    #[test]
    fn write_failures_surface_as_io() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let sink = ConsoleSink::with_writer(Box::new(Broken));
        let err = sink.write_record(&record(Level::Message, "x")).unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
    }
}
