use joblog::{ConsoleSink, Destination, FileSink, InMemorySink, JobLogger, Level, LoggerConfig};
use std::io::Write;
use std::sync::{Arc, Mutex};

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

fn assert_line(line: &str, tag: &str, message: &str) {
    assert!(line.starts_with(&format!("[{tag}]: ")), "unexpected line {line:?}");
    assert!(line.ends_with(&format!(" - {message}.")), "unexpected line {line:?}");
}

#[test]
fn console_and_file_receive_both_lines_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = SharedBuffer::default();
    let database = Arc::new(InMemorySink::new(Destination::Database));

    let config = LoggerConfig::new(
        [Destination::Console, Destination::File],
        [Level::Message, Level::Warning],
    )
    .with_file_directory(dir.path());
    let logger = JobLogger::with_sinks(
        config,
        vec![
            Arc::new(ConsoleSink::with_writer(Box::new(stdout.clone())).with_colors(false)),
            Arc::new(FileSink::new(dir.path())),
            database.clone(),
        ],
    )
    .unwrap();

    logger.log_message("demo").unwrap();
    logger.log_warning("hi!").unwrap();
    logger.log_error("filtered out").unwrap();

    let console = String::from_utf8(stdout.0.lock().unwrap().clone()).unwrap();
    let console_lines: Vec<&str> = console.lines().collect();
    assert_eq!(console_lines.len(), 2);
    assert_line(console_lines[0], "Message", "demo");
    assert_line(console_lines[1], "Warning", "hi!");

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1, "expected one daily file, got {files:?}");
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("LogFile") && name.ends_with(".txt"), "{name}");

    let content = std::fs::read_to_string(&files[0]).unwrap();
    let file_lines: Vec<&str> = content.lines().collect();
    assert_eq!(file_lines, console_lines);
    assert!(content.ends_with('\n'));

    assert!(database.is_empty());
}

#[test]
fn standard_sinks_write_file_and_database() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let db_path = dir.path().join("joblog.sqlite");
    let database = joblog::DatabaseSink::new(db_path.to_string_lossy());
    database.install_schema().unwrap();

    let config = LoggerConfig::new(
        [Destination::File, Destination::Database],
        [Level::Error],
    )
    .with_file_directory(&log_dir)
    .with_connection_string(db_path.to_string_lossy());
    let logger = JobLogger::new(config).unwrap();

    logger.log_error("can't reach 'upstream'").unwrap();
    logger.log_message("dropped").unwrap();

    let file = log_dir.join(FileSink::file_name(chrono::Local::now().date_naive()));
    let content = std::fs::read_to_string(file).unwrap();
    assert_line(content.trim_end(), "Error", "can't reach 'upstream'");

    let connection = rusqlite::Connection::open(&db_path).unwrap();
    let (message, level): (String, i64) = connection
        .query_row("SELECT message, level FROM Log", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(message, "can't reach 'upstream'");
    assert_eq!(level, Level::Error.database_code());
}
