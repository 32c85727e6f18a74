//! Append-only move log: one JSON line per completed game.
//!
//! The destination is always injected, either a path opened in append mode or
//! any [`Write`] sink.

use crate::games::reversi::{GameRecord, RecordError};
use derive_more::{Display, Error};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Move log failure with caller location.
#[derive(Debug, Clone, Display, Error)]
#[display("Move log error: {} at {}:{}", message, file, line)]
pub struct LogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LogError {
    /// Creates a new log error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for LogError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<RecordError> for LogError {
    #[track_caller]
    fn from(err: RecordError) -> Self {
        Self::new(format!("Record error: {}", err))
    }
}

/// Opens `path` for appending, creating it and its parent directories.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn open_append(path: impl AsRef<Path>) -> Result<File, LogError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    debug!("Move log opened");
    Ok(file)
}

/// Writes one finalized record as a line.
#[instrument(skip_all, fields(moves = record.moves().len()))]
pub fn write_record<W: Write>(sink: &mut W, record: &GameRecord) -> Result<(), LogError> {
    let line = record.to_line()?;
    writeln!(sink, "{}", line)?;
    sink.flush()?;
    Ok(())
}

/// Appends one finalized record to the log at `path`.
#[instrument(skip(path, record), fields(path = %path.as_ref().display()))]
pub fn append_to_path(path: impl AsRef<Path>, record: &GameRecord) -> Result<(), LogError> {
    let mut file = open_append(path)?;
    write_record(&mut file, record)?;
    info!("Game appended to move log");
    Ok(())
}

/// Reads every record from `reader`, skipping blank lines.
#[instrument(skip_all)]
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<GameRecord>, LogError> {
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = GameRecord::from_line(&line)
            .map_err(|e| LogError::new(format!("Line {}: {}", number + 1, e)))?;
        records.push(record);
    }
    debug!(count = records.len(), "Records read");
    Ok(records)
}

/// Reads every record from the log at `path`.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<GameRecord>, LogError> {
    let file = File::open(path.as_ref()).map_err(|e| {
        LogError::new(format!(
            "Failed to open {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::reversi::{Outcome, Position, Side};

    fn finished(black: u8, white: u8) -> GameRecord {
        let mut record = GameRecord::new();
        record
            .append(Side::Black, Position::new(3, 5))
            .expect("append");
        record
            .finalize(Outcome::from_counts(black, white), black, white)
            .expect("finalize");
        record
    }

    #[test]
    fn test_write_then_read_sink() {
        let mut sink = Vec::new();
        write_record(&mut sink, &finished(4, 1)).expect("write");
        write_record(&mut sink, &finished(1, 4)).expect("write");

        let text = String::from_utf8(sink.clone()).expect("utf8");
        assert_eq!(text.lines().count(), 2);

        let records = read_records(sink.as_slice()).expect("read");
        assert_eq!(records, vec![finished(4, 1), finished(1, 4)]);
    }

    #[test]
    fn test_unfinalized_record_is_not_written() {
        let mut sink = Vec::new();
        let err = write_record(&mut sink, &GameRecord::new()).unwrap_err();
        assert!(err.message.contains("not finalized"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let input = "\n{\"result\":{\"black\":4,\"white\":1},\"process\":\"bD6\"}\nnope\n";
        let err = read_records(input.as_bytes()).unwrap_err();
        assert!(err.message.starts_with("Line 3:"));
        assert!(err.file.ends_with("move_log.rs"));
    }
}
