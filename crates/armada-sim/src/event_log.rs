//! Append-only replay log writer.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use armada_core::events::LogRecord;

/// Writes one `LogRecord` per line to any `Write` sink.
pub struct EventLog<W: Write> {
    writer: W,
    records: u64,
}

impl EventLog<BufWriter<File>> {
    /// Create (or truncate) a log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> u64 {
        self.records
    }

    pub fn record(&mut self, record: &LogRecord) -> io::Result<()> {
        writeln!(self.writer, "{record}")?;
        self.records += 1;
        Ok(())
    }

    pub fn record_batch(&mut self, records: &[LogRecord]) -> io::Result<()> {
        for record in records {
            self.record(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
