//! Log Reader
//!
//! Reads the record log line by line, classifying each line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::record::{Record, TERMINATOR};
use crate::error::Result;

/// One classified line of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    /// A well-formed `<key>,<value>` record
    Record(Record),

    /// A line that cannot be decoded
    Malformed { reason: String },
}

/// Reads lines from a log source
pub struct LogReader<R = BufReader<File>> {
    reader: R,
    buf: Vec<u8>,
    line_number: u64,
    bytes_read: u64,
    unterminated_tail: bool,
}

impl LogReader<BufReader<File>> {
    /// Open a log file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LogReader<R> {
    /// Wrap any buffered source (used for in-memory logs in tests)
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
            bytes_read: 0,
            unterminated_tail: false,
        }
    }

    /// Read and classify the next line.
    ///
    /// Only the terminating `\n` is stripped; every other byte is kept.
    /// A final line without a terminator is still returned.
    pub fn next_line(&mut self) -> Result<Option<LogLine>> {
        self.buf.clear();
        let n = self.reader.read_until(TERMINATOR, &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }

        self.bytes_read += n as u64;
        self.line_number += 1;

        if self.buf.last() == Some(&TERMINATOR) {
            self.buf.pop();
        } else {
            self.unterminated_tail = true;
        }

        let line = match std::str::from_utf8(&self.buf) {
            Ok(line) => line,
            Err(e) => {
                return Ok(Some(LogLine::Malformed {
                    reason: format!("invalid UTF-8: {}", e),
                }))
            }
        };

        Ok(Some(match Record::decode(line) {
            Some(record) => LogLine::Record(record),
            None => LogLine::Malformed {
                reason: "no separator".to_string(),
            },
        }))
    }

    /// 1-based number of the line most recently returned
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Bytes consumed so far, terminators included
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// True once a final line lacking `\n` has been read
    pub fn unterminated_tail(&self) -> bool {
        self.unterminated_tail
    }
}

impl<R: BufRead> Iterator for LogReader<R> {
    type Item = Result<LogLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
