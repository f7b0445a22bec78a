//! Log Recovery
//!
//! Rebuilds the in-memory mapping by replaying the log from the start.

use std::io::{BufRead, ErrorKind};
use std::path::Path;

use tracing::{debug, info};

use super::reader::{LogLine, LogReader};
use crate::config::ParseMode;
use crate::error::{FlashError, Result};
use crate::memtable::MemTable;

/// Replays record logs
pub struct LogRecovery;

/// Result of a replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryResult {
    /// Well-formed records applied, duplicates included
    pub records_recovered: u64,

    /// Lines skipped for lacking a separator or not being UTF-8
    pub lines_skipped: u64,

    /// Total bytes read from the log
    pub bytes_read: u64,

    /// Whether the last line had no trailing newline
    pub unterminated_tail: bool,
}

impl LogRecovery {
    /// Recover the mapping stored in a log file.
    ///
    /// A file that does not exist yet is an empty log. Later records
    /// override earlier ones for the same key.
    pub fn recover(path: &Path, mode: ParseMode) -> Result<(MemTable, RecoveryResult)> {
        match Self::recover_existing(path, mode) {
            Err(FlashError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no existing log, starting empty");
                Ok((MemTable::new(), RecoveryResult::default()))
            }
            other => other,
        }
    }

    /// Like [`recover`](Self::recover), but a missing file is an `Io` error
    pub fn recover_existing(path: &Path, mode: ParseMode) -> Result<(MemTable, RecoveryResult)> {
        let reader = LogReader::open(path)?;

        let mut table = MemTable::new();
        let result = Self::replay(reader, mode, &mut table)?;

        info!(
            path = %path.display(),
            records = result.records_recovered,
            skipped = result.lines_skipped,
            keys = table.len(),
            "log replay complete"
        );

        Ok((table, result))
    }

    /// Apply every record from `reader` to `table`, in order
    pub fn replay<R: BufRead>(
        mut reader: LogReader<R>,
        mode: ParseMode,
        table: &mut MemTable,
    ) -> Result<RecoveryResult> {
        let mut result = RecoveryResult::default();

        while let Some(line) = reader.next_line()? {
            match line {
                LogLine::Record(record) => {
                    table.put(record.key, record.value);
                    result.records_recovered += 1;
                }
                LogLine::Malformed { reason } => {
                    if mode == ParseMode::Strict {
                        return Err(FlashError::MalformedRecord {
                            line: reader.line_number(),
                            reason,
                        });
                    }
                    debug!(line = reader.line_number(), %reason, "skipping malformed log line");
                    result.lines_skipped += 1;
                }
            }
        }

        result.bytes_read = reader.bytes_read();
        result.unterminated_tail = reader.unterminated_tail();
        Ok(result)
    }

    /// Replay an existing log tolerantly and report stats, discarding the data
    pub fn verify(path: &Path) -> Result<RecoveryResult> {
        let (_, result) = Self::recover_existing(path, ParseMode::Tolerant)?;
        Ok(result)
    }
}
