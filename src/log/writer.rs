//! Log Writer
//!
//! Handles appending records to the log file.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::record::{Record, TERMINATOR};
use crate::config::SyncStrategy;
use crate::error::Result;

/// Exclusively owned append-mode handle on the record log.
///
/// The handle is released when the writer is dropped.
#[derive(Debug)]
pub struct LogWriter {
    file: File,
    path: PathBuf,
    sync_strategy: SyncStrategy,
    records_appended: u64,
}

impl LogWriter {
    /// Open or create a log file for appending.
    ///
    /// Existing content is never truncated. If the file ends in a torn line
    /// (no trailing newline) a single newline is appended first so the next
    /// record starts on its own line.
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)?;

        if Self::ends_unterminated(&mut file)? {
            warn!(path = %path.display(), "log ends without a newline, terminating torn line");
            file.write_all(&[TERMINATOR])?;
            if sync_strategy == SyncStrategy::EveryWrite {
                file.sync_data()?;
            }
        }

        debug!(path = %path.display(), ?sync_strategy, "opened record log for append");

        Ok(Self {
            file,
            path: path.to_path_buf(),
            sync_strategy,
            records_appended: 0,
        })
    }

    fn ends_unterminated(file: &mut File) -> Result<bool> {
        let meta = file.metadata()?;
        if !meta.is_file() || meta.len() == 0 {
            return Ok(false);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] != TERMINATOR)
    }

    /// Append one record and make it durable per the sync strategy.
    ///
    /// The whole line goes out in a single `write_all`; nothing is buffered
    /// in user space once this returns.
    pub fn append(&mut self, key: &str, value: &str) -> Result<()> {
        if !Record::round_trips(key, value) {
            warn!(key, "record contains a separator or newline and will not replay as written");
        }

        let line = Record::encode_pair(key, value);
        self.file.write_all(&line)?;
        self.file.flush()?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.file.sync_data()?;
        }

        self.records_appended += 1;
        Ok(())
    }

    /// Force sync to disk
    pub fn sync(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }

    /// Records appended through this handle (not counting replayed ones)
    pub fn records_appended(&self) -> u64 {
        self.records_appended
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sync_strategy(&self) -> SyncStrategy {
        self.sync_strategy
    }
}
