//! Store Module
//!
//! The key-value engine: an in-memory mapping plus an optional record log.
//!
//! ## Responsibilities
//! - Replay an existing log on construction
//! - Append every `set` to the log before applying it in memory
//! - Serve `get` from memory only
//! - Own the log handle for the store's whole lifetime

use std::path::Path;

use tracing::{debug, error};

use crate::config::Config;
use crate::error::{FlashError, Result};
use crate::log::{LogRecovery, LogWriter, RecoveryResult};
use crate::memtable::MemTable;

/// The key-value store
///
/// ## Write Ordering: log first, then memory
///
/// `set` appends (and syncs) the record before touching the mapping, so a
/// failed write never leaves memory ahead of the log. After a failed append
/// the log tail may hold a partial record; the store is then poisoned and
/// rejects further writes. Reads keep working.
///
/// ## Concurrency
///
/// None. Methods that mutate take `&mut self`; wrap the store in
/// [`SharedStore`](crate::SharedStore) to share it across threads.
#[derive(Debug)]
pub struct Store {
    /// Store configuration
    config: Config,

    /// Current key/value mapping
    entries: MemTable,

    /// Append-mode log handle, `None` for an ephemeral store
    log: Option<LogWriter>,

    /// Stats from the replay done at construction
    recovery: RecoveryResult,

    /// Set once an append fails
    poisoned: bool,
}

impl Store {
    /// Create an empty, memory-only store
    pub fn in_memory() -> Self {
        Self {
            config: Config::default(),
            entries: MemTable::new(),
            log: None,
            recovery: RecoveryResult::default(),
            poisoned: false,
        }
    }

    /// Open a persistent store backed by the log at `path`
    ///
    /// Uses the default config (tolerant replay, sync on every write).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder().log_path(path.as_ref()).build();
        Self::open_with(config)
    }

    /// Open a store from a config
    ///
    /// On startup:
    /// 1. Replay the log, if it exists, into a fresh mapping
    /// 2. Open the log for appending (created if missing, never truncated)
    ///
    /// Any failure drops whatever was acquired and returns the error.
    pub fn open_with(config: Config) -> Result<Self> {
        let Some(path) = config.log_path.clone() else {
            let mut store = Self::in_memory();
            store.config = config;
            return Ok(store);
        };

        let (entries, recovery) = LogRecovery::recover(&path, config.parse_mode)?;
        let log = LogWriter::open(&path, config.sync_strategy)?;

        debug!(
            path = %path.display(),
            keys = entries.len(),
            "store ready"
        );

        Ok(Self {
            config,
            entries,
            log: Some(log),
            recovery,
            poisoned: false,
        })
    }

    /// Set `key` to `value`
    ///
    /// For a persistent store the record `<key>,<value>\n` is appended and
    /// synced before this returns. Earlier records for the key are left in
    /// place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        if self.poisoned {
            return Err(FlashError::Poisoned);
        }

        let key = key.into();
        let value = value.into();

        if let Some(log) = self.log.as_mut() {
            if let Err(e) = log.append(&key, &value) {
                error!(key = %key, error = %e, "log append failed, store is now poisoned");
                self.poisoned = true;
                return Err(e);
            }
        }

        self.entries.put(key, value);
        Ok(())
    }

    /// Get a copy of the value for `key`
    pub fn get(&self, key: &str) -> Result<String> {
        self.entries
            .get(key)
            .ok_or_else(|| FlashError::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Force a durable sync of the log (no-op when ephemeral)
    pub fn sync(&mut self) -> Result<()> {
        match self.log.as_mut() {
            Some(log) => log.sync(),
            None => Ok(()),
        }
    }

    /// Sync and release the log handle
    ///
    /// Dropping the store also releases the handle, without the final sync.
    pub fn close(mut self) -> Result<()> {
        if !self.poisoned {
            self.sync()?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn is_persistent(&self) -> bool {
        self.log.is_some()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Location of the log, if any
    pub fn log_path(&self) -> Option<&Path> {
        self.log.as_ref().map(|log| log.path())
    }

    /// Stats from the replay done at construction
    pub fn recovery(&self) -> &RecoveryResult {
        &self.recovery
    }

    /// Read-only view of the mapping
    pub fn entries(&self) -> &MemTable {
        &self.entries
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
