//! Configuration for FlashKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a FlashKV store
#[derive(Debug, Clone, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Location of the record log.
    /// `None` gives an ephemeral, memory-only store.
    pub log_path: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Log Configuration
    // -------------------------------------------------------------------------
    /// How appended records reach the storage medium
    pub sync_strategy: SyncStrategy,

    /// How replay treats lines without a separator
    pub parse_mode: ParseMode,
}

/// Log sync strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync (data only) after every append
    #[default]
    EveryWrite,

    /// Hand bytes to the OS without fsync.
    /// Records are visible to later reads but may be lost on power failure.
    OsBuffered,
}

/// Replay parse mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip malformed lines silently
    #[default]
    Tolerant,

    /// Fail construction on the first malformed line
    Strict,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// True when this config describes a log-backed store
    pub fn is_persistent(&self) -> bool {
        self.log_path.is_some()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record log location
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = Some(path.into());
        self
    }

    /// Set the log sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the replay parse mode
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.config.parse_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
