//! Error types for FlashKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FlashError
pub type Result<T> = std::result::Result<T, FlashError>;

/// Unified error type for FlashKV operations
#[derive(Debug, Error)]
pub enum FlashError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Log Errors
    // -------------------------------------------------------------------------
    /// Only raised when replaying with `ParseMode::Strict`
    #[error("Malformed log record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// A previous append failed; the log tail may hold a partial record
    #[error("Store is poisoned by an earlier log write failure")]
    Poisoned,

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

impl FlashError {
    /// True for the recoverable "absent key" case
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, FlashError::KeyNotFound(_))
    }
}
