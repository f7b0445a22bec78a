//! # FlashKV
//!
//! A minimal key-value store with:
//! - String keys and string values, last write wins
//! - An optional append-only record log for persistence
//! - Log replay on startup, tolerant of malformed lines
//! - A durable sync on every write before control returns
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Store                               │
//! │               set(key, value) / get(key)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │ 1. append + sync        │ 2. apply
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Record Log │          │  MemTable   │
//!   │  (append)   │          │  (HashMap)  │
//!   └──────┬──────┘          └──────▲──────┘
//!          │                        │
//!          └──── replay on open ────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use flashkv::Store;
//!
//! let mut store = Store::open("data.log")?;
//! store.set("x", "1")?;
//! assert_eq!(store.get("x")?, "1");
//! # Ok::<(), flashkv::FlashError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod log;
pub mod memtable;
pub mod store;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FlashError, Result};
pub use config::{Config, ParseMode, SyncStrategy};
pub use store::Store;
pub use shared::SharedStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FlashKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
