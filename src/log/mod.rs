//! Record Log Module
//!
//! Provides durability through an append-only, line-oriented text log.
//!
//! ## Responsibilities
//! - Append one record per `set`, in the order applied
//! - Durable sync before the caller regains control
//! - Replay the log from the start to rebuild the mapping
//! - Tolerate (or, in strict mode, reject) lines without a separator
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────┐
//! │ <key>,<value>\n              │  record 1
//! │ <key>,<value>\n              │  record 2
//! │ ...                          │
//! └──────────────────────────────┘
//! ```
//! The first comma on a line separates key from value. Values may contain
//! commas; keys may not. There is no header, footer, checksum or count, and
//! nothing is ever escaped.

mod record;
mod writer;
mod reader;
mod recovery;

pub use record::{Record, SEPARATOR, TERMINATOR};
pub use writer::LogWriter;
pub use reader::{LogLine, LogReader};
pub use recovery::{LogRecovery, RecoveryResult};
