//! MemTable Module
//!
//! In-memory mapping from key to value.
//!
//! ## Responsibilities
//! - Fast reads and writes in memory
//! - Last write wins per key
//! - Hand out copies, never references into the table, across the store API
//!
//! ## Data Structure Choice
//! Plain `HashMap`: iteration order carries no meaning, and the store is
//! single-threaded (see `SharedStore` for cross-thread use).

mod table;

pub use table::MemTable;
