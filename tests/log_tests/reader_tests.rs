//! Tests for Log Reader
//!
//! These tests verify:
//! - Line classification (record vs malformed)
//! - Line numbering and byte counting
//! - Unterminated final lines
//! - Non-UTF-8 lines

use std::fs;
use std::io::Cursor;

use flashkv::log::{LogLine, LogReader, Record};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn reader_over(bytes: &[u8]) -> LogReader<Cursor<Vec<u8>>> {
    LogReader::from_reader(Cursor::new(bytes.to_vec()))
}

fn record(key: &str, value: &str) -> LogLine {
    LogLine::Record(Record::new(key, value))
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_read_empty_source() {
    let mut reader = reader_over(b"");

    assert_eq!(reader.next_line().unwrap(), None);
    assert_eq!(reader.line_number(), 0);
    assert_eq!(reader.bytes_read(), 0);
    assert!(!reader.unterminated_tail());
}

#[test]
fn test_read_records_in_order() {
    let mut reader = reader_over(b"a,1\nb,2\n");

    assert_eq!(reader.next_line().unwrap(), Some(record("a", "1")));
    assert_eq!(reader.line_number(), 1);
    assert_eq!(reader.next_line().unwrap(), Some(record("b", "2")));
    assert_eq!(reader.line_number(), 2);
    assert_eq!(reader.next_line().unwrap(), None);
    assert_eq!(reader.bytes_read(), 8);
}

#[test]
fn test_read_malformed_line() {
    let mut reader = reader_over(b"no separator here\n");

    let line = reader.next_line().unwrap().unwrap();
    assert!(matches!(line, LogLine::Malformed { .. }));
}

#[test]
fn test_read_blank_line_is_malformed() {
    let mut reader = reader_over(b"\n");

    let line = reader.next_line().unwrap().unwrap();
    assert!(matches!(line, LogLine::Malformed { .. }));
}

#[test]
fn test_read_invalid_utf8_is_malformed() {
    let mut reader = reader_over(b"k,\xff\xfe\nok,1\n");

    match reader.next_line().unwrap().unwrap() {
        LogLine::Malformed { reason } => assert!(reason.contains("UTF-8")),
        other => panic!("expected malformed line, got {:?}", other),
    }
    assert_eq!(reader.next_line().unwrap(), Some(record("ok", "1")));
}

#[test]
fn test_read_keeps_value_commas() {
    let mut reader = reader_over(b"a,b,c,d\n");
    assert_eq!(reader.next_line().unwrap(), Some(record("a", "b,c,d")));
}

// =============================================================================
// Unterminated Tail Tests
// =============================================================================

#[test]
fn test_read_unterminated_final_line() {
    let mut reader = reader_over(b"a,1\nb,2");

    assert_eq!(reader.next_line().unwrap(), Some(record("a", "1")));
    assert!(!reader.unterminated_tail());
    assert_eq!(reader.next_line().unwrap(), Some(record("b", "2")));
    assert!(reader.unterminated_tail());
    assert_eq!(reader.next_line().unwrap(), None);
}

#[test]
fn test_read_tail_torn_inside_multibyte_char() {
    // "café" cut after the first byte of "é"
    let mut reader = reader_over(b"a,1\nk,caf\xc3");

    assert_eq!(reader.next_line().unwrap(), Some(record("a", "1")));
    assert!(matches!(
        reader.next_line().unwrap(),
        Some(LogLine::Malformed { .. })
    ));
    assert!(reader.unterminated_tail());
}

// =============================================================================
// Iterator / File Tests
// =============================================================================

#[test]
fn test_iterate_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.log");
    fs::write(&path, "a,1\nbroken\nc,3\n").unwrap();

    let lines: Vec<LogLine> = LogReader::open(&path)
        .unwrap()
        .collect::<flashkv::Result<_>>()
        .unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], record("a", "1"));
    assert!(matches!(lines[1], LogLine::Malformed { .. }));
    assert_eq!(lines[2], record("c", "3"));
}

#[test]
fn test_open_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    assert!(LogReader::open(&temp.path().join("absent.log")).is_err());
}
