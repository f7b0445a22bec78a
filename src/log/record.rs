//! Log record encoding
//!
//! One record is one line: `<key>,<value>\n`, written verbatim.

/// Separates key from value; only the first occurrence on a line counts
pub const SEPARATOR: u8 = b',';

/// Terminates every record
pub const TERMINATOR: u8 = b'\n';

/// A single `set` as it appears in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Serialize to the on-disk line, terminator included
    pub fn encode(&self) -> Vec<u8> {
        Self::encode_pair(&self.key, &self.value)
    }

    /// Serialize a borrowed pair without building a `Record`
    pub fn encode_pair(key: &str, value: &str) -> Vec<u8> {
        let mut buf = Vec::with_capacity(key.len() + value.len() + 2);
        buf.extend_from_slice(key.as_bytes());
        buf.push(SEPARATOR);
        buf.extend_from_slice(value.as_bytes());
        buf.push(TERMINATOR);
        buf
    }

    /// Parse a line (terminator already stripped).
    ///
    /// Splits on the first comma. Returns `None` when the line has no comma.
    pub fn decode(line: &str) -> Option<Self> {
        line.split_once(SEPARATOR as char)
            .map(|(key, value)| Self::new(key, value))
    }

    /// Whether `decode(encode(pair))` gives the same pair back.
    ///
    /// False when the key holds a comma or either side holds a newline.
    pub fn round_trips(key: &str, value: &str) -> bool {
        !key.contains(SEPARATOR as char)
            && !key.contains(TERMINATOR as char)
            && !value.contains(TERMINATOR as char)
    }
}
