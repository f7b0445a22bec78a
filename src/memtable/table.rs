//! MemTable implementation

use std::collections::HashMap;

/// In-memory key/value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemTable {
    data: HashMap<String, String>,
}

impl MemTable {
    /// Create a new empty MemTable
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous value
    pub fn put(&mut self, key: String, value: String) -> Option<String> {
        self.data.insert(key, value)
    }

    /// Copy of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by key, for stable comparison and digests
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
    }

    /// CRC32 over the sorted state, fed one `key,value\n` line per entry.
    ///
    /// Equal tables give equal digests regardless of insertion order.
    pub fn digest(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for (key, value) in self.sorted() {
            hasher.update(key.as_bytes());
            hasher.update(b",");
            hasher.update(value.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize()
    }

    /// Sorted keys whose value differs from `other`, or that only one side holds
    pub fn differing_keys(&self, other: &MemTable) -> Vec<String> {
        let mut keys: Vec<String> = self
            .data
            .iter()
            .filter(|(k, v)| other.data.get(k.as_str()) != Some(*v))
            .map(|(k, _)| k.clone())
            .chain(
                other
                    .data
                    .keys()
                    .filter(|k| !self.data.contains_key(k.as_str()))
                    .cloned(),
            )
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<(String, String)> for MemTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = MemTable::new();
        for (key, value) in iter {
            table.put(key, value);
        }
        table
    }
}
