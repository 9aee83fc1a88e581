//! Per-directory size table

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Cumulative size in bytes of every directory visited by a scan, keyed by
/// the raw bytes of the directory's path.
///
/// Ordering is byte-wise, so names that are not valid UTF-8 still sort and
/// stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTable {
    sizes: BTreeMap<Vec<u8>, u64>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the size of a directory, replacing any earlier value.
    pub fn record(&mut self, path: Vec<u8>, bytes: u64) {
        self.sizes.insert(path, bytes);
    }

    pub fn get(&self, path: impl AsRef<[u8]>) -> Option<u64> {
        self.sizes.get(path.as_ref()).copied()
    }

    pub fn contains(&self, path: impl AsRef<[u8]>) -> bool {
        self.sizes.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate entries in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.sizes.iter().map(|(k, v)| (k.as_slice(), *v))
    }

    /// Iterate entries in descending lexicographic (byte-wise) path order.
    pub fn iter_descending(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.sizes.iter().rev().map(|(k, v)| (k.as_slice(), *v))
    }

    /// Length in bytes of the longest path in the table.
    ///
    /// This is bytes, not characters: the listing pads paths by character
    /// count to this width, so non-ASCII paths get extra padding.
    pub fn max_path_len(&self) -> usize {
        self.sizes.keys().map(Vec::len).max().unwrap_or(0)
    }
}

/// Serializes as a JSON-style object with lossily decoded path keys.
impl Serialize for SizeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.sizes
                .iter()
                .map(|(k, v)| (String::from_utf8_lossy(k), *v)),
        )
    }
}
