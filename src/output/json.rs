//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::scan::ScanResult;

use super::size::SizeFormatter;

/// One directory in a JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonEntry {
    /// Path decoded lossily; JSON strings cannot carry invalid UTF-8
    pub path: String,
    pub bytes: u64,
    /// Unaligned megabyte string, e.g. `"1.00 MB"`
    pub size: String,
}

impl JsonEntry {
    fn new(path: &[u8], bytes: u64) -> Self {
        Self {
            path: String::from_utf8_lossy(path).into_owned(),
            bytes,
            size: SizeFormatter::new(false).format(bytes),
        }
    }
}

/// Root total as a single JSON entry.
pub(super) fn sum_entry(result: &ScanResult) -> JsonEntry {
    JsonEntry::new(&result.root, result.table.get(&result.root).unwrap_or(0))
}

/// Every directory as JSON entries, in descending path order.
pub(super) fn listing_entries(result: &ScanResult) -> Vec<JsonEntry> {
    result
        .table
        .iter_descending()
        .map(|(path, bytes)| JsonEntry::new(path, bytes))
        .collect()
}

/// Write a value as pretty-printed JSON followed by a newline.
pub(super) fn write_pretty<W: Write + ?Sized, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
