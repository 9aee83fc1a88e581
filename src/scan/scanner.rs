//! Scanner - recursive depth-first size aggregation

use std::path::Path;

use tracing::{debug, trace};

use super::config::ScanConfig;
use super::error::ScanError;
use super::reader::{DirReader, FsReader};
use super::table::SizeTable;
use super::utils::{is_dot_name, join_key, path_bytes};

/// Outcome of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Key of the root directory: the root path's bytes exactly as passed in
    pub root: Vec<u8>,
    /// Aggregate size of the root (0 if the root was skipped as unreadable)
    pub total: u64,
    pub table: SizeTable,
}

/// Walks a directory tree and records the cumulative size of each directory.
///
/// Traversal is single-threaded and depth-first. There is no cycle detection:
/// symlinks are never descended into, but a bind-mount loop recurses forever.
pub struct Scanner<R = FsReader> {
    config: ScanConfig,
    reader: R,
}

impl Scanner<FsReader> {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_reader(config, FsReader)
    }
}

impl<R: DirReader> Scanner<R> {
    /// Create a scanner that lists directories through a custom reader.
    pub fn with_reader(config: ScanConfig, reader: R) -> Self {
        Self { config, reader }
    }

    /// Scan the tree rooted at `root`.
    ///
    /// The root itself is never subject to the dot-file filter. With
    /// `ignore_errors` unset, the first unreadable directory aborts the scan.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        let root_key = path_bytes(root.as_os_str()).to_vec();
        let mut table = SizeTable::new();

        let total = self.scan_dir(root, &root_key, &mut table)?;
        debug!(
            root = %root.display(),
            directories = table.len(),
            total_bytes = total,
            "scan complete"
        );

        Ok(ScanResult {
            root: root_key,
            total,
            table,
        })
    }

    fn scan_dir(&self, path: &Path, key: &[u8], table: &mut SizeTable) -> Result<u64, ScanError> {
        let entries = match self.reader.read_dir(path) {
            Ok(entries) => entries,
            Err(source) if self.config.ignore_errors => {
                debug!(path = %path.display(), error = %source, "skipping unreadable directory");
                return Ok(0);
            }
            Err(source) => {
                return Err(ScanError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut size: u64 = 0;
        for entry in entries {
            if self.config.ignore_dot_files && is_dot_name(&entry.name) {
                continue;
            }

            if entry.is_dir {
                let child_key = join_key(key, path_bytes(&entry.name));
                let child_size = self.scan_dir(&path.join(&entry.name), &child_key, table)?;
                size = size.saturating_add(child_size);
            } else {
                size = size.saturating_add(entry.size);
            }
        }

        trace!(path = %path.display(), bytes = size, "recorded directory");
        table.record(key.to_vec(), size);
        Ok(size)
    }
}
