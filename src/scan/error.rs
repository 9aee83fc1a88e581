//! Scan error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while scanning a directory tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory could not be listed (permission denied, vanished, I/O error).
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Path of the directory whose listing failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::ReadDir { path, .. } => path,
        }
    }
}
